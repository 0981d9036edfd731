//! Shared types, errors, and configuration for Staffplan.
//!
//! This crate provides common types used across all other crates:
//! - Calendar months, currencies and billing models
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DriverConfig, LoggingConfig};
pub use error::{AppError, AppResult};
