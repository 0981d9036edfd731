//! Month-over-month analysis.

pub mod service;
pub mod types;

pub use service::ComparisonEngine;
pub use types::{BridgeLine, MonthComparison};
