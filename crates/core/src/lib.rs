//! Planning logic for Staffplan.
//!
//! This crate turns monthly staffing inputs into revenue, cost, margin and
//! gross margin. It has no network or runtime dependencies; the only I/O is
//! the workbook adapter, which works on in-memory bytes.
//!
//! # Modules
//!
//! - `drivers` - Global cost and revenue defaults
//! - `model` - Cost-per-head and revenue formulas
//! - `store` - The twelve month records of a planning session
//! - `engine` - Monthly aggregates and drill-down
//! - `comparison` - Month-over-month deltas and margin bridge
//! - `workbook` - Spreadsheet import and export

pub mod comparison;
pub mod drivers;
pub mod engine;
pub mod error;
pub mod model;
pub mod store;
pub mod workbook;
