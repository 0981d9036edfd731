//! Workbook adapter: import a planning workbook into the month store and
//! export the store (plus computed totals) back to a workbook.
//!
//! Import and export are the only I/O boundary of the crate. Spreadsheet
//! numbers cross it as `f64` and are converted to `Decimal` at once.

mod cell;
pub mod error;
pub mod reader;
pub mod report;
pub mod schema;
pub mod writer;

#[cfg(test)]
mod props;

pub use error::WorkbookError;
pub use reader::import_workbook;
pub use report::{ImportReport, SkipReason, SkippedRow};
pub use writer::export_workbook;
