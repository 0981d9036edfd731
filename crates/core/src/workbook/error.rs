//! Workbook import/export error types.

use thiserror::Error;

/// Workbook-related errors.
///
/// Any of these aborts an import before the store is touched.
#[derive(Debug, Error)]
pub enum WorkbookError {
    /// Required sheet(s) missing.
    #[error("Workbook is missing required sheet(s): {}", .missing.join(", "))]
    Schema {
        /// Names of the missing sheets.
        missing: Vec<String>,
    },

    /// Required key column missing from a sheet.
    #[error("Sheet {sheet} is missing required column {column}")]
    MissingColumn {
        /// Sheet name.
        sheet: &'static str,
        /// Column name.
        column: &'static str,
    },

    /// A numeric cell holds something that is not a number, or a number
    /// larger in magnitude than `1e12`.
    #[error("Sheet {sheet}, row {row}, column {column}: expected a number up to 1e12, got {value:?}")]
    Parse {
        /// Sheet name.
        sheet: &'static str,
        /// One-based spreadsheet row.
        row: u32,
        /// Column name.
        column: &'static str,
        /// Cell content as text.
        value: String,
    },

    /// The bytes are not a readable workbook.
    #[error("Cannot read workbook: {0}")]
    Read(String),

    /// Writing the workbook failed.
    #[error("Cannot write workbook: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
}
