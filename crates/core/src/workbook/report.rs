//! Import outcome.

use serde::Serialize;

/// Why a row was left out of an import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "value", rename_all = "snake_case")]
pub enum SkipReason {
    /// Month cell not recognized.
    UnknownMonth(String),
    /// Language cell not recognized.
    UnknownLanguage(String),
    /// Role cell not recognized.
    UnknownRole(String),
    /// Solution index not a positive integer or above the per-language limit.
    InvalidSolution(String),
    /// A rate column outside `[0, 1)` once percentages are scaled down.
    OutOfRange {
        /// Column name.
        column: &'static str,
        /// Cell value as read.
        value: String,
    },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMonth(v) => write!(f, "unknown month {v:?}"),
            Self::UnknownLanguage(v) => write!(f, "unknown language {v:?}"),
            Self::UnknownRole(v) => write!(f, "unknown role {v:?}"),
            Self::InvalidSolution(v) => write!(f, "invalid solution {v:?}"),
            Self::OutOfRange { column, value } => write!(f, "{column} out of range: {value}"),
        }
    }
}

/// A row that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// Sheet name.
    pub sheet: &'static str,
    /// One-based spreadsheet row.
    pub row: u32,
    /// Reason.
    pub reason: SkipReason,
}

/// Summary of a successful import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Rows applied to the store.
    pub rows_applied: usize,
    /// Rows left out, in sheet order.
    pub skipped: Vec<SkippedRow>,
}
