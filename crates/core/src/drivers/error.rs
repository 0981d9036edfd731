//! Driver validation error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// A single driver outside its allowed range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeViolation {
    /// Driver field name.
    pub field: &'static str,
    /// Offending value.
    pub value: Decimal,
    /// Human-readable description of the allowed range.
    pub expected: &'static str,
}

impl std::fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {} (expected {})", self.field, self.value, self.expected)
    }
}

/// Driver-related errors.
#[derive(Debug, Error)]
pub enum DriverError {
    /// One or more drivers are out of range.
    #[error("Invalid drivers: {}", format_violations(.0))]
    Invalid(Vec<RangeViolation>),
}

fn format_violations(violations: &[RangeViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
