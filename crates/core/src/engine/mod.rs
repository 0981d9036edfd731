//! Compute engine: revenue, cost, margin and GM% per month.

pub mod service;
pub mod types;

#[cfg(test)]
mod props;
#[cfg(test)]
mod tests;

pub use service::ComputeEngine;
pub use types::{MonthBreakdown, MonthSummary, OverheadDetail, ProductionDetail};
