//! Compute engine result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use staffplan_shared::types::Month;

use crate::store::{Language, ResolvedInputs, Role};

/// Financial aggregates of one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// Month.
    pub month: Month,
    /// Total revenue, local currency.
    pub revenue: Decimal,
    /// Total cost (production + overhead).
    pub cost: Decimal,
    /// Cost of production heads, overtime included.
    pub production_cost: Decimal,
    /// Cost of overhead roles.
    pub overhead_cost: Decimal,
    /// Revenue minus cost.
    pub margin: Decimal,
    /// Margin over revenue as a fraction; 0 when there is no revenue.
    pub gm_pct: Decimal,
}

/// Per-solution drill-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionDetail {
    /// Language.
    pub language: Language,
    /// Zero-based solution index within the language.
    pub solution: usize,
    /// Heads drawing salary (flat headcount or closing headcount).
    pub paid_hc: Decimal,
    /// Heads billed at full productivity.
    pub productive_hc: Decimal,
    /// Heads in training.
    pub training_hc: Decimal,
    /// Loaded cost of one head.
    pub cost_per_head: Decimal,
    /// Salary cost of the paid heads.
    pub base_cost: Decimal,
    /// Overtime pay.
    pub overtime_cost: Decimal,
    /// Revenue from regular billable hours (or heads, under fixed billing).
    pub base_revenue: Decimal,
    /// Revenue from billed overtime.
    pub overtime_revenue: Decimal,
    /// `base_cost + overtime_cost`.
    pub cost: Decimal,
    /// `base_revenue + overtime_revenue`.
    pub revenue: Decimal,
}

/// Per-role drill-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverheadDetail {
    /// Role.
    pub role: Role,
    /// Headcount.
    pub headcount: Decimal,
    /// Loaded cost of one head.
    pub cost_per_head: Decimal,
    /// `headcount × cost_per_head`.
    pub cost: Decimal,
}

/// Aggregates plus the rows they were built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBreakdown {
    /// Aggregates.
    pub summary: MonthSummary,
    /// Inputs after applying defaults.
    pub resolved: ResolvedInputs,
    /// Billable hours per productive head.
    pub effective_hours: Decimal,
    /// One entry per solution, in language then solution order.
    pub production: Vec<ProductionDetail>,
    /// One entry per role.
    pub overhead: Vec<OverheadDetail>,
}
