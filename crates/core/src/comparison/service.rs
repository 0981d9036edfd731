//! Comparison engine.

use rust_decimal::Decimal;
use staffplan_shared::types::Month;

use super::types::MonthComparison;
use crate::drivers::GlobalDrivers;
use crate::engine::ComputeEngine;
use crate::model::bounded;
use crate::store::MonthStore;

/// Compares the aggregates of two months.
pub struct ComparisonEngine;

impl ComparisonEngine {
    /// Computes both months independently and subtracts.
    ///
    /// Each month resolves its own FX, hours and shrinkage. Comparing a month
    /// with itself is not special-cased.
    #[must_use]
    pub fn compare_months(
        store: &MonthStore,
        drivers: &GlobalDrivers,
        current: Month,
        other: Month,
    ) -> MonthComparison {
        let current = ComputeEngine::compute_month(store, drivers, current);
        let other = ComputeEngine::compute_month(store, drivers, other);

        let revenue_delta = current.revenue.saturating_sub(other.revenue);
        let revenue_delta_pct =
            bounded::div(revenue_delta, other.revenue).saturating_mul(Decimal::ONE_HUNDRED);

        MonthComparison {
            current,
            other,
            revenue_delta,
            cost_delta: current.cost.saturating_sub(other.cost),
            margin_delta: current.margin.saturating_sub(other.margin),
            gm_delta_points: current
                .gm_pct
                .saturating_sub(other.gm_pct)
                .saturating_mul(Decimal::ONE_HUNDRED),
            revenue_delta_pct,
        }
    }

    /// Compares a month with the month before it (January with itself).
    #[must_use]
    pub fn compare_with_previous(
        store: &MonthStore,
        drivers: &GlobalDrivers,
        month: Month,
    ) -> MonthComparison {
        Self::compare_months(store, drivers, month, month.previous_or_self())
    }
}
