//! Fully-loaded cost per head.

use rust_decimal::Decimal;

use super::bounded;
use crate::drivers::GlobalDrivers;

/// Cost model for staffing.
pub struct CostModel;

impl CostModel {
    /// Fully-loaded monthly cost of one head on the given base salary.
    ///
    /// `((salary + salary × bonus_pct × bonus_multiplier) × salary_multiplier) + meal_card`
    ///
    /// Negative salaries are not rejected; they propagate arithmetically.
    #[must_use]
    pub fn cost_per_head(drivers: &GlobalDrivers, base_salary: Decimal) -> Decimal {
        let bonus = base_salary
            .saturating_mul(drivers.bonus_pct)
            .saturating_mul(drivers.bonus_multiplier);
        let gross = base_salary.saturating_add(bonus);
        gross
            .saturating_mul(drivers.salary_multiplier)
            .saturating_add(drivers.meal_card)
    }

    /// Cost of `headcount` heads on the given base salary.
    #[must_use]
    pub fn cost_for_heads(drivers: &GlobalDrivers, headcount: Decimal, base_salary: Decimal) -> Decimal {
        headcount.saturating_mul(Self::cost_per_head(drivers, base_salary))
    }

    /// Overtime pay for `headcount` heads.
    ///
    /// Overtime hours are paid on top of the monthly salary at the hourly
    /// equivalent of the loaded cost, times `overtime_multiplier`. Zero when
    /// no hours are worked.
    #[must_use]
    pub fn overtime_cost(
        drivers: &GlobalDrivers,
        headcount: Decimal,
        cost_per_head: Decimal,
        worked_hours: Decimal,
    ) -> Decimal {
        if worked_hours.is_zero() || drivers.overtime_hours_per_hc.is_zero() {
            return Decimal::ZERO;
        }
        let overtime_pay = headcount
            .saturating_mul(cost_per_head)
            .saturating_mul(drivers.overtime_multiplier)
            .saturating_mul(drivers.overtime_hours_per_hc);
        bounded::div(overtime_pay, worked_hours)
    }
}
