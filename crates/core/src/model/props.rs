//! Property-based tests for the cost and revenue models.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::cost::CostModel;
use super::revenue::RevenueModel;
use crate::drivers::GlobalDrivers;

/// Non-negative salaries (0.00 to 1,000,000.00).
fn salary() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Non-negative driver values with four decimals (0 to 100).
fn driver_value() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Non-negative increments.
fn increment() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn drivers_from(values: (Decimal, Decimal, Decimal, Decimal)) -> GlobalDrivers {
    let (salary_multiplier, bonus_pct, bonus_multiplier, meal_card) = values;
    GlobalDrivers {
        salary_multiplier,
        bonus_pct,
        bonus_multiplier,
        meal_card,
        ..GlobalDrivers::default()
    }
}

fn drivers_strategy() -> impl Strategy<Value = GlobalDrivers> {
    (driver_value(), driver_value(), driver_value(), driver_value()).prop_map(drivers_from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_cost_monotonic_in_salary_multiplier(
        drivers in drivers_strategy(),
        salary in salary(),
        delta in increment(),
    ) {
        let raised = GlobalDrivers { salary_multiplier: drivers.salary_multiplier + delta, ..drivers.clone() };
        prop_assert!(CostModel::cost_per_head(&raised, salary) >= CostModel::cost_per_head(&drivers, salary));
    }

    #[test]
    fn prop_cost_monotonic_in_bonus_pct(
        drivers in drivers_strategy(),
        salary in salary(),
        delta in increment(),
    ) {
        let raised = GlobalDrivers { bonus_pct: drivers.bonus_pct + delta, ..drivers.clone() };
        prop_assert!(CostModel::cost_per_head(&raised, salary) >= CostModel::cost_per_head(&drivers, salary));
    }

    #[test]
    fn prop_cost_monotonic_in_bonus_multiplier(
        drivers in drivers_strategy(),
        salary in salary(),
        delta in increment(),
    ) {
        let raised = GlobalDrivers { bonus_multiplier: drivers.bonus_multiplier + delta, ..drivers.clone() };
        prop_assert!(CostModel::cost_per_head(&raised, salary) >= CostModel::cost_per_head(&drivers, salary));
    }

    #[test]
    fn prop_cost_monotonic_in_meal_card(
        drivers in drivers_strategy(),
        salary in salary(),
        delta in increment(),
    ) {
        let raised = GlobalDrivers { meal_card: drivers.meal_card + delta, ..drivers.clone() };
        prop_assert!(CostModel::cost_per_head(&raised, salary) >= CostModel::cost_per_head(&drivers, salary));
    }

    /// Productive heads never go negative and never exceed closing heads.
    #[test]
    fn prop_productive_hc_bounded(
        closing in (0i64..100_000i64).prop_map(|v| Decimal::new(v, 1)),
        training in (0i64..100_000i64).prop_map(|v| Decimal::new(v, 1)),
    ) {
        let productive = RevenueModel::productive_hc(closing, training);
        prop_assert!(productive >= Decimal::ZERO);
        prop_assert!(productive <= closing);
    }
}
