//! Property-based tests for the compute engine.

use proptest::prelude::*;
use rust_decimal::Decimal;
use staffplan_shared::types::Month;

use super::service::ComputeEngine;
use crate::drivers::GlobalDrivers;
use crate::store::{Language, MonthStore, Role, Staffing};

fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn month() -> impl Strategy<Value = Month> {
    (0usize..12).prop_map(|i| Month::ALL[i])
}

/// A store where every headcount is zero but salaries and prices are not.
fn zero_headcount_store() -> impl Strategy<Value = MonthStore> {
    (
        prop::collection::vec((amount(), amount()), Language::ALL.len()),
        prop::collection::vec(amount(), Role::ALL.len()),
        month(),
        prop::option::of(amount()),
    )
        .prop_map(|(production, overhead, month, fx)| {
            let mut store = MonthStore::new();
            store.set_fx(month, fx);
            for (language, (salary, price)) in Language::ALL.into_iter().zip(production) {
                let row = store.solution_mut(month, language, 0).expect("default solution");
                row.base_salary = salary;
                row.unit_price = price;
                row.staffing = Staffing::Flat {
                    headcount: Decimal::ZERO,
                };
            }
            for (role, salary) in Role::ALL.into_iter().zip(overhead) {
                store.overhead_mut(month, role).base_salary = salary;
            }
            store
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// All headcounts at 0 yield revenue, cost, margin and GM of 0.
    #[test]
    fn prop_zero_headcount_is_all_zero(store in zero_headcount_store()) {
        let drivers = GlobalDrivers::default();
        for month in Month::ALL {
            let summary = ComputeEngine::compute_month(&store, &drivers, month);
            prop_assert_eq!(summary.revenue, Decimal::ZERO);
            prop_assert_eq!(summary.cost, Decimal::ZERO);
            prop_assert_eq!(summary.margin, Decimal::ZERO);
            prop_assert_eq!(summary.gm_pct, Decimal::ZERO);
        }
    }

    /// Margin is always revenue minus cost, and cost splits into its parts.
    #[test]
    fn prop_totals_are_consistent(
        headcount in (0i64..500i64).prop_map(Decimal::from),
        salary in amount(),
        price in amount(),
        overhead_hc in (0i64..50i64).prop_map(Decimal::from),
    ) {
        let mut store = MonthStore::new();
        let row = store.solution_mut(Month::Jan, Language::En, 0).expect("default solution");
        row.staffing = Staffing::Flat { headcount };
        row.base_salary = salary;
        row.unit_price = price;
        store.overhead_mut(Month::Jan, Role::Ops).headcount = overhead_hc;

        let summary = ComputeEngine::compute_month(&store, &GlobalDrivers::default(), Month::Jan);

        prop_assert_eq!(summary.margin, summary.revenue - summary.cost);
        prop_assert_eq!(summary.cost, summary.production_cost + summary.overhead_cost);
    }
}
