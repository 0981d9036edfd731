//! Property-based tests for workbook round trips.

use proptest::prelude::*;
use rust_decimal::Decimal;
use staffplan_shared::types::Month;

use super::{export_workbook, import_workbook};
use crate::drivers::GlobalDrivers;
use crate::store::{Language, MonthStore, Role, SolutionRow, Staffing};

/// Amounts with two decimals (0.00 to 100,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Fractions with two decimals (0.00 to 1.00).
fn fraction() -> impl Strategy<Value = Decimal> {
    (0i64..=100i64).prop_map(|v| Decimal::new(v, 2))
}

/// Rates with two decimals (0.00 to 0.99).
fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..100i64).prop_map(|v| Decimal::new(v, 2))
}

fn staffing() -> impl Strategy<Value = Staffing> {
    prop_oneof![
        amount().prop_map(|headcount| Staffing::Flat { headcount }),
        (amount(), amount(), prop::option::of(rate()), amount()).prop_map(
            |(opening_hc, hires, attrition_pct, training_hc)| Staffing::Flow {
                opening_hc,
                hires,
                attrition_pct,
                training_hc,
            }
        ),
    ]
}

fn solution() -> impl Strategy<Value = SolutionRow> {
    (staffing(), amount(), amount(), amount(), amount(), fraction()).prop_map(
        |(staffing, base_salary, unit_price, unit_price_training, secondary_unit_price, secondary_share)| {
            SolutionRow {
                staffing,
                base_salary,
                unit_price,
                unit_price_training,
                secondary_unit_price,
                secondary_share,
            }
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Importing an export into a fresh store reproduces the store.
    #[test]
    fn prop_export_import_round_trip(
        month_index in 0usize..12,
        language_index in 0usize..6,
        role_index in 0usize..5,
        solutions in prop::collection::vec(solution(), 1..=3),
        fx in prop::option::of(amount()),
        worked_hours in prop::option::of(amount()),
        shrinkage in prop::option::of(rate()),
        overhead in (amount(), amount()),
    ) {
        let month = Month::ALL[month_index];
        let language = Language::ALL[language_index];
        let mut store = MonthStore::new();
        store.set_fx(month, fx);
        store.set_worked_hours(month, worked_hours);
        store.set_shrinkage(month, shrinkage);
        store.record_mut(month).language_mut(language).solutions = solutions;
        let row = store.overhead_mut(month, Role::ALL[role_index]);
        row.headcount = overhead.0;
        row.base_salary = overhead.1;

        let bytes = export_workbook(&store, &GlobalDrivers::default()).unwrap();
        let mut restored = MonthStore::new();
        let report = import_workbook(&bytes, &mut restored).unwrap();

        prop_assert!(report.skipped.is_empty());
        prop_assert_eq!(restored, store);
    }
}
