//! Compute engine tests.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use staffplan_shared::types::{BillingModel, Month};

use super::service::ComputeEngine;
use crate::drivers::GlobalDrivers;
use crate::store::{Language, MonthStore, Role, SolutionRow, Staffing};

fn drivers() -> GlobalDrivers {
    GlobalDrivers {
        salary_multiplier: dec!(1.7),
        bonus_pct: dec!(0.10),
        bonus_multiplier: dec!(1.0),
        meal_card: dec!(5850),
        fx: dec!(38.0),
        worked_hours: dec!(180),
        shrinkage: dec!(0.15),
        ..GlobalDrivers::default()
    }
}

fn flat(headcount: Decimal, base_salary: Decimal, unit_price: Decimal) -> SolutionRow {
    SolutionRow {
        staffing: Staffing::Flat { headcount },
        base_salary,
        unit_price,
        ..SolutionRow::default()
    }
}

fn store_with(month: Month, language: Language, row: SolutionRow) -> MonthStore {
    let mut store = MonthStore::new();
    *store.solution_mut(month, language, 0).unwrap() = row;
    store
}

#[test]
fn test_worked_example() {
    let store = store_with(Month::Jan, Language::De, flat(dec!(10), dec!(30000), dec!(5)));

    let summary = ComputeEngine::compute_month(&store, &drivers(), Month::Jan);

    assert_eq!(summary.month, Month::Jan);
    assert_eq!(summary.cost, dec!(619500));
    assert_eq!(summary.production_cost, dec!(619500));
    assert_eq!(summary.overhead_cost, dec!(0));
    assert_eq!(summary.revenue, dec!(290700));
    assert_eq!(summary.margin, dec!(-328800));
    assert_eq!(summary.gm_pct.round_dp(3), dec!(-1.131));
}

#[test]
fn test_huge_amounts_saturate() {
    let huge = Decimal::from(10i64.pow(15));
    let mut store = MonthStore::new();
    for month in Month::ALL {
        *store.solution_mut(month, Language::De, 0).unwrap() = flat(huge, huge, dec!(5));
    }

    let summary = ComputeEngine::compute_month(&store, &drivers(), Month::Jan);

    assert_eq!(summary.cost, Decimal::MAX);
    assert_eq!(summary.production_cost, Decimal::MAX);
    assert_eq!(summary.revenue, dec!(29070) * huge);
    assert_eq!(summary.margin, summary.revenue - Decimal::MAX);
    assert!(summary.gm_pct < Decimal::ZERO);

    let year = ComputeEngine::compute_year(&store, &drivers());
    assert_eq!(year.len(), 12);
    assert!(year.iter().all(|m| m.cost == Decimal::MAX));
}

#[test]
fn test_empty_store_is_all_zero() {
    let store = MonthStore::new();
    let summary = ComputeEngine::compute_month(&store, &drivers(), Month::Jun);
    assert_eq!(summary.revenue, Decimal::ZERO);
    assert_eq!(summary.cost, Decimal::ZERO);
    assert_eq!(summary.margin, Decimal::ZERO);
    assert_eq!(summary.gm_pct, Decimal::ZERO);
}

#[test]
fn test_cost_without_revenue_has_zero_gm() {
    let mut store = MonthStore::new();
    let row = store.overhead_mut(Month::Feb, Role::TeamManager);
    row.headcount = dec!(1);
    row.base_salary = dec!(50000);

    let summary = ComputeEngine::compute_month(&store, &drivers(), Month::Feb);

    // (50000 + 5000) * 1.7 + 5850
    assert_eq!(summary.overhead_cost, dec!(99350));
    assert_eq!(summary.revenue, Decimal::ZERO);
    assert_eq!(summary.margin, dec!(-99350));
    assert_eq!(summary.gm_pct, Decimal::ZERO);
}

#[test]
fn test_overhead_adds_cost_only() {
    let mut store = store_with(Month::Jan, Language::De, flat(dec!(10), dec!(30000), dec!(5)));
    let qa = store.overhead_mut(Month::Jan, Role::Qa);
    qa.headcount = dec!(2);
    qa.base_salary = dec!(30000);

    let summary = ComputeEngine::compute_month(&store, &drivers(), Month::Jan);

    assert_eq!(summary.overhead_cost, dec!(123900));
    assert_eq!(summary.cost, dec!(743400));
    assert_eq!(summary.revenue, dec!(290700));
}

#[test]
fn test_month_overrides_apply_to_their_month_only() {
    let row = flat(dec!(10), dec!(30000), dec!(5));
    let mut store = store_with(Month::Jan, Language::De, row);
    *store.solution_mut(Month::Feb, Language::De, 0).unwrap() = row;
    store.set_fx(Month::Feb, Some(dec!(40)));
    store.set_shrinkage(Month::Feb, Some(dec!(0.10)));

    let jan = ComputeEngine::compute_month(&store, &drivers(), Month::Jan);
    let feb = ComputeEngine::compute_month(&store, &drivers(), Month::Feb);

    assert_eq!(jan.revenue, dec!(290700));
    // 10 * 162 * 5 * 40
    assert_eq!(feb.revenue, dec!(324000));
}

#[test]
fn test_zero_worked_hours_override_is_honored() {
    let mut store = store_with(Month::Mar, Language::En, flat(dec!(10), dec!(30000), dec!(5)));
    store.set_worked_hours(Month::Mar, Some(Decimal::ZERO));

    let summary = ComputeEngine::compute_month(&store, &drivers(), Month::Mar);

    assert_eq!(summary.revenue, Decimal::ZERO);
    assert_eq!(summary.cost, dec!(619500));
}

#[test]
fn test_absenteeism_compounds_with_shrinkage() {
    let store = store_with(Month::Jan, Language::De, flat(dec!(10), dec!(30000), dec!(5)));
    let drivers = GlobalDrivers {
        absenteeism: dec!(0.10),
        ..drivers()
    };

    let breakdown = ComputeEngine::compute_month_detailed(&store, &drivers, Month::Jan);

    assert_eq!(breakdown.effective_hours, dec!(137.7));
    assert_eq!(breakdown.summary.revenue, dec!(261630));
}

#[test]
fn test_half_billing() {
    let store = store_with(Month::Jan, Language::De, flat(dec!(10), dec!(30000), dec!(5)));
    let drivers = GlobalDrivers {
        billing_model: BillingModel::HalfBilling,
        ..drivers()
    };

    let summary = ComputeEngine::compute_month(&store, &drivers, Month::Jan);

    assert_eq!(summary.revenue, dec!(145350));
    assert_eq!(summary.cost, dec!(619500));
}

#[test]
fn test_fixed_hc_drops_hours_term() {
    let store = store_with(Month::Jan, Language::De, flat(dec!(10), dec!(30000), dec!(2000)));
    let drivers = GlobalDrivers {
        billing_model: BillingModel::FixedHc,
        worked_hours: Decimal::ZERO,
        ..drivers()
    };

    let summary = ComputeEngine::compute_month(&store, &drivers, Month::Jan);

    // 10 * 2000 * 38, independent of hours
    assert_eq!(summary.revenue, dec!(760000));
}

#[test]
fn test_solutions_contribute_independently() {
    let mut store = MonthStore::new();
    store.set_solution_count(Month::Apr, Language::Fr, 2).unwrap();
    *store.solution_mut(Month::Apr, Language::Fr, 0).unwrap() = flat(dec!(10), dec!(30000), dec!(5));
    *store.solution_mut(Month::Apr, Language::Fr, 1).unwrap() = flat(dec!(5), dec!(30000), dec!(10));

    let breakdown = ComputeEngine::compute_month_detailed(&store, &drivers(), Month::Apr);

    let french: Vec<_> = breakdown
        .production
        .iter()
        .filter(|p| p.language == Language::Fr)
        .collect();
    assert_eq!(french.len(), 2);
    assert_eq!(french[0].revenue, dec!(290700));
    assert_eq!(french[1].revenue, dec!(290700));
    assert_eq!(breakdown.summary.revenue, dec!(581400));
    assert_eq!(breakdown.summary.cost, dec!(929250));
}

#[test]
fn test_detail_rows_cover_every_slot() {
    let store = MonthStore::new();
    let breakdown = ComputeEngine::compute_month_detailed(&store, &drivers(), Month::Jan);
    assert_eq!(breakdown.production.len(), Language::ALL.len());
    assert_eq!(breakdown.overhead.len(), Role::ALL.len());
    assert_eq!(breakdown.resolved.fx, dec!(38.0));
}

#[test]
fn test_workforce_flow_charges_closing_bills_productive() {
    let row = SolutionRow {
        staffing: Staffing::Flow {
            opening_hc: dec!(20),
            hires: dec!(5),
            attrition_pct: Some(dec!(0.10)),
            training_hc: dec!(5),
        },
        base_salary: dec!(30000),
        unit_price: dec!(5),
        unit_price_training: dec!(4),
        ..SolutionRow::default()
    };
    let store = store_with(Month::May, Language::It, row);

    let breakdown = ComputeEngine::compute_month_detailed(&store, &drivers(), Month::May);
    let detail = breakdown.production[Language::It.index()];

    assert_eq!(detail.paid_hc, dec!(23));
    assert_eq!(detail.productive_hc, dec!(18));
    assert_eq!(detail.training_hc, dec!(5));
    // 23 * 61950
    assert_eq!(detail.cost, dec!(1424850));
    // 18 * 153 * 5 * 38 + 5 * 153 * (4 * 0.5) * 38
    assert_eq!(detail.revenue, dec!(581400));
}

#[test]
fn test_workforce_flow_uses_default_attrition() {
    let row = SolutionRow {
        staffing: Staffing::Flow {
            opening_hc: dec!(10),
            hires: dec!(0),
            attrition_pct: None,
            training_hc: dec!(0),
        },
        ..SolutionRow::default()
    };
    let store = store_with(Month::Jan, Language::Nl, row);
    let drivers = GlobalDrivers {
        attrition_pct: dec!(0.20),
        ..drivers()
    };

    let breakdown = ComputeEngine::compute_month_detailed(&store, &drivers, Month::Jan);

    assert_eq!(breakdown.production[Language::Nl.index()].paid_hc, dec!(8));
}

#[test]
fn test_secondary_product_split() {
    let row = SolutionRow {
        secondary_unit_price: dec!(15),
        secondary_share: dec!(0.5),
        ..flat(dec!(10), dec!(30000), dec!(5))
    };
    let store = store_with(Month::Jan, Language::De, row);

    let summary = ComputeEngine::compute_month(&store, &drivers(), Month::Jan);

    // 10 * 153 * 10 * 38
    assert_eq!(summary.revenue, dec!(581400));
}

#[test]
fn test_overtime_adds_revenue_and_cost() {
    let store = store_with(Month::Jan, Language::De, flat(dec!(10), dec!(30000), dec!(5)));
    let drivers = GlobalDrivers {
        overtime_hours_per_hc: dec!(18),
        overtime_multiplier: dec!(1.5),
        ..drivers()
    };

    let breakdown = ComputeEngine::compute_month_detailed(&store, &drivers, Month::Jan);
    let detail = breakdown.production[Language::De.index()];

    // 10 * 18 * 5 * 38
    assert_eq!(detail.overtime_revenue, dec!(34200));
    // 10 * 61950 * 1.5 * 18 / 180
    assert_eq!(detail.overtime_cost, dec!(92925));
    assert_eq!(breakdown.summary.revenue, dec!(324900));
    assert_eq!(breakdown.summary.cost, dec!(712425));
}

#[test]
fn test_fixed_hc_does_not_bill_overtime() {
    let store = store_with(Month::Jan, Language::De, flat(dec!(10), dec!(30000), dec!(2000)));
    let drivers = GlobalDrivers {
        billing_model: BillingModel::FixedHc,
        overtime_hours_per_hc: dec!(10),
        ..drivers()
    };

    let breakdown = ComputeEngine::compute_month_detailed(&store, &drivers, Month::Jan);

    assert_eq!(breakdown.production[0].overtime_revenue, Decimal::ZERO);
    assert!(breakdown.production[0].overtime_cost > Decimal::ZERO);
}

#[test]
fn test_negative_inputs_propagate() {
    let store = store_with(Month::Jan, Language::De, flat(dec!(-1), dec!(30000), dec!(5)));

    let summary = ComputeEngine::compute_month(&store, &drivers(), Month::Jan);

    assert_eq!(summary.revenue, dec!(-29070));
    assert_eq!(summary.cost, dec!(-61950));
    assert_eq!(summary.gm_pct, Decimal::ZERO);
}

#[test]
fn test_compute_year_covers_every_month() {
    let store = store_with(Month::Dec, Language::De, flat(dec!(10), dec!(30000), dec!(5)));
    let year = ComputeEngine::compute_year(&store, &drivers());
    assert_eq!(year.len(), 12);
    assert_eq!(year[11].month, Month::Dec);
    assert_eq!(year[11].revenue, dec!(290700));
    assert_eq!(year[0].revenue, Decimal::ZERO);
}
