//! Sample workbook seeder for Staffplan development and testing.
//!
//! Writes a full year of demo data: production for every language, a few
//! overhead roles, and some month-level overrides.
//!
//! Usage: cargo run --bin seeder [output.xlsx]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use staffplan_core::drivers::GlobalDrivers;
use staffplan_core::store::{Language, MonthStore, Role, SolutionRow, Staffing};
use staffplan_core::workbook::export_workbook;
use staffplan_shared::AppConfig;
use staffplan_shared::types::Month;

/// Default output path when none is given.
const DEFAULT_OUTPUT: &str = "sample_plan.xlsx";

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let config = AppConfig::load()?;
    let drivers = GlobalDrivers::from(&config.drivers);

    println!("Seeding production rows...");
    let mut store = MonthStore::new();
    seed_production(&mut store)?;

    println!("Seeding overhead roles...");
    seed_overhead(&mut store);

    println!("Seeding month overrides...");
    seed_overrides(&mut store);

    let bytes = export_workbook(&store, &drivers)?;
    std::fs::write(&output, bytes)?;
    println!("Seeding complete! Wrote {output}");
    Ok(())
}

/// Per-language headcount, salary and hourly price.
fn language_profile(language: Language) -> (Decimal, Decimal, Decimal) {
    match language {
        Language::De => (dec!(24), dec!(32000), dec!(5.2)),
        Language::En => (dec!(30), dec!(27000), dec!(4.6)),
        Language::Tr => (dec!(40), dec!(24000), dec!(3.9)),
        Language::Fr => (dec!(12), dec!(31000), dec!(5.0)),
        Language::It => (dec!(8), dec!(30500), dec!(4.9)),
        Language::Nl => (dec!(6), dec!(33000), dec!(5.4)),
    }
}

fn seed_production(store: &mut MonthStore) -> anyhow::Result<()> {
    for (step, month) in (0u32..).zip(Month::ALL) {
        let growth = Decimal::from(step);
        for language in Language::ALL {
            let (headcount, base_salary, unit_price) = language_profile(language);
            let row = store.record_mut(month).language_mut(language);
            row.solutions[0] = SolutionRow {
                staffing: Staffing::Flat {
                    headcount: headcount + growth,
                },
                base_salary,
                unit_price,
                unit_price_training: unit_price / dec!(2),
                ..SolutionRow::default()
            };
        }

        // English runs a second solution staffed through hiring and training.
        store.set_solution_count(month, Language::En, 2)?;
        if let Some(row) = store.solution_mut(month, Language::En, 1) {
            *row = SolutionRow {
                staffing: Staffing::Flow {
                    opening_hc: dec!(15) + growth,
                    hires: dec!(3),
                    attrition_pct: None,
                    training_hc: dec!(3),
                },
                base_salary: dec!(28000),
                unit_price: dec!(4.8),
                unit_price_training: dec!(2.4),
                secondary_unit_price: dec!(6.5),
                secondary_share: dec!(0.2),
            };
        }
    }
    Ok(())
}

fn seed_overhead(store: &mut MonthStore) {
    let roles = [
        (Role::TeamManager, dec!(6), dec!(45000)),
        (Role::Qa, dec!(4), dec!(34000)),
        (Role::Ops, dec!(2), dec!(38000)),
        (Role::Trainer, dec!(2), dec!(36000)),
        (Role::RtaWfm, dec!(3), dec!(35000)),
    ];
    for month in Month::ALL {
        for (role, headcount, base_salary) in roles {
            let row = store.overhead_mut(month, role);
            row.headcount = headcount;
            row.base_salary = base_salary;
        }
    }
}

fn seed_overrides(store: &mut MonthStore) {
    store.set_fx(Month::Jul, Some(dec!(39.5)));
    store.set_fx(Month::Dec, Some(dec!(41)));
    store.set_worked_hours(Month::Aug, Some(dec!(150)));
    store.set_shrinkage(Month::Dec, Some(dec!(22)));
}
