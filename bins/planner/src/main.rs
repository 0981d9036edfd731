//! Staffplan planner
//!
//! Imports a planning workbook, logs each month's totals and its change from
//! the previous month, and optionally writes the recomputed workbook.
//!
//! Usage: planner <workbook.xlsx> [output.xlsx]

use std::path::PathBuf;

use anyhow::{Context, bail};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use staffplan_core::comparison::ComparisonEngine;
use staffplan_core::drivers::GlobalDrivers;
use staffplan_core::engine::ComputeEngine;
use staffplan_core::store::MonthStore;
use staffplan_core::workbook::{export_workbook, import_workbook};
use staffplan_shared::AppConfig;
use staffplan_shared::types::Month;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let Some(input) = args.next() else {
        bail!("usage: planner <workbook.xlsx> [output.xlsx]");
    };
    let output = args.next();

    let drivers = GlobalDrivers::from(&config.drivers);
    drivers.validate()?;
    info!(
        fx = %drivers.fx,
        worked_hours = %drivers.worked_hours,
        billing_model = %drivers.billing_model,
        "Drivers loaded"
    );

    let bytes = std::fs::read(&input).with_context(|| format!("Cannot read {}", input.display()))?;
    let mut store = MonthStore::new();
    import_workbook(&bytes, &mut store)?;

    for month in Month::ALL {
        let summary = ComputeEngine::compute_month(&store, &drivers, month);
        info!(summary = %serde_json::to_string(&summary)?, "Month totals");
        if month != Month::Jan {
            let cmp = ComparisonEngine::compare_with_previous(&store, &drivers, month);
            info!(
                %month,
                revenue_delta = %cmp.revenue_delta,
                cost_delta = %cmp.cost_delta,
                margin_delta = %cmp.margin_delta,
                gm_delta_points = %cmp.gm_delta_points,
                "Change from previous month"
            );
        }
    }

    if let Some(output) = output {
        let bytes = export_workbook(&store, &drivers)?;
        std::fs::write(&output, bytes)
            .with_context(|| format!("Cannot write {}", output.display()))?;
        info!(path = %output.display(), "Workbook written");
    }

    Ok(())
}
