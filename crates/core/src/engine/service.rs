//! Compute engine: month records to financial aggregates.

use rust_decimal::Decimal;
use staffplan_shared::types::{BillingModel, Month};
use tracing::debug;

use super::types::{MonthBreakdown, MonthSummary, OverheadDetail, ProductionDetail};
use crate::drivers::GlobalDrivers;
use crate::model::{CostModel, RevenueModel, bounded};
use crate::store::{Language, MonthRecord, MonthStore, OverheadRow, ResolvedInputs, SolutionRow, Staffing};

/// Head counts of one solution row.
struct Heads {
    paid: Decimal,
    productive: Decimal,
    training: Decimal,
}

impl Heads {
    /// Cost is charged on every head present; revenue only on productive
    /// heads plus training heads at reduced productivity.
    fn of(staffing: &Staffing, drivers: &GlobalDrivers) -> Self {
        match *staffing {
            Staffing::Flat { headcount } => Self {
                paid: headcount,
                productive: headcount,
                training: Decimal::ZERO,
            },
            Staffing::Flow {
                opening_hc,
                hires,
                attrition_pct,
                training_hc,
            } => {
                let attrition = attrition_pct.unwrap_or(drivers.attrition_pct);
                let closing = RevenueModel::closing_hc(opening_hc, hires, attrition);
                Self {
                    paid: closing,
                    productive: RevenueModel::productive_hc(closing, training_hc),
                    training: training_hc,
                }
            }
        }
    }
}

/// Orchestrates the cost and revenue models over a month's rows.
///
/// Every call recomputes from scratch. Results are deterministic and never
/// fail for finite inputs, negative and zero values included; amounts beyond
/// the `Decimal` range saturate at `Decimal::MIN` or `Decimal::MAX`.
pub struct ComputeEngine;

impl ComputeEngine {
    /// Aggregates of one month.
    #[must_use]
    pub fn compute_month(store: &MonthStore, drivers: &GlobalDrivers, month: Month) -> MonthSummary {
        Self::compute_record(store.record(month), drivers).summary
    }

    /// Aggregates of one month with per-row detail.
    #[must_use]
    pub fn compute_month_detailed(
        store: &MonthStore,
        drivers: &GlobalDrivers,
        month: Month,
    ) -> MonthBreakdown {
        Self::compute_record(store.record(month), drivers)
    }

    /// Aggregates of every month, in calendar order.
    #[must_use]
    pub fn compute_year(store: &MonthStore, drivers: &GlobalDrivers) -> Vec<MonthSummary> {
        store
            .records()
            .map(|record| Self::compute_record(record, drivers).summary)
            .collect()
    }

    /// Computes a single record.
    #[must_use]
    pub fn compute_record(record: &MonthRecord, drivers: &GlobalDrivers) -> MonthBreakdown {
        let resolved = record.resolve(drivers);
        let effective_hours = RevenueModel::effective_hours(
            resolved.worked_hours,
            resolved.shrinkage,
            drivers.absenteeism,
            drivers.billing_model,
        );

        let production: Vec<ProductionDetail> = record
            .production
            .iter()
            .flat_map(|lang| {
                lang.solutions.iter().enumerate().map(move |(index, row)| {
                    Self::production_detail(lang.language, index, row, drivers, &resolved, effective_hours)
                })
            })
            .collect();

        let overhead: Vec<OverheadDetail> = record
            .overhead
            .iter()
            .map(|row| Self::overhead_detail(row, drivers))
            .collect();

        let revenue = bounded::sum(production.iter().map(|p| p.revenue));
        let production_cost = bounded::sum(production.iter().map(|p| p.cost));
        let overhead_cost = bounded::sum(overhead.iter().map(|o| o.cost));
        let cost = production_cost.saturating_add(overhead_cost);
        let margin = revenue.saturating_sub(cost);
        let gm_pct = if revenue > Decimal::ZERO {
            bounded::div(margin, revenue)
        } else {
            Decimal::ZERO
        };

        debug!(
            month = %record.month,
            %revenue,
            %cost,
            %margin,
            "Computed month"
        );

        MonthBreakdown {
            summary: MonthSummary {
                month: record.month,
                revenue,
                cost,
                production_cost,
                overhead_cost,
                margin,
                gm_pct,
            },
            resolved,
            effective_hours,
            production,
            overhead,
        }
    }

    fn production_detail(
        language: Language,
        solution: usize,
        row: &SolutionRow,
        drivers: &GlobalDrivers,
        resolved: &ResolvedInputs,
        effective_hours: Decimal,
    ) -> ProductionDetail {
        let heads = Heads::of(&row.staffing, drivers);
        let fx = resolved.fx;

        let cost_per_head = CostModel::cost_per_head(drivers, row.base_salary);
        let base_cost = heads.paid.saturating_mul(cost_per_head);
        let overtime_cost =
            CostModel::overtime_cost(drivers, heads.productive, cost_per_head, resolved.worked_hours);

        let price = RevenueModel::blended_unit_price(
            row.unit_price,
            row.secondary_unit_price,
            row.secondary_share,
        );
        let training_price = row
            .unit_price_training
            .saturating_mul(drivers.training_productivity_pct);

        let base_revenue = match drivers.billing_model {
            BillingModel::FixedHc => {
                RevenueModel::fixed_hc_revenue(heads.productive, price, fx).saturating_add(
                    RevenueModel::fixed_hc_revenue(heads.training, training_price, fx),
                )
            }
            BillingModel::FullProductiveHours | BillingModel::HalfBilling => {
                RevenueModel::revenue_for_row(heads.productive, effective_hours, price, fx).saturating_add(
                    RevenueModel::revenue_for_row(heads.training, effective_hours, training_price, fx),
                )
            }
        };

        let billed_overtime_hours = drivers
            .overtime_hours_per_hc
            .saturating_mul(RevenueModel::overtime_billing_factor(drivers.billing_model));
        let overtime_revenue =
            RevenueModel::revenue_for_row(heads.productive, billed_overtime_hours, price, fx);

        ProductionDetail {
            language,
            solution,
            paid_hc: heads.paid,
            productive_hc: heads.productive,
            training_hc: heads.training,
            cost_per_head,
            base_cost,
            overtime_cost,
            base_revenue,
            overtime_revenue,
            cost: base_cost.saturating_add(overtime_cost),
            revenue: base_revenue.saturating_add(overtime_revenue),
        }
    }

    fn overhead_detail(row: &OverheadRow, drivers: &GlobalDrivers) -> OverheadDetail {
        let cost_per_head = CostModel::cost_per_head(drivers, row.base_salary);
        OverheadDetail {
            role: row.role,
            headcount: row.headcount,
            cost_per_head,
            cost: row.headcount.saturating_mul(cost_per_head),
        }
    }
}
