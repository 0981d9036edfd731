//! Billable revenue and workforce-flow arithmetic.

use rust_decimal::Decimal;
use staffplan_shared::types::BillingModel;

/// Revenue model for production units.
pub struct RevenueModel;

impl RevenueModel {
    /// Hours billed per productive head.
    ///
    /// `worked_hours × (1 − shrinkage) × (1 − absenteeism)`, halved under
    /// [`BillingModel::HalfBilling`]. [`BillingModel::FixedHc`] does not bill
    /// hours at all; callers use [`Self::fixed_hc_revenue`] instead.
    #[must_use]
    pub fn effective_hours(
        worked_hours: Decimal,
        shrinkage: Decimal,
        absenteeism: Decimal,
        billing_model: BillingModel,
    ) -> Decimal {
        let productive = worked_hours
            .saturating_mul(Decimal::ONE.saturating_sub(shrinkage))
            .saturating_mul(Decimal::ONE.saturating_sub(absenteeism));
        match billing_model {
            BillingModel::HalfBilling => productive.saturating_mul(Self::half()),
            BillingModel::FullProductiveHours | BillingModel::FixedHc => productive,
        }
    }

    /// Share of overtime hours that is billed under a billing model.
    #[must_use]
    pub fn overtime_billing_factor(billing_model: BillingModel) -> Decimal {
        match billing_model {
            BillingModel::FullProductiveHours => Decimal::ONE,
            BillingModel::HalfBilling => Self::half(),
            BillingModel::FixedHc => Decimal::ZERO,
        }
    }

    /// `headcount × effective_hours × unit_price_foreign × fx`.
    #[must_use]
    pub fn revenue_for_row(
        headcount: Decimal,
        effective_hours: Decimal,
        unit_price_foreign: Decimal,
        fx: Decimal,
    ) -> Decimal {
        headcount
            .saturating_mul(effective_hours)
            .saturating_mul(unit_price_foreign)
            .saturating_mul(fx)
    }

    /// Per-head revenue with no hours term: `headcount × unit_price × fx`.
    #[must_use]
    pub fn fixed_hc_revenue(headcount: Decimal, unit_price_foreign: Decimal, fx: Decimal) -> Decimal {
        headcount.saturating_mul(unit_price_foreign).saturating_mul(fx)
    }

    /// Unit price when a `share` of billable hours is sold at a secondary price.
    #[must_use]
    pub fn blended_unit_price(primary: Decimal, secondary: Decimal, share: Decimal) -> Decimal {
        primary
            .saturating_mul(Decimal::ONE.saturating_sub(share))
            .saturating_add(secondary.saturating_mul(share))
    }

    /// Heads present at month end: `opening + hires − opening × attrition`.
    #[must_use]
    pub fn closing_hc(opening_hc: Decimal, hires: Decimal, attrition_pct: Decimal) -> Decimal {
        opening_hc
            .saturating_add(hires)
            .saturating_sub(opening_hc.saturating_mul(attrition_pct))
    }

    /// Heads on full productivity: `max(closing − training, 0)`.
    #[must_use]
    pub fn productive_hc(closing_hc: Decimal, training_hc: Decimal) -> Decimal {
        closing_hc.saturating_sub(training_hc).max(Decimal::ZERO)
    }

    fn half() -> Decimal {
        Decimal::new(5, 1)
    }
}
