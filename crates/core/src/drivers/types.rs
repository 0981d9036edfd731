//! Global cost and revenue drivers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use staffplan_shared::DriverConfig;
use staffplan_shared::types::{BillingModel, Currency};

use super::error::{DriverError, RangeViolation};

/// Interprets a fraction entered as a whole percentage.
///
/// Values above 1 are treated as percentages (`15` becomes `0.15`); values in
/// `[0, 1]` are returned unchanged, so the rule is idempotent.
#[must_use]
pub fn normalize_fraction(value: Decimal) -> Decimal {
    if value > Decimal::ONE {
        value / Decimal::ONE_HUNDRED
    } else {
        value
    }
}

/// Process-wide drivers for one evaluation pass.
///
/// Passed explicitly into every model and engine call; nothing reads drivers
/// from ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalDrivers {
    /// Statutory/benefit multiplier applied to gross salary.
    pub salary_multiplier: Decimal,
    /// Bonus as a fraction of base salary.
    pub bonus_pct: Decimal,
    /// Multiplier applied to the bonus.
    pub bonus_multiplier: Decimal,
    /// Flat meal allowance per head, in local currency.
    pub meal_card: Decimal,
    /// Currency unit prices are quoted in.
    pub currency: Currency,
    /// Default FX rate, overridable per month.
    pub fx: Decimal,
    /// Default worked hours per agent, overridable per month.
    pub worked_hours: Decimal,
    /// Default shrinkage fraction, overridable per month.
    pub shrinkage: Decimal,
    /// Absenteeism fraction, compounding with shrinkage.
    pub absenteeism: Decimal,
    /// Default monthly attrition for workforce-flow rows.
    pub attrition_pct: Decimal,
    /// Overtime hours per productive head.
    pub overtime_hours_per_hc: Decimal,
    /// Pay multiplier for overtime hours.
    pub overtime_multiplier: Decimal,
    /// Billing model.
    pub billing_model: BillingModel,
    /// Fraction of full productivity earned by heads in training.
    pub training_productivity_pct: Decimal,
}

impl Default for GlobalDrivers {
    fn default() -> Self {
        Self::from(&DriverConfig::default())
    }
}

impl From<&DriverConfig> for GlobalDrivers {
    fn from(config: &DriverConfig) -> Self {
        Self {
            salary_multiplier: config.salary_multiplier,
            bonus_pct: config.bonus_pct,
            bonus_multiplier: config.bonus_multiplier,
            meal_card: config.meal_card,
            currency: config.currency,
            fx: config.fx,
            worked_hours: config.worked_hours,
            shrinkage: normalize_fraction(config.shrinkage),
            absenteeism: normalize_fraction(config.absenteeism),
            attrition_pct: normalize_fraction(config.attrition_pct),
            overtime_hours_per_hc: config.overtime_hours_per_hc,
            overtime_multiplier: config.overtime_multiplier,
            billing_model: config.billing_model,
            training_productivity_pct: normalize_fraction(config.training_productivity_pct),
        }
    }
}

impl GlobalDrivers {
    /// Checks every driver against its allowed range.
    ///
    /// The engine never calls this; it is the boundary check for whoever
    /// collects the drivers.
    ///
    /// # Errors
    ///
    /// Returns `DriverError::Invalid` listing every out-of-range driver.
    pub fn validate(&self) -> Result<(), DriverError> {
        let zero = Decimal::ZERO;
        let one = Decimal::ONE;
        let checks = [
            ("salary_multiplier", self.salary_multiplier, self.salary_multiplier > zero, "> 0"),
            ("bonus_pct", self.bonus_pct, self.bonus_pct >= zero, ">= 0"),
            ("bonus_multiplier", self.bonus_multiplier, self.bonus_multiplier >= zero, ">= 0"),
            ("meal_card", self.meal_card, self.meal_card >= zero, ">= 0"),
            ("fx", self.fx, self.fx > zero, "> 0"),
            ("worked_hours", self.worked_hours, self.worked_hours >= zero, ">= 0"),
            ("shrinkage", self.shrinkage, is_unit_fraction(self.shrinkage), "in [0, 1)"),
            ("absenteeism", self.absenteeism, is_unit_fraction(self.absenteeism), "in [0, 1)"),
            ("attrition_pct", self.attrition_pct, is_unit_fraction(self.attrition_pct), "in [0, 1)"),
            (
                "overtime_hours_per_hc",
                self.overtime_hours_per_hc,
                self.overtime_hours_per_hc >= zero,
                ">= 0",
            ),
            (
                "overtime_multiplier",
                self.overtime_multiplier,
                self.overtime_multiplier >= one,
                ">= 1",
            ),
            (
                "training_productivity_pct",
                self.training_productivity_pct,
                self.training_productivity_pct >= zero && self.training_productivity_pct <= one,
                "in [0, 1]",
            ),
        ];

        let violations: Vec<RangeViolation> = checks
            .into_iter()
            .filter(|(_, _, ok, _)| !ok)
            .map(|(field, value, _, expected)| RangeViolation {
                field,
                value,
                expected,
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(DriverError::Invalid(violations))
        }
    }
}

fn is_unit_fraction(value: Decimal) -> bool {
    value >= Decimal::ZERO && value < Decimal::ONE
}
