//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::{BillingModel, Currency};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Global cost and revenue drivers.
    #[serde(default)]
    pub drivers: DriverConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Global drivers as read from configuration.
///
/// Every field has a default so a deployment only needs to set what differs.
#[derive(Debug, Clone, Deserialize)]
pub struct DriverConfig {
    /// Statutory/benefit multiplier applied to gross salary.
    #[serde(default = "default_salary_multiplier")]
    pub salary_multiplier: Decimal,
    /// Bonus as a fraction of base salary.
    #[serde(default = "default_bonus_pct")]
    pub bonus_pct: Decimal,
    /// Multiplier applied to the bonus.
    #[serde(default = "default_bonus_multiplier")]
    pub bonus_multiplier: Decimal,
    /// Flat meal allowance per head, in local currency.
    #[serde(default = "default_meal_card")]
    pub meal_card: Decimal,
    /// Currency unit prices are quoted in.
    #[serde(default)]
    pub currency: Currency,
    /// Default FX rate (foreign to local).
    #[serde(default = "default_fx")]
    pub fx: Decimal,
    /// Default worked hours per agent per month.
    #[serde(default = "default_worked_hours")]
    pub worked_hours: Decimal,
    /// Default shrinkage fraction.
    #[serde(default = "default_shrinkage")]
    pub shrinkage: Decimal,
    /// Absenteeism fraction.
    #[serde(default)]
    pub absenteeism: Decimal,
    /// Default monthly attrition fraction for workforce-flow rows.
    #[serde(default)]
    pub attrition_pct: Decimal,
    /// Overtime hours per productive head per month.
    #[serde(default)]
    pub overtime_hours_per_hc: Decimal,
    /// Pay multiplier for overtime hours.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
    /// Billing model.
    #[serde(default)]
    pub billing_model: BillingModel,
    /// Fraction of full productivity earned by heads in training.
    #[serde(default = "default_training_productivity_pct")]
    pub training_productivity_pct: Decimal,
}

fn default_salary_multiplier() -> Decimal {
    Decimal::new(170, 2)
}

fn default_bonus_pct() -> Decimal {
    Decimal::new(10, 2)
}

fn default_bonus_multiplier() -> Decimal {
    Decimal::ONE
}

fn default_meal_card() -> Decimal {
    Decimal::from(5850)
}

fn default_fx() -> Decimal {
    Decimal::from(38)
}

fn default_worked_hours() -> Decimal {
    Decimal::from(180)
}

fn default_shrinkage() -> Decimal {
    Decimal::new(15, 2)
}

fn default_overtime_multiplier() -> Decimal {
    Decimal::new(15, 1)
}

fn default_training_productivity_pct() -> Decimal {
    Decimal::new(5, 1)
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            salary_multiplier: default_salary_multiplier(),
            bonus_pct: default_bonus_pct(),
            bonus_multiplier: default_bonus_multiplier(),
            meal_card: default_meal_card(),
            currency: Currency::default(),
            fx: default_fx(),
            worked_hours: default_worked_hours(),
            shrinkage: default_shrinkage(),
            absenteeism: Decimal::ZERO,
            attrition_pct: Decimal::ZERO,
            overtime_hours_per_hc: Decimal::ZERO,
            overtime_multiplier: default_overtime_multiplier(),
            billing_model: BillingModel::default(),
            training_productivity_pct: default_training_productivity_pct(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "staffplan=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones winning: `config/default.toml`,
    /// `config/{RUN_MODE}.toml`, then `STAFFPLAN__SECTION__KEY` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("STAFFPLAN").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
