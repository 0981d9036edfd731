//! Month record data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use staffplan_shared::types::Month;

use crate::drivers::GlobalDrivers;

/// Maximum number of solutions per language in one month.
pub const MAX_SOLUTIONS: usize = 5;

/// Production language. The set is fixed; every month has one slot per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    /// German
    De,
    /// English
    En,
    /// Turkish
    Tr,
    /// French
    Fr,
    /// Italian
    It,
    /// Dutch
    Nl,
}

impl Language {
    /// All languages in slot order.
    pub const ALL: [Self; 6] = [Self::De, Self::En, Self::Tr, Self::Fr, Self::It, Self::Nl];

    /// Slot position within a month record.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Language code as shown in the workbook.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::De => "DE",
            Self::En => "EN",
            Self::Tr => "TR",
            Self::Fr => "FR",
            Self::It => "IT",
            Self::Nl => "NL",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown language: {s}"))
    }
}

/// Overhead role. The set is fixed; every month has one slot per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Team Manager
    TeamManager,
    /// Quality assurance
    Qa,
    /// Operations
    Ops,
    /// Trainer
    Trainer,
    /// Real-time analyst / workforce management
    RtaWfm,
}

impl Role {
    /// All roles in slot order.
    pub const ALL: [Self; 5] = [
        Self::TeamManager,
        Self::Qa,
        Self::Ops,
        Self::Trainer,
        Self::RtaWfm,
    ];

    /// Slot position within a month record.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Role label as shown in the workbook.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TeamManager => "Team Manager",
            Self::Qa => "QA",
            Self::Ops => "Ops",
            Self::Trainer => "Trainer",
            Self::RtaWfm => "RTA/WFM",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown role: {s}"))
    }
}

/// How a production row's headcount is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Staffing {
    /// A flat headcount; every head is productive.
    Flat {
        /// Headcount.
        headcount: Decimal,
    },
    /// Opening headcount moved through hires, attrition and training.
    Flow {
        /// Heads at month start.
        opening_hc: Decimal,
        /// Heads hired during the month.
        hires: Decimal,
        /// Attrition fraction; `None` uses the global default.
        attrition_pct: Option<Decimal>,
        /// Heads in training (paid in full, billed at reduced productivity).
        training_hc: Decimal,
    },
}

impl Default for Staffing {
    fn default() -> Self {
        Self::Flat {
            headcount: Decimal::ZERO,
        }
    }
}

/// One independently priced solution within a language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionRow {
    /// Headcount.
    pub staffing: Staffing,
    /// Monthly base salary, local currency.
    pub base_salary: Decimal,
    /// Hourly (or per-head under fixed billing) price, foreign currency.
    pub unit_price: Decimal,
    /// Price billed for heads in training, foreign currency.
    pub unit_price_training: Decimal,
    /// Price for the secondary product, foreign currency.
    pub secondary_unit_price: Decimal,
    /// Fraction of billable hours sold at `secondary_unit_price`.
    pub secondary_share: Decimal,
}

/// Production rows of one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageProduction {
    /// Language.
    pub language: Language,
    /// Solutions, 0 to [`MAX_SOLUTIONS`].
    pub solutions: Vec<SolutionRow>,
}

/// A non-production role. Overhead is cost only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverheadRow {
    /// Role.
    pub role: Role,
    /// Headcount.
    pub headcount: Decimal,
    /// Monthly base salary, local currency.
    pub base_salary: Decimal,
}

/// Per-month overrides of the global defaults.
///
/// `None` means "use the default"; `Some(0)` is a real override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthInputs {
    /// FX override.
    pub fx: Option<Decimal>,
    /// Worked hours override.
    pub worked_hours: Option<Decimal>,
    /// Shrinkage override.
    pub shrinkage: Option<Decimal>,
}

/// Month inputs after applying defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedInputs {
    /// FX rate.
    pub fx: Decimal,
    /// Worked hours per agent.
    pub worked_hours: Decimal,
    /// Shrinkage fraction.
    pub shrinkage: Decimal,
}

/// Everything entered for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRecord {
    /// Month key.
    pub month: Month,
    /// Overrides.
    pub inputs: MonthInputs,
    /// One entry per language, in [`Language::ALL`] order.
    pub production: Vec<LanguageProduction>,
    /// One entry per role, in [`Role::ALL`] order.
    pub overhead: Vec<OverheadRow>,
}

impl MonthRecord {
    /// Creates a zeroed record with one solution per language.
    #[must_use]
    pub fn new(month: Month) -> Self {
        Self {
            month,
            inputs: MonthInputs::default(),
            production: Language::ALL
                .into_iter()
                .map(|language| LanguageProduction {
                    language,
                    solutions: vec![SolutionRow::default()],
                })
                .collect(),
            overhead: Role::ALL
                .into_iter()
                .map(|role| OverheadRow {
                    role,
                    headcount: Decimal::ZERO,
                    base_salary: Decimal::ZERO,
                })
                .collect(),
        }
    }

    /// Resolves each override against the global default.
    #[must_use]
    pub fn resolve(&self, drivers: &GlobalDrivers) -> ResolvedInputs {
        ResolvedInputs {
            fx: self.inputs.fx.unwrap_or(drivers.fx),
            worked_hours: self.inputs.worked_hours.unwrap_or(drivers.worked_hours),
            shrinkage: self.inputs.shrinkage.unwrap_or(drivers.shrinkage),
        }
    }

    /// Production rows of a language.
    #[must_use]
    pub fn language(&self, language: Language) -> &LanguageProduction {
        &self.production[language.index()]
    }

    /// Mutable production rows of a language.
    pub fn language_mut(&mut self, language: Language) -> &mut LanguageProduction {
        &mut self.production[language.index()]
    }

    /// Overhead row of a role.
    #[must_use]
    pub fn role(&self, role: Role) -> &OverheadRow {
        &self.overhead[role.index()]
    }

    /// Mutable overhead row of a role.
    pub fn role_mut(&mut self, role: Role) -> &mut OverheadRow {
        &mut self.overhead[role.index()]
    }
}
