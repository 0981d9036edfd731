//! Sheet and column names of the planning workbook.
//!
//! Names are matched case-sensitively.

/// Per-month overrides.
pub const INPUTS: &str = "Inputs";
/// Production rows.
pub const PRODUCTION: &str = "Production";
/// Overhead rows.
pub const OVERHEAD: &str = "Overhead";
/// Computed aggregates (export only).
pub const SUMMARY: &str = "Summary";

/// Sheets an import requires.
pub const REQUIRED_SHEETS: [&str; 3] = [INPUTS, PRODUCTION, OVERHEAD];

/// Month key column, present on every sheet.
pub const MONTH: &str = "Month";

/// `Inputs` columns.
pub mod inputs {
    /// FX override.
    pub const FX: &str = "FX";
    /// Worked hours override.
    pub const WORKED_HOURS: &str = "WorkedHours";
    /// Shrinkage override.
    pub const SHRINKAGE: &str = "Shrinkage";
    /// Resolved FX (export only, ignored on import).
    pub const RESOLVED_FX: &str = "ResolvedFX";
    /// Resolved worked hours (export only).
    pub const RESOLVED_WORKED_HOURS: &str = "ResolvedWorkedHours";
    /// Resolved shrinkage (export only).
    pub const RESOLVED_SHRINKAGE: &str = "ResolvedShrinkage";

    /// Export column order.
    pub const HEADERS: [&str; 7] = [
        super::MONTH,
        FX,
        WORKED_HOURS,
        SHRINKAGE,
        RESOLVED_FX,
        RESOLVED_WORKED_HOURS,
        RESOLVED_SHRINKAGE,
    ];
}

/// `Production` columns.
pub mod production {
    /// Language code.
    pub const LANGUAGE: &str = "Language";
    /// One-based solution index; blank means 1.
    pub const SOLUTION: &str = "Solution";
    /// Flat headcount.
    pub const HC: &str = "HC";
    /// Base salary.
    pub const SALARY: &str = "Salary";
    /// Unit price.
    pub const UNIT_PRICE: &str = "UnitPrice";
    /// Unit price for training heads.
    pub const UNIT_PRICE_TRAINING: &str = "UnitPriceTraining";
    /// Secondary product unit price.
    pub const SECONDARY_UNIT_PRICE: &str = "SecondaryUnitPrice";
    /// Share of hours billed at the secondary price.
    pub const SECONDARY_SHARE: &str = "SecondaryShare";
    /// Workforce flow: opening headcount.
    pub const OPENING_HC: &str = "OpeningHC";
    /// Workforce flow: hires.
    pub const HIRES: &str = "Hires";
    /// Workforce flow: attrition.
    pub const ATTRITION_PCT: &str = "AttritionPct";
    /// Workforce flow: heads in training.
    pub const TRAINING_HC: &str = "TrainingHC";

    /// Export column order.
    pub const HEADERS: [&str; 13] = [
        super::MONTH,
        LANGUAGE,
        SOLUTION,
        HC,
        SALARY,
        UNIT_PRICE,
        UNIT_PRICE_TRAINING,
        SECONDARY_UNIT_PRICE,
        SECONDARY_SHARE,
        OPENING_HC,
        HIRES,
        ATTRITION_PCT,
        TRAINING_HC,
    ];
}

/// `Overhead` columns.
pub mod overhead {
    /// Role label.
    pub const ROLE: &str = "Role";
    /// Headcount.
    pub const HC: &str = "HC";
    /// Base salary.
    pub const SALARY: &str = "Salary";

    /// Export column order.
    pub const HEADERS: [&str; 4] = [super::MONTH, ROLE, HC, SALARY];
}

/// `Summary` columns.
pub mod summary {
    /// Export column order.
    pub const HEADERS: [&str; 7] = [
        super::MONTH,
        "Revenue",
        "Cost",
        "ProductionCost",
        "OverheadCost",
        "Margin",
        "GMPct",
    ];
}
