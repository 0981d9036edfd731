//! Billing models.

use serde::{Deserialize, Serialize};

/// How production headcount is billed to the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingModel {
    /// Every productive hour (after shrinkage and absenteeism) is billed.
    #[default]
    FullProductiveHours,
    /// Half of the productive hours are billed.
    HalfBilling,
    /// A flat price per head, independent of hours.
    FixedHc,
}

impl std::fmt::Display for BillingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FullProductiveHours => write!(f, "full_productive_hours"),
            Self::HalfBilling => write!(f, "half_billing"),
            Self::FixedHc => write!(f, "fixed_hc"),
        }
    }
}
