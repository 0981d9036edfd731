//! Month-over-month comparison types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::MonthSummary;

/// Deltas between two months (`current − other`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthComparison {
    /// Aggregates of the month under review.
    pub current: MonthSummary,
    /// Aggregates of the month compared against.
    pub other: MonthSummary,
    /// Revenue change.
    pub revenue_delta: Decimal,
    /// Cost change.
    pub cost_delta: Decimal,
    /// Margin change.
    pub margin_delta: Decimal,
    /// GM change in percentage points.
    pub gm_delta_points: Decimal,
    /// Revenue change relative to the other month, in percent; 0 when the
    /// other month has no revenue.
    pub revenue_delta_pct: Decimal,
}

/// One line of the margin bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeLine {
    /// Driver label.
    pub driver: &'static str,
    /// Impact on margin, local currency.
    pub impact: Decimal,
}

impl MonthComparison {
    /// Explains the margin change: revenue up adds, cost up subtracts.
    #[must_use]
    pub fn margin_bridge(&self) -> Vec<BridgeLine> {
        vec![
            BridgeLine {
                driver: "Revenue change",
                impact: self.revenue_delta,
            },
            BridgeLine {
                driver: "Cost change",
                impact: -self.cost_delta,
            },
            BridgeLine {
                driver: "Net margin impact",
                impact: self.margin_delta,
            },
        ]
    }
}
