//! Global drivers shared by the cost and revenue models.

pub mod error;
pub mod types;

pub use error::{DriverError, RangeViolation};
pub use types::{GlobalDrivers, normalize_fraction};
