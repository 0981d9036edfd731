//! Cost and revenue models.
//!
//! Both models are pure functions of their arguments and the drivers passed
//! in; they hold no state.

pub(crate) mod bounded;
pub mod cost;
pub mod revenue;

#[cfg(test)]
mod props;

pub use cost::CostModel;
pub use revenue::RevenueModel;
