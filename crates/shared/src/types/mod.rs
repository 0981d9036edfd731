//! Common types used across the application.

pub mod billing;
pub mod currency;
pub mod month;

pub use billing::BillingModel;
pub use currency::Currency;
pub use month::Month;
