//! Month store: the canonical per-month inputs.

pub mod error;
pub mod service;
pub mod types;


pub use error::StoreError;
pub use service::MonthStore;
pub use types::{
    Language, LanguageProduction, MAX_SOLUTIONS, MonthInputs, MonthRecord, OverheadRow,
    ResolvedInputs, Role, SolutionRow, Staffing,
};
