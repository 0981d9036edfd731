//! Month store error types.

use thiserror::Error;

use super::types::Language;

/// Month store errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Requested more solutions than a language can hold.
    #[error("{language} cannot hold {requested} solutions (maximum {max})")]
    SolutionLimit {
        /// Language.
        language: Language,
        /// Requested solution count.
        requested: usize,
        /// Maximum allowed.
        max: usize,
    },
}
