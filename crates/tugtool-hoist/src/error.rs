//! Error types for the import hoisting rule.
//!
//! The rule itself never surfaces these to callers of
//! [`crate::Hoister::transform`]: an internal error means "leave the file
//! alone". They are visible through [`crate::Hoister::hoist`] and when loading
//! configuration.

use thiserror::Error;

use tugtool_hoist_cst::CstError;

/// Errors from hoisting or configuration.
#[derive(Debug, Error)]
pub enum HoistError {
    /// Structural replacement on the working tree failed.
    #[error("tree error: {0}")]
    Tree(#[from] CstError),

    /// The fixpoint loop exceeded its bound (one iteration per top-level member).
    #[error("no fixpoint reached after {iterations} iterations")]
    NoFixpoint { iterations: usize },

    /// Configuration JSON could not be parsed.
    #[error("invalid hoist configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for hoisting operations.
pub type HoistResult<T> = Result<T, HoistError>;
