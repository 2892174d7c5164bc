//! Errors reported by the tree and set operations.

use thiserror::Error;

/// Everything that can go wrong when building or mutating a tree. Every check happens before the
/// tree is touched, so a returned error always leaves the tree exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The balance coefficient was outside of `[0.5, 1.0)`.
    #[error("alpha should be in [0.5, 1) range, got {0}")]
    InvalidAlpha(f64),
    /// The value to remove is not stored in the tree.
    #[error("value is not in the tree")]
    NotFound,
    /// A [`ScapegoatTree`][crate::ScapegoatTree] always keeps at least one element.
    #[error("the last element of the tree cannot be removed")]
    LastElement,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
