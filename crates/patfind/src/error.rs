//! Matcher construction errors.

use thiserror::Error;

/// Errors raised while building a matcher from a pattern.
///
/// Searching never fails; validation happens once, at construction,
/// before any table or hash computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern must contain at least one symbol.
    #[error("pattern cannot be empty")]
    EmptyPattern,
}
