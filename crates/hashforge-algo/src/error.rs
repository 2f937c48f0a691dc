//! Error types for the fallible conversion surface.
//!
//! The core lookups (`parse`, `name`, `Family::of`, the size queries) are
//! total and report "no match" through sentinel values. Only the
//! `FromStr`/`TryFrom<&str>` conversions on [`Algorithm`](crate::Algorithm)
//! return errors.

use thiserror::Error;

/// Failure to convert a string into a valid [`Algorithm`](crate::Algorithm).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAlgorithmError {
    #[error("empty algorithm name")]
    Empty,

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}
