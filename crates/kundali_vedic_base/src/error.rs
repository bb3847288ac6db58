//! Error types for Vedic calculations.

use thiserror::Error;

/// Errors from Vedic base calculations.
///
/// The calculations are total over finite longitudes; only raw-index
/// lookups and non-finite inputs fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// A table index or argument outside its defined range.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
