//! Error types for chart construction and the analyses built on it.

use kundali_time::TimeError;
use kundali_vedic_base::Graha;
use thiserror::Error;

/// Errors from chart construction, analysis and configuration.
///
/// Polar ascendants and unknown places are not errors: both resolve to a
/// documented default that the result records.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// A caller-supplied value is malformed or out of range.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    /// A chart lacks a body an analysis depends on.
    #[error("chart has no position for {0}")]
    MissingBody(Graha),
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Configuration could not be parsed or failed validation.
    #[error("configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(String),
}

impl ChartError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
