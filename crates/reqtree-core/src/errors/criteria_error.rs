//! Top-level criteria errors.

use super::error_code::{self, ReqtreeErrorCode};
use super::{ConfigError, MalformedCriteriaError};

/// Errors surfaced by a single criteria evaluation.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum CriteriaError {
    #[error("Malformed criteria: {0}")]
    Malformed(#[from] MalformedCriteriaError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Criteria decode failed: {message}")]
    Decode { message: String },
}

impl From<serde_json::Error> for CriteriaError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode {
            message: e.to_string(),
        }
    }
}

impl ReqtreeErrorCode for CriteriaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Decode { .. } => error_code::DECODE_ERROR,
        }
    }
}
