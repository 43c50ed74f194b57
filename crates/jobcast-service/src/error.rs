// Error types for the prediction service

use crate::predictor::PredictorError;
use thiserror::Error;

/// Result type for prediction service operations
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Prediction service errors
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or out-of-domain request field. Surfaced to the caller as
    /// a client error naming the offending field.
    #[error("Invalid value for '{field}': {reason}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Reason the value is invalid
        reason: String,
    },

    /// The external predictor could not be invoked. Surfaced as a server
    /// error; not retried automatically.
    #[error(transparent)]
    Predictor(#[from] PredictorError),
}

impl ServiceError {
    /// Whether this error is the caller's fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::Validation { .. })
    }
}
