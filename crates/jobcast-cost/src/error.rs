// Error types for the cost model

use thiserror::Error;

/// Result type for cost model operations
pub type Result<T> = std::result::Result<T, CostError>;

/// Cost model errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CostError {
    /// Malformed or out-of-domain input. Recoverable: reject the single
    /// request or sample without affecting others.
    #[error("Invalid value for '{field}': {reason}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Reason the value is invalid
        reason: String,
    },

    /// A resource value outside the discrete multiplier tables. The model
    /// only defines multipliers for listed tiers; anything else is
    /// rejected rather than clamped or interpolated.
    #[error("Unsupported {resource} tier: {value} has no multiplier entry")]
    UnsupportedResourceTier {
        /// Resource dimension (worker_cpu, worker_gpu, worker_mem)
        resource: &'static str,
        /// The unlisted value
        value: u64,
    },
}

impl CostError {
    /// Name of the field or resource dimension that caused the error.
    pub fn field(&self) -> &'static str {
        match self {
            CostError::Validation { field, .. } => field,
            CostError::UnsupportedResourceTier { resource, .. } => resource,
        }
    }
}
