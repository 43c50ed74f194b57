//! The prediction service itself.

use crate::error::{Result, ServiceError};
use crate::predictor::{Predictor, PredictorError};
use crate::request::PredictRequest;
use std::sync::Arc;
use tracing::{debug, warn};

/// Validates requests and delegates to the injected predictor.
///
/// Stateless per request: the predictor is loaded once, shared immutably,
/// and may be invoked from concurrent requests without coordination.
#[derive(Clone)]
pub struct PredictionService {
    predictor: Arc<dyn Predictor>,
}

impl PredictionService {
    /// Creates a service around an already-loaded predictor.
    pub fn new(predictor: Arc<dyn Predictor>) -> Self {
        Self { predictor }
    }

    /// Produces a runtime estimate for one request.
    ///
    /// # Errors
    /// `ServiceError::Validation` for malformed or out-of-domain fields,
    /// `ServiceError::Predictor` if the collaborator fails. A default
    /// runtime is never substituted on error.
    pub fn predict(&self, request: &PredictRequest) -> Result<f64> {
        let row = request.to_feature_row()?;
        let estimates = self
            .predictor
            .predict(std::slice::from_ref(&row))
            .map_err(|e| match e {
                // Out-of-domain input is the caller's fault even when the
                // predictor is the one that notices.
                PredictorError::InvalidInput { field, reason } => {
                    ServiceError::Validation { field, reason }
                }
                other => ServiceError::Predictor(other),
            })?;
        let runtime = estimates.first().copied().ok_or_else(|| {
            warn!("predictor returned no estimate for a single-row input");
            ServiceError::Predictor(PredictorError::Invocation(
                "predictor returned an empty result".to_string(),
            ))
        })?;

        debug!(
            job_type = %row.job_type,
            model_family = %row.model_family,
            dataset_size = row.dataset_size,
            runtime = runtime,
            "Served runtime estimate"
        );
        Ok(runtime)
    }
}
