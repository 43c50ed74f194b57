//! Predictor contract and the analytic reference implementation.

use jobcast_cost::{estimate_runtime, CostError, JobDescriptor, JobType, ResourceAllocation};
use thiserror::Error;

/// One assembled feature row.
///
/// Field order mirrors the training schema of the fitted predictor:
/// `[dataset_size, batch_size, epochs, worker_cpu, worker_gpu, worker_mem,
/// job_type, model_family]`. This ordering is a contract and must never
/// change independently of the predictor's training pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    /// Number of rows/samples in the dataset.
    pub dataset_size: u64,
    /// Batch size.
    pub batch_size: u32,
    /// Epoch count.
    pub epochs: u32,
    /// CPU worker count.
    pub worker_cpu: u32,
    /// GPU worker count.
    pub worker_gpu: u32,
    /// Memory in MiB.
    pub worker_mem: u64,
    /// Kind of workload.
    pub job_type: JobType,
    /// Model family name.
    pub model_family: String,
}

impl FeatureRow {
    /// Column names in contract order.
    pub const COLUMNS: [&'static str; 8] = [
        "dataset_size",
        "batch_size",
        "epochs",
        "worker_cpu",
        "worker_gpu",
        "worker_mem",
        "job_type",
        "model_family",
    ];
}

/// Errors from the external predictor collaborator
#[derive(Debug, Error)]
pub enum PredictorError {
    /// The predictor artifact could not be loaded or reached
    #[error("Predictor unavailable: {0}")]
    Unavailable(String),

    /// A feature value lies outside the predictor's supported domain.
    /// The service surfaces this as a client error, not a server fault.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
        /// Reason the value is outside the domain
        reason: String,
    },

    /// The predictor was invoked but failed to produce an estimate
    #[error("Prediction failed: {0}")]
    Invocation(String),
}

/// A fitted runtime regressor, loaded once at startup and shared
/// immutably across requests.
///
/// Implementations must be safe for concurrent read-only use; the service
/// never mutates the predictor after construction.
pub trait Predictor: Send + Sync {
    /// Predicts a runtime for each feature row, in order.
    fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<f64>, PredictorError>;
}

/// Predictor backed by the analytic cost model, without jitter.
///
/// Serves as the default artifact when no fitted regressor is supplied and
/// as the reference predictor in tests. A real deployment injects a fitted
/// model behind the same trait instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostModelPredictor;

impl Predictor for CostModelPredictor {
    fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<f64>, PredictorError> {
        rows.iter()
            .map(|row| {
                let job = JobDescriptor {
                    job_type: row.job_type,
                    model_family: row.model_family.clone(),
                    dataset_size: row.dataset_size,
                    batch_size: row.batch_size,
                    epochs: row.epochs,
                };
                let resources = ResourceAllocation {
                    worker_cpu: row.worker_cpu,
                    worker_gpu: row.worker_gpu,
                    worker_mem: row.worker_mem,
                };
                estimate_runtime(&job, &resources).map_err(|e| match e {
                    CostError::Validation { field, reason } => {
                        PredictorError::InvalidInput { field, reason }
                    }
                    CostError::UnsupportedResourceTier { resource, value } => {
                        PredictorError::InvalidInput {
                            field: resource,
                            reason: format!("{value} has no multiplier entry"),
                        }
                    }
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> FeatureRow {
        FeatureRow {
            dataset_size: 2500,
            batch_size: 32,
            epochs: 1,
            worker_cpu: 8,
            worker_gpu: 1,
            worker_mem: 16384,
            job_type: JobType::Preprocessing,
            model_family: "linear_regression".to_string(),
        }
    }

    #[test]
    fn test_cost_model_predictor_matches_analytic_estimate() {
        let predictions = CostModelPredictor.predict(&[row()]).unwrap();
        assert_eq!(predictions, vec![1.5]);
    }

    #[test]
    fn test_cost_model_predictor_preserves_row_order() {
        let mut second = row();
        second.dataset_size = 5000;
        let predictions = CostModelPredictor.predict(&[row(), second]).unwrap();
        assert_eq!(predictions.len(), 2);
        assert!(predictions[1] > predictions[0]);
    }

    #[test]
    fn test_off_table_resources_are_invalid_input_naming_the_field() {
        let mut bad = row();
        bad.worker_gpu = 7;
        let err = CostModelPredictor.predict(&[bad]).unwrap_err();
        assert!(matches!(
            err,
            PredictorError::InvalidInput {
                field: "worker_gpu",
                ..
            }
        ));
    }
}
