//! Inbound prediction request and its validation.

use crate::error::ServiceError;
use crate::predictor::FeatureRow;
use jobcast_cost::{tier_of, JobType};
use serde::Deserialize;

fn default_worker_cpu() -> u32 {
    8
}

fn default_worker_gpu() -> u32 {
    1
}

fn default_worker_mem() -> u64 {
    8192
}

/// A request for a runtime estimate.
///
/// Resource fields are optional with the documented defaults; everything
/// else is required. Numeric fields are accepted as signed so that
/// out-of-domain values are rejected with a field-level message instead of
/// a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    /// Number of rows/samples in the dataset. Must be positive.
    pub dataset_size: i64,
    /// Batch size. Must be positive.
    pub batch_size: i64,
    /// Epoch count. Must be non-negative.
    pub epochs: i64,
    /// CPU worker count. Defaults to 8.
    #[serde(default = "default_worker_cpu")]
    pub worker_cpu: u32,
    /// GPU worker count. Defaults to 1.
    #[serde(default = "default_worker_gpu")]
    pub worker_gpu: u32,
    /// Memory in MiB. Defaults to 8192.
    #[serde(default = "default_worker_mem")]
    pub worker_mem: u64,
    /// One of the five job type names.
    pub job_type: String,
    /// Model family name. The corpus column is named `model`, accepted as
    /// an alias.
    #[serde(alias = "model")]
    pub model_family: String,
}

impl PredictRequest {
    /// Validates the request and assembles the feature row in contract
    /// order.
    ///
    /// Unknown model families are rejected here rather than forwarded, so
    /// the fitted predictor never sees input outside its training
    /// distribution.
    ///
    /// # Errors
    /// `ServiceError::Validation` naming the offending field.
    pub fn to_feature_row(&self) -> Result<FeatureRow, ServiceError> {
        if self.dataset_size <= 0 {
            return Err(ServiceError::Validation {
                field: "dataset_size",
                reason: format!("must be positive, got {}", self.dataset_size),
            });
        }
        if self.batch_size <= 0 || self.batch_size > i64::from(u32::MAX) {
            return Err(ServiceError::Validation {
                field: "batch_size",
                reason: format!("must be a positive batch size, got {}", self.batch_size),
            });
        }
        if self.epochs < 0 || self.epochs > i64::from(u32::MAX) {
            return Err(ServiceError::Validation {
                field: "epochs",
                reason: format!("must be non-negative, got {}", self.epochs),
            });
        }
        let job_type = JobType::from_str(&self.job_type).ok_or_else(|| ServiceError::Validation {
            field: "job_type",
            reason: format!("'{}' is not a known job type", self.job_type),
        })?;
        if tier_of(&self.model_family).is_none() {
            return Err(ServiceError::Validation {
                field: "model_family",
                reason: format!("'{}' is not in the model catalog", self.model_family),
            });
        }

        Ok(FeatureRow {
            dataset_size: self.dataset_size as u64,
            batch_size: self.batch_size as u32,
            epochs: self.epochs as u32,
            worker_cpu: self.worker_cpu,
            worker_gpu: self.worker_gpu,
            worker_mem: self.worker_mem,
            job_type,
            model_family: self.model_family.clone(),
        })
    }
}
