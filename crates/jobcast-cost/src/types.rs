//! Value types for job descriptors and resource allocations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of workload a job performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    /// Model training: scales with epochs in addition to dataset size.
    Training,
    /// Batch inference over a dataset.
    Inference,
    /// Evaluation of a trained model against a dataset.
    Evaluation,
    /// Dataset preprocessing: scales with dataset size only.
    Preprocessing,
    /// Feature extraction over a dataset.
    FeatureExtraction,
}

impl JobType {
    /// All job types, in the order the corpus samples them.
    pub const ALL: [JobType; 5] = [
        JobType::Training,
        JobType::Inference,
        JobType::Evaluation,
        JobType::Preprocessing,
        JobType::FeatureExtraction,
    ];

    /// Converts a wire string to a JobType.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "training" => Some(JobType::Training),
            "inference" => Some(JobType::Inference),
            "evaluation" => Some(JobType::Evaluation),
            "preprocessing" => Some(JobType::Preprocessing),
            "feature_extraction" => Some(JobType::FeatureExtraction),
            _ => None,
        }
    }

    /// Wire name of this job type, as used in the corpus and the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Training => "training",
            JobType::Inference => "inference",
            JobType::Evaluation => "evaluation",
            JobType::Preprocessing => "preprocessing",
            JobType::FeatureExtraction => "feature_extraction",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Relative computational cost bucket of a model family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelTier {
    /// Large neural architectures (ResNet, BERT, GPT-2, ...).
    Heavy,
    /// Mid-weight models (gradient boosting, MobileNet, ...).
    Medium,
    /// Classical models (linear regression, k-means, ...).
    Simple,
}

impl ModelTier {
    /// Runtime multiplier for this tier. Simple is the identity.
    pub fn multiplier(&self) -> f64 {
        match self {
            ModelTier::Heavy => 1.5,
            ModelTier::Medium => 1.2,
            ModelTier::Simple => 1.0,
        }
    }
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelTier::Heavy => write!(f, "heavy"),
            ModelTier::Medium => write!(f, "medium"),
            ModelTier::Simple => write!(f, "simple"),
        }
    }
}

/// Static characterization of a workload.
///
/// Constructed per request or per sample and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptor {
    /// Kind of workload.
    pub job_type: JobType,
    /// Model family name; must resolve to a tier in the catalog.
    pub model_family: String,
    /// Number of rows/samples in the dataset. Must be positive.
    pub dataset_size: u64,
    /// Batch size. Must be positive.
    pub batch_size: u32,
    /// Epoch count. Ignored by the formula for non-training jobs but
    /// still required input.
    pub epochs: u32,
}

/// Compute resources assigned to a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceAllocation {
    /// Number of CPU workers.
    pub worker_cpu: u32,
    /// Number of GPU workers.
    pub worker_gpu: u32,
    /// Memory in MiB.
    pub worker_mem: u64,
}
