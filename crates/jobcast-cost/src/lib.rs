//! Cost model for ML job runtime estimation.
//!
//! This crate is the leaf component of jobcast: a pure function mapping a
//! job descriptor plus a resource allocation to an expected runtime, and a
//! sampling routine that synthesizes a labeled corpus under the same model
//! with bounded multiplicative jitter.

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod estimate;
pub mod sample;
pub mod types;

pub use catalog::tier_of;
pub use dataset::{
    estimate_runtime_jittered, generate, write_csv, write_csv_path, DatasetRow, ExportError,
};
pub use error::{CostError, Result};
pub use estimate::estimate_runtime;
pub use sample::DescriptorSampler;
pub use types::{JobDescriptor, JobType, ModelTier, ResourceAllocation};
