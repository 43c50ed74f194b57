//! Deterministic runtime estimation.
//!
//! Composes the base runtime (per job type), the model-tier multiplier, and
//! the discrete resource multipliers. Jitter lives in the generation path
//! (`dataset`), never here: two calls with identical inputs return
//! bit-identical output.

use crate::catalog;
use crate::error::{CostError, Result};
use crate::types::{JobDescriptor, JobType, ResourceAllocation};
use tracing::trace;

/// Reference batch size; per-example cost shrinks as the batch grows past it.
const REFERENCE_BATCH: f64 = 32.0;

/// Base runtime for a job before any multiplier is applied.
///
/// Runtime scales linearly with dataset size and inversely with batch size
/// (fewer, larger batches mean fewer steps). Training additionally scales
/// with epoch count and a constant overhead factor; preprocessing depends
/// on dataset size alone.
fn base_runtime(job: &JobDescriptor) -> f64 {
    let d = job.dataset_size as f64;
    let b = f64::from(job.batch_size);
    let e = f64::from(job.epochs);

    match job.job_type {
        JobType::Training => e * (d / b) * 2.0 * (REFERENCE_BATCH / b) / 100.0,
        JobType::Inference => (d / b) * (REFERENCE_BATCH / b) / 50.0,
        JobType::Evaluation => (d / b) * (REFERENCE_BATCH / b) / 40.0,
        JobType::Preprocessing => d / 2500.0,
        JobType::FeatureExtraction => (d / b) * (REFERENCE_BATCH / b) / 60.0,
    }
}

/// GPU worker-count multiplier. More GPUs reduce runtime sub-linearly.
fn gpu_multiplier(worker_gpu: u32) -> Result<f64> {
    match worker_gpu {
        1 => Ok(1.5),
        2 => Ok(1.2),
        3 => Ok(1.0),
        4 => Ok(0.8),
        other => Err(CostError::UnsupportedResourceTier {
            resource: "worker_gpu",
            value: u64::from(other),
        }),
    }
}

/// CPU worker-count multiplier.
fn cpu_multiplier(worker_cpu: u32) -> Result<f64> {
    match worker_cpu {
        4 => Ok(1.2),
        8 => Ok(1.0),
        16 => Ok(0.8),
        32 => Ok(0.7),
        other => Err(CostError::UnsupportedResourceTier {
            resource: "worker_cpu",
            value: u64::from(other),
        }),
    }
}

/// Memory (MiB) multiplier.
fn mem_multiplier(worker_mem: u64) -> Result<f64> {
    match worker_mem {
        8192 => Ok(1.1),
        16384 => Ok(1.0),
        32768 => Ok(0.9),
        65536 => Ok(0.85),
        other => Err(CostError::UnsupportedResourceTier {
            resource: "worker_mem",
            value: other,
        }),
    }
}

/// Estimates the expected runtime of a job on the given allocation.
///
/// Deterministic: no jitter is applied. Fails on the first violated
/// precondition and never returns a partial result.
///
/// # Errors
/// `CostError::Validation` if `dataset_size` or `batch_size` is zero or
/// `model_family` is not in the catalog; `CostError::UnsupportedResourceTier`
/// if a resource value has no multiplier entry.
pub fn estimate_runtime(job: &JobDescriptor, resources: &ResourceAllocation) -> Result<f64> {
    if job.dataset_size == 0 {
        return Err(CostError::Validation {
            field: "dataset_size",
            reason: "must be positive".to_string(),
        });
    }
    if job.batch_size == 0 {
        return Err(CostError::Validation {
            field: "batch_size",
            reason: "must be positive".to_string(),
        });
    }
    let tier = catalog::tier_of(&job.model_family).ok_or_else(|| CostError::Validation {
        field: "model_family",
        reason: format!("unknown model family '{}'", job.model_family),
    })?;

    // Multipliers commute; order is fixed only for readability.
    let runtime = base_runtime(job)
        * tier.multiplier()
        * gpu_multiplier(resources.worker_gpu)?
        * cpu_multiplier(resources.worker_cpu)?
        * mem_multiplier(resources.worker_mem)?;

    trace!(
        job_type = %job.job_type,
        model_family = %job.model_family,
        tier = %tier,
        runtime = runtime,
        "Estimated runtime"
    );

    Ok(runtime)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(job_type: JobType, model_family: &str) -> JobDescriptor {
        JobDescriptor {
            job_type,
            model_family: model_family.to_string(),
            dataset_size: 2500,
            batch_size: 32,
            epochs: 1,
        }
    }

    fn allocation() -> ResourceAllocation {
        ResourceAllocation {
            worker_cpu: 8,
            worker_gpu: 1,
            worker_mem: 16384,
        }
    }

    #[test]
    fn test_preprocessing_worked_example() {
        // base 2500/2500 = 1.0, simple tier x1.0, gpu=1 x1.5, cpu=8 x1.0,
        // mem=16384 x1.0 => 1.5
        let job = descriptor(JobType::Preprocessing, "linear_regression");
        let runtime = estimate_runtime(&job, &allocation()).unwrap();
        assert_eq!(runtime, 1.5);
    }

    #[test]
    fn test_deterministic() {
        let job = descriptor(JobType::Training, "resnet50");
        let resources = allocation();
        let a = estimate_runtime(&job, &resources).unwrap();
        let b = estimate_runtime(&job, &resources).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_training_scales_with_epochs() {
        let mut job = descriptor(JobType::Training, "resnet50");
        let one = estimate_runtime(&job, &allocation()).unwrap();
        job.epochs = 3;
        let three = estimate_runtime(&job, &allocation()).unwrap();
        assert!((three / one - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_epochs_ignored_for_non_training() {
        for job_type in [
            JobType::Inference,
            JobType::Evaluation,
            JobType::Preprocessing,
            JobType::FeatureExtraction,
        ] {
            let mut job = descriptor(job_type, "k-means");
            let one = estimate_runtime(&job, &allocation()).unwrap();
            job.epochs = 17;
            let seventeen = estimate_runtime(&job, &allocation()).unwrap();
            assert_eq!(one, seventeen, "{job_type} must not depend on epochs");
        }
    }

    #[test]
    fn test_zero_epochs_training_is_zero() {
        let mut job = descriptor(JobType::Training, "resnet50");
        job.epochs = 0;
        assert_eq!(estimate_runtime(&job, &allocation()).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_dataset_size_rejected_for_every_job_type() {
        for job_type in JobType::ALL {
            let mut job = descriptor(job_type, "bert-base");
            job.dataset_size = 0;
            let err = estimate_runtime(&job, &allocation()).unwrap_err();
            assert_eq!(err.field(), "dataset_size");
        }
    }

    #[test]
    fn test_zero_batch_size_rejected_for_every_job_type() {
        for job_type in JobType::ALL {
            let mut job = descriptor(job_type, "mobilenet");
            job.batch_size = 0;
            let err = estimate_runtime(&job, &allocation()).unwrap_err();
            assert_eq!(err.field(), "batch_size");
        }
    }

    #[test]
    fn test_unknown_model_family_rejected() {
        let job = descriptor(JobType::Inference, "transformer-xxl");
        let err = estimate_runtime(&job, &allocation()).unwrap_err();
        assert!(matches!(
            err,
            CostError::Validation {
                field: "model_family",
                ..
            }
        ));
    }

    #[test]
    fn test_heavy_vs_simple_ratio_is_exactly_1_5() {
        let heavy = descriptor(JobType::Evaluation, "vgg19");
        let simple = descriptor(JobType::Evaluation, "naive_bayes");
        let resources = allocation();
        let ratio = estimate_runtime(&heavy, &resources).unwrap()
            / estimate_runtime(&simple, &resources).unwrap();
        assert_eq!(ratio, 1.5);
    }

    #[test]
    fn test_more_gpus_strictly_decrease_runtime() {
        let job = descriptor(JobType::Training, "gpt2");
        let mut last = f64::INFINITY;
        for worker_gpu in 1..=4 {
            let resources = ResourceAllocation {
                worker_gpu,
                ..allocation()
            };
            let runtime = estimate_runtime(&job, &resources).unwrap();
            assert!(runtime < last, "gpu={worker_gpu} must be faster");
            last = runtime;
        }
    }

    #[test]
    fn test_larger_dataset_strictly_increases_runtime() {
        for job_type in JobType::ALL {
            let mut job = descriptor(job_type, "resnet101");
            job.epochs = 2;
            let small = estimate_runtime(&job, &allocation()).unwrap();
            job.dataset_size *= 10;
            let large = estimate_runtime(&job, &allocation()).unwrap();
            assert!(large > small, "{job_type} must grow with dataset size");
        }
    }

    #[test]
    fn test_off_catalog_resources_rejected() {
        let job = descriptor(JobType::Inference, "lstm");
        let cases: [(ResourceAllocation, &str); 3] = [
            (
                ResourceAllocation {
                    worker_gpu: 5,
                    ..allocation()
                },
                "worker_gpu",
            ),
            (
                ResourceAllocation {
                    worker_cpu: 6,
                    ..allocation()
                },
                "worker_cpu",
            ),
            (
                ResourceAllocation {
                    worker_mem: 4096,
                    ..allocation()
                },
                "worker_mem",
            ),
        ];
        for (resources, field) in cases {
            let err = estimate_runtime(&job, &resources).unwrap_err();
            assert!(matches!(err, CostError::UnsupportedResourceTier { .. }));
            assert_eq!(err.field(), field);
        }
    }
}
