//! Random sampling of job descriptors for corpus generation.
//!
//! Distributions mirror the corpus the downstream regressor is fitted on:
//! job type uniform over the five kinds, model family uniform over the full
//! catalog, dataset size log-normal, and categorical tables for batch size,
//! epochs, and the three resource dimensions.

use crate::catalog;
use crate::types::{JobDescriptor, JobType, ResourceAllocation};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::LogNormal;

const BATCH_SIZES: [u32; 4] = [16, 32, 64, 128];
const BATCH_WEIGHTS: [f64; 4] = [0.4, 0.3, 0.2, 0.1];

// Epochs are drawn from 1..=20, but only 1..=5 carry mass. The zero tail
// is part of the corpus definition and is kept verbatim.
const EPOCH_WEIGHTS: [f64; 20] = [
    0.3, 0.25, 0.15, 0.1, 0.2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0,
];

const GPU_COUNTS: [u32; 4] = [4, 3, 2, 1];
const GPU_WEIGHTS: [f64; 4] = [0.1, 0.2, 0.3, 0.4];

const CPU_COUNTS: [u32; 4] = [4, 8, 16, 32];
const CPU_WEIGHTS: [f64; 4] = [0.1, 0.4, 0.4, 0.1];

const MEM_MIB: [u64; 4] = [8192, 16384, 32768, 65536];
const MEM_WEIGHTS: [f64; 4] = [0.1, 0.3, 0.4, 0.2];

/// Mean of the underlying normal for dataset size.
const DATASET_SIZE_MU: f64 = 10.0;
/// Sigma of the underlying normal for dataset size.
const DATASET_SIZE_SIGMA: f64 = 1.0;

/// Draws job descriptors and resource allocations from the corpus
/// distributions.
///
/// Holds the prepared distribution tables; the random source is passed per
/// call, so concurrent generators each own an independent rng and sampling
/// stays reproducible under a fixed seed.
pub struct DescriptorSampler {
    families: Vec<&'static str>,
    dataset_size: LogNormal<f64>,
    batch: WeightedIndex<f64>,
    epochs: WeightedIndex<f64>,
    gpu: WeightedIndex<f64>,
    cpu: WeightedIndex<f64>,
    mem: WeightedIndex<f64>,
}

impl DescriptorSampler {
    /// Creates a sampler over the full catalog.
    pub fn new() -> Self {
        // The tables above are compile-time constants with positive total
        // mass, so construction cannot fail at runtime.
        Self {
            families: catalog::all_families().collect(),
            dataset_size: LogNormal::new(DATASET_SIZE_MU, DATASET_SIZE_SIGMA)
                .expect("log-normal parameters are valid"),
            batch: WeightedIndex::new(BATCH_WEIGHTS).expect("batch weights are valid"),
            epochs: WeightedIndex::new(EPOCH_WEIGHTS).expect("epoch weights are valid"),
            gpu: WeightedIndex::new(GPU_WEIGHTS).expect("gpu weights are valid"),
            cpu: WeightedIndex::new(CPU_WEIGHTS).expect("cpu weights are valid"),
            mem: WeightedIndex::new(MEM_WEIGHTS).expect("mem weights are valid"),
        }
    }

    /// Draws one (descriptor, allocation) pair.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (JobDescriptor, ResourceAllocation) {
        let job_type = *JobType::ALL.choose(rng).expect("job type list is non-empty");
        let model_family = *self
            .families
            .choose(rng)
            .expect("family catalog is non-empty");

        // Truncate toward zero like the corpus does, clamped to stay positive.
        let dataset_size = (self.dataset_size.sample(rng).trunc() as u64).max(1);
        let batch_size = BATCH_SIZES[self.batch.sample(rng)];
        let epochs = self.epochs.sample(rng) as u32 + 1;

        let job = JobDescriptor {
            job_type,
            model_family: model_family.to_string(),
            dataset_size,
            batch_size,
            epochs,
        };
        let resources = ResourceAllocation {
            worker_cpu: CPU_COUNTS[self.cpu.sample(rng)],
            worker_gpu: GPU_COUNTS[self.gpu.sample(rng)],
            worker_mem: MEM_MIB[self.mem.sample(rng)],
        };
        (job, resources)
    }
}

impl Default for DescriptorSampler {
    fn default() -> Self {
        Self::new()
    }
}
