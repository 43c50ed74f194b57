//! Synthetic corpus generation and CSV export.
//!
//! Repeated sampling plus jittered estimation produces the labeled rows the
//! offline model-fitting pipeline trains on. The column set and order are a
//! contract with that pipeline and must not change independently of it.

use crate::error::Result;
use crate::estimate::estimate_runtime;
use crate::sample::DescriptorSampler;
use crate::types::{JobDescriptor, ResourceAllocation};
use rand::Rng;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Jitter bounds: each generated runtime is multiplied by a uniform factor
/// in this range to simulate real-world variance.
const JITTER_LOW: f64 = 0.9;
const JITTER_HIGH: f64 = 1.1;

/// Column order of the exported corpus.
pub const COLUMNS: [&str; 9] = [
    "job_type",
    "model",
    "dataset_size",
    "batch_size",
    "epochs",
    "worker_cpu",
    "worker_gpu",
    "worker_mem",
    "runtime",
];

/// One labeled sample of the synthetic corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetRow {
    /// The sampled workload.
    pub job: JobDescriptor,
    /// The sampled allocation.
    pub resources: ResourceAllocation,
    /// Jittered runtime label.
    pub runtime: f64,
}

/// Corpus export errors
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying IO failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Estimates a runtime with jitter applied, as corpus labels are drawn.
///
/// The jittered variant lives here and not in `estimate` because noise
/// belongs to the generation path only; serving always uses the
/// deterministic estimate.
pub fn estimate_runtime_jittered<R: Rng + ?Sized>(
    job: &JobDescriptor,
    resources: &ResourceAllocation,
    rng: &mut R,
) -> Result<f64> {
    let expected = estimate_runtime(job, resources)?;
    Ok(expected * rng.gen_range(JITTER_LOW..JITTER_HIGH))
}

/// Generates `n` labeled rows by sampling descriptors and estimating their
/// runtime with jitter applied.
///
/// Seeding the rng explicitly makes the corpus restartable and
/// reproducible.
pub fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Vec<DatasetRow>> {
    let sampler = DescriptorSampler::new();
    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let (job, resources) = sampler.sample(rng);
        // Sampled values always lie inside the catalog and the multiplier
        // tables, so estimation cannot fail here; propagate anyway.
        let runtime = estimate_runtime_jittered(&job, &resources, rng)?;
        rows.push(DatasetRow {
            job,
            resources,
            runtime,
        });
        if (i + 1) % 1000 == 0 {
            debug!(generated = i + 1, total = n, "Corpus generation progress");
        }
    }
    info!(rows = rows.len(), "Generated synthetic corpus");
    Ok(rows)
}

/// Writes rows as CSV in the contract column order, header included.
pub fn write_csv<W: Write>(rows: &[DatasetRow], writer: W) -> std::result::Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.write_record(&[
            row.job.job_type.as_str().to_string(),
            row.job.model_family.clone(),
            row.job.dataset_size.to_string(),
            row.job.batch_size.to_string(),
            row.job.epochs.to_string(),
            row.resources.worker_cpu.to_string(),
            row.resources.worker_gpu.to_string(),
            row.resources.worker_mem.to_string(),
            row.runtime.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes rows as CSV to a file path.
pub fn write_csv_path(
    rows: &[DatasetRow],
    path: impl AsRef<Path>,
) -> std::result::Result<(), ExportError> {
    let file = std::fs::File::create(path.as_ref())?;
    write_csv(rows, file)?;
    info!(path = %path.as_ref().display(), rows = rows.len(), "Wrote corpus CSV");
    Ok(())
}
