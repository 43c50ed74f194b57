//! jobcast CLI - generate synthetic runtime corpora and serve estimates.
//!
//! `jobcast generate` synthesizes a labeled (descriptor, runtime) corpus
//! under the analytic cost model; `jobcast serve` exposes the prediction
//! endpoint over HTTP.

use anyhow::Context;
use clap::{Parser, Subcommand};
use jobcast_service::{CostModelPredictor, PredictionService};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// jobcast - ML job runtime estimation
#[derive(Parser, Debug)]
#[command(
    name = "jobcast",
    author,
    version,
    about = "Estimate ML job runtimes from workload descriptors"
)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a labeled synthetic corpus as CSV
    ///
    /// Samples job descriptors from the documented distributions, estimates
    /// each runtime with jitter applied, and writes one CSV row per sample.
    Generate {
        /// Number of samples to generate
        #[arg(short = 'n', long, default_value_t = 10_000)]
        samples: usize,

        /// Seed for the random source; a fixed seed reproduces the corpus
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output CSV path
        #[arg(short, long, default_value = "dataset.csv")]
        output: PathBuf,
    },

    /// Serve the prediction endpoint over HTTP
    ///
    /// Exposes POST /predict and GET /health. Uses the analytic cost model
    /// as the predictor; a fitted regressor can be injected in place of it
    /// when embedding the service crate.
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1:8001")]
        addr: SocketAddr,
    },
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let level: Level = log_level
        .parse()
        .with_context(|| format!("invalid log level '{log_level}'"))?;
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;
    Ok(())
}

fn generate(samples: usize, seed: u64, output: &Path) -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = jobcast_cost::generate(samples, &mut rng)
        .context("corpus generation failed")?;
    jobcast_cost::write_csv_path(&rows, output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(samples, seed, output = %output.display(), "Corpus written");
    Ok(())
}

async fn serve(addr: SocketAddr) -> anyhow::Result<()> {
    let service = PredictionService::new(Arc::new(CostModelPredictor));
    let app = jobcast_service::router(service);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "Serving predictions");
    axum::serve(listener, app)
        .await
        .context("server terminated unexpectedly")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    match args.command {
        Command::Generate {
            samples,
            seed,
            output,
        } => generate(samples, seed, &output),
        Command::Serve { addr } => serve(addr).await,
    }
}
