//! Job execution and supersession tracking.

use std::sync::atomic::{AtomicU64, Ordering};

use posterize_codec as codec;
use posterize_engine::{PosterizeConfig, process};
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::{JobError, JobStatus, Result};

/// The outcome of one completed job.
#[derive(Debug, Clone)]
pub struct JobOutput {
    /// PNG-encoded result image.
    pub png: Vec<u8>,
    /// Output width (equals input width).
    pub width: u32,
    /// Output height (equals input height).
    pub height: u32,
    /// Generation this job claimed when it started. Compare against
    /// [`JobRunner::latest_generation`] to detect stale results.
    pub generation: u64,
    /// Suggested download filename for the config that produced the image.
    pub filename: String,
}

/// Runs posterization jobs one request at a time (latest wins).
///
/// The runner itself holds no pixel state; concurrent `run` calls do not
/// interfere beyond the generation ordering. A new request implicitly
/// supersedes interest in an older in-flight one: the older job still
/// finishes, but its output's generation is no longer current and the
/// caller should discard it.
pub struct JobRunner {
    generation: AtomicU64,
    status: RwLock<JobStatus>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            status: RwLock::new(JobStatus::Idle),
        }
    }

    /// Current lifecycle state. Reflects the most recently started or
    /// finished job.
    pub async fn status(&self) -> JobStatus {
        *self.status.read().await
    }

    /// Generation claimed by the most recently started job.
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Whether `generation` still belongs to the most recent request.
    pub fn is_current(&self, generation: u64) -> bool {
        self.latest_generation() == generation
    }

    /// Decode `bytes`, posterize with `config`, and encode the result as
    /// PNG.
    ///
    /// The transform runs under `spawn_blocking` so large images never
    /// stall the caller's event loop. Any failure along the pipeline is
    /// reported as [`JobError::ProcessingFailed`]; no partial output is
    /// produced, so the caller's previous result stays valid.
    pub async fn run(&self, bytes: Vec<u8>, config: PosterizeConfig) -> Result<JobOutput> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.status.write().await = JobStatus::Running;
        debug!(generation, levels = config.levels, "Posterize job started");

        match execute(bytes, config).await {
            Ok((png, width, height)) => {
                *self.status.write().await = JobStatus::Completed;
                info!(generation, width, height, "Posterize job completed");
                Ok(JobOutput {
                    png,
                    width,
                    height,
                    generation,
                    filename: codec::download_filename(&config),
                })
            }
            Err(e) => {
                *self.status.write().await = JobStatus::Failed;
                error!(generation, error = %e, "Posterize job failed");
                Err(e)
            }
        }
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}

async fn execute(bytes: Vec<u8>, config: PosterizeConfig) -> Result<(Vec<u8>, u32, u32)> {
    let input = codec::decode(&bytes)?;
    let output = tokio::task::spawn_blocking(move || process(&input, &config))
        .await
        .map_err(|e| JobError::ProcessingFailed(format!("worker task failed: {e}")))??;
    let png = codec::encode_png(&output)?;
    Ok((png, output.width(), output.height()))
}
