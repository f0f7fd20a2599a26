//! Asynchronous job wrapper around the posterization engine.
//!
//! Runs decode, transform, and encode as one cancel-free job, keeps the
//! CPU-bound transform off the event loop, and tracks job lifecycle
//! (`idle -> running -> {completed, failed}`) plus a generation counter so
//! callers can discard results superseded by a newer request.

mod runner;
mod status;

// Re-exports for convenience
pub use runner::{JobOutput, JobRunner};
pub use status::JobStatus;

use posterize_codec::CodecError;
use posterize_engine::EngineError;

/// Errors surfaced by the job wrapper.
///
/// Every failure along the pipeline (decode, invalid config, dimension
/// mismatch, encode, worker death) is folded into the single aggregate
/// variant; the caller is expected to keep its previous result and offer a
/// retry.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("image processing failed: {0}")]
    ProcessingFailed(String),
}

impl From<EngineError> for JobError {
    fn from(err: EngineError) -> Self {
        Self::ProcessingFailed(err.to_string())
    }
}

impl From<CodecError> for JobError {
    fn from(err: CodecError) -> Self {
        Self::ProcessingFailed(err.to_string())
    }
}

/// Result type alias for job operations.
pub type Result<T> = std::result::Result<T, JobError>;
