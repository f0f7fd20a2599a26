//! Job lifecycle states.

use serde::{Deserialize, Serialize};

/// Lifecycle of a posterization job.
///
/// A runner starts `Idle`; each submitted job moves it to `Running` and
/// then to `Completed` or `Failed` when that job finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Idle,
    Running,
    Completed,
    Failed,
}

impl JobStatus {
    /// Whether a job is currently executing.
    pub fn is_running(self) -> bool {
        self == Self::Running
    }
}
