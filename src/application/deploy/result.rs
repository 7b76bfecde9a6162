//! Deploy Result
//!
//! Result types for deploy operations.

use std::path::PathBuf;

use serde::Serialize;

/// A file that went through the whole pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub app_id: String,
    /// `None` when desired and deployed state could not be compared
    pub unchanged: Option<bool>,
    /// False for dry runs
    pub pushed: bool,
}

impl FileOutcome {
    /// One-word status for reporting
    pub fn status(&self) -> &'static str {
        match (self.pushed, self.unchanged) {
            (false, _) => "dry-run",
            (true, Some(true)) => "unchanged",
            (true, _) => "deployed",
        }
    }
}

/// A file that failed somewhere in the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Result of a deploy operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeployResult {
    /// Files processed successfully, in order
    pub outcomes: Vec<FileOutcome>,
    /// Files that failed, in order
    pub failures: Vec<FileFailure>,
    /// Files never attempted because the batch was aborted
    pub skipped: Vec<PathBuf>,
    /// Whether the batch stopped early
    pub aborted: bool,
}

impl DeployResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Files attempted, successful or not
    pub fn processed_count(&self) -> usize {
        self.outcomes.len() + self.failures.len()
    }

    pub fn pushed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.pushed).count()
    }
}
