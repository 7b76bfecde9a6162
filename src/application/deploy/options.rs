//! Deploy Options
//!
//! Configuration types for deploy operations.

use std::path::PathBuf;

/// What to do with the remaining files once one has failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Stop at the first failed file
    #[default]
    AbortOnError,
    /// Record the failure and carry on with the next file
    ContinueOnError,
}

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Service specification files, processed in order
    pub files: Vec<PathBuf>,
    /// Resolve and compare, but never push
    pub dry_run: bool,
    /// Failure handling across files
    pub batch_policy: BatchPolicy,
}

impl DeployOptions {
    pub fn new<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            dry_run: false,
            batch_policy: BatchPolicy::default(),
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_batch_policy(mut self, policy: BatchPolicy) -> Self {
        self.batch_policy = policy;
        self
    }

    /// Shorthand for `ContinueOnError` when `keep_going` is set
    pub fn with_keep_going(self, keep_going: bool) -> Self {
        self.with_batch_policy(if keep_going {
            BatchPolicy::ContinueOnError
        } else {
            BatchPolicy::AbortOnError
        })
    }
}
