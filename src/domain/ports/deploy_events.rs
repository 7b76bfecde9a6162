//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq)]
pub enum DeployEvent {
    /// Batch started
    Started { file_count: usize, dry_run: bool },

    /// A specification file is about to be processed
    FileStarted { index: usize, path: PathBuf },

    /// Layers merged and secrets provisioned
    Resolved {
        index: usize,
        app_id: String,
        provisioned: bool,
        envelopes: usize,
    },

    /// Desired state compared against the deployed state
    Compared {
        index: usize,
        app_id: String,
        unchanged: bool,
    },

    /// Desired and deployed state could not be compared
    ComparisonFailed {
        index: usize,
        app_id: String,
        error: String,
    },

    /// Desired state pushed to the orchestrator
    Pushed { index: usize, app_id: String },

    /// Push skipped because of `--dry-run`
    DryRunSkipped { index: usize, app_id: String },

    /// Processing the file failed
    FileFailed {
        index: usize,
        path: PathBuf,
        error: String,
    },

    /// Batch completed (or aborted)
    Completed {
        processed_count: usize,
        failed_count: usize,
        aborted: bool,
    },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - LogEventSink: tracing output
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {
        // Do nothing
    }
}
