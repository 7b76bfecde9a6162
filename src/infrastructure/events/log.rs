//! Log Event Sink
//!
//! Reports deploy progress through `tracing`, on stderr.

use tracing::{debug, error, info, warn};

use crate::domain::ports::{DeployEvent, DeployEventSink};

#[derive(Debug, Clone, Copy, Default)]
pub struct LogEventSink;

impl DeployEventSink for LogEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started {
                file_count,
                dry_run,
            } => {
                if dry_run {
                    info!("Dry run over {} file(s), nothing will be pushed", file_count);
                } else {
                    debug!("Deploying {} file(s)", file_count);
                }
            }
            DeployEvent::FileStarted { path, .. } => info!("Processing {}", path.display()),
            DeployEvent::Resolved {
                app_id,
                provisioned,
                envelopes,
                ..
            } => {
                if provisioned {
                    debug!("Generated deploy key for {}", app_id);
                }
                if envelopes > 0 && !provisioned {
                    warn!(
                        "{} has {} encrypted value(s) but no secretary.url; they cannot be decrypted at runtime",
                        app_id, envelopes
                    );
                } else if envelopes > 0 {
                    debug!("{} carries {} encrypted value(s)", app_id, envelopes);
                }
            }
            DeployEvent::Compared {
                app_id, unchanged, ..
            } => {
                if unchanged {
                    info!("{} is already deployed with the same config", app_id);
                } else {
                    debug!("{} config has changed", app_id);
                }
            }
            DeployEvent::ComparisonFailed { app_id, error, .. } => {
                warn!(
                    "Could not compare {} with its deployed state, treating it as changed: {}",
                    app_id, error
                );
            }
            DeployEvent::Pushed { app_id, .. } => info!("Deployed {}", app_id),
            DeployEvent::DryRunSkipped { app_id, .. } => info!("Dry run, not deploying {}", app_id),
            DeployEvent::FileFailed { path, error, .. } => {
                error!("Failed to deploy {}: {}", path.display(), error);
            }
            DeployEvent::Completed {
                processed_count,
                failed_count,
                aborted,
            } => {
                if aborted {
                    warn!(
                        "Aborted after {} file(s); pass --keep-going to continue past failures",
                        processed_count
                    );
                } else if failed_count > 0 {
                    warn!("{} of {} file(s) failed", failed_count, processed_count);
                } else {
                    debug!("Processed {} file(s)", processed_count);
                }
            }
        }
    }
}
