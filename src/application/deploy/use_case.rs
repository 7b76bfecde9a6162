//! Deploy Use Case
//!
//! Orchestrates the deployment flow, one specification file at a time:
//! 1. Resolve the layers (service file, sibling globals, artifact descriptor)
//! 2. Provision deploy keys when the file asks for secretary wiring
//! 3. Fetch the deployed state and compare it with the desired state
//! 4. Push the desired state unless this is a dry run
//!
//! This use case is pure orchestration - all business logic lives in domain services.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::domain::entities::{ConfigLayer, LayerOrigin};
use crate::domain::ports::{
    ArtifactRegistry, DeployEvent, DeployEventSink, DocumentError, DocumentLoader, KeyEncoding,
    NoopEventSink, Orchestrator,
};
use crate::domain::services::{merge_layers, merge_mappings, unchanged, SecretProvisioner};
use crate::domain::value_objects::{find_envelopes, Mapping, MavenCoordinates, Value};
use crate::error::{LighterError, LighterResult};

use super::options::{BatchPolicy, DeployOptions};
use super::result::{DeployResult, FileFailure, FileOutcome};

/// Shared settings looked up next to every service file
pub const GLOBALS_FILE: &str = "globals.yml";

/// A specification file resolved into its desired state
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSpec {
    /// Where the artifact descriptor came from
    pub coordinates: MavenCoordinates,
    /// Merge inputs, weakest first
    pub layers: Vec<ConfigLayer>,
    /// Merged app definition, before secret provisioning
    pub config: Mapping,
    /// Service file merged with globals; carries the `secretary` section
    pub document: Mapping,
}

/// Deploy use case - orchestrates the deployment flow
///
/// This use case is parameterized by its dependencies (ports),
/// allowing for easy testing and different implementations.
pub struct DeployUseCase<DL, AR, OR, KE>
where
    DL: DocumentLoader,
    AR: ArtifactRegistry,
    OR: Orchestrator,
    KE: KeyEncoding,
{
    loader: DL,
    registry: AR,
    orchestrator: OR,
    provisioner: SecretProvisioner<KE>,
}

impl<DL, AR, OR, KE> DeployUseCase<DL, AR, OR, KE>
where
    DL: DocumentLoader,
    AR: ArtifactRegistry,
    OR: Orchestrator,
    KE: KeyEncoding,
{
    pub fn new(loader: DL, registry: AR, orchestrator: OR, encoding: KE) -> Self {
        Self {
            loader,
            registry,
            orchestrator,
            provisioner: SecretProvisioner::new(encoding),
        }
    }

    /// Execute the deploy use case
    pub fn execute(&self, options: &DeployOptions) -> DeployResult {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the deploy use case with event reporting
    pub fn execute_with_events(
        &self,
        options: &DeployOptions,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> DeployResult {
        self.execute_full(options, event_sink, &mut OsRng)
    }

    /// Execute with an explicit key generator
    pub fn execute_full<R: RngCore + CryptoRng>(
        &self,
        options: &DeployOptions,
        event_sink: Arc<dyn DeployEventSink>,
        rng: &mut R,
    ) -> DeployResult {
        let mut result = DeployResult::new();

        event_sink.on_event(DeployEvent::Started {
            file_count: options.files.len(),
            dry_run: options.dry_run,
        });

        for (index, path) in options.files.iter().enumerate() {
            if result.aborted {
                result.skipped.push(path.clone());
                continue;
            }

            event_sink.on_event(DeployEvent::FileStarted {
                index,
                path: path.clone(),
            });

            match self.deploy_file(index, path, options, event_sink.as_ref(), rng) {
                Ok(outcome) => result.outcomes.push(outcome),
                Err(err) => {
                    let error = err.to_string();
                    event_sink.on_event(DeployEvent::FileFailed {
                        index,
                        path: path.clone(),
                        error: error.clone(),
                    });
                    result.failures.push(FileFailure {
                        path: path.clone(),
                        error,
                    });
                    if options.batch_policy == BatchPolicy::AbortOnError {
                        result.aborted = true;
                    }
                }
            }
        }

        event_sink.on_event(DeployEvent::Completed {
            processed_count: result.processed_count(),
            failed_count: result.failures.len(),
            aborted: result.aborted,
        });

        result
    }

    /// Load a service file and its globals, fetch the descriptor and merge
    pub fn resolve(&self, path: &Path) -> LighterResult<ResolvedSpec> {
        let service = self.loader.load(path)?;

        let globals_path = globals_path(path);
        let globals = match self.loader.load(&globals_path) {
            Ok(globals) => globals,
            Err(DocumentError::NotFound { .. }) => {
                debug!("No {} found, using empty globals", globals_path.display());
                Mapping::new()
            }
            Err(err) => return Err(err.into()),
        };

        let empty = Mapping::new();
        let maven = merge_mappings([
            section(&service, "maven", path)?.unwrap_or(&empty),
            section(&globals, "maven", &globals_path)?.unwrap_or(&empty),
        ])?;
        let coordinates =
            MavenCoordinates::from_mapping(&maven).map_err(|source| LighterError::Coordinates {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(
            "Fetching descriptor for {} from {}",
            coordinates,
            coordinates.descriptor_url()
        );
        let descriptor = self.registry.fetch_descriptor(&coordinates)?;

        let layers = vec![
            ConfigLayer::new(coordinates.to_string(), LayerOrigin::Artifact)
                .with_values(descriptor),
            ConfigLayer::new("override", LayerOrigin::Service)
                .with_values(owned_section(&service, "override", path)?),
            ConfigLayer::new("variables", LayerOrigin::Service)
                .with_values(owned_section(&service, "variables", path)?),
            ConfigLayer::new("variables", LayerOrigin::Globals)
                .with_values(owned_section(&globals, "variables", &globals_path)?),
        ];
        for layer in &layers {
            debug!("Layer {} has {} top-level keys", layer.label(), layer.values.len());
        }

        let config = merge_layers(&layers)?;
        let document = merge_mappings([&service, &globals])?;

        Ok(ResolvedSpec {
            coordinates,
            layers,
            config,
            document,
        })
    }

    fn deploy_file<R: RngCore + CryptoRng>(
        &self,
        index: usize,
        path: &Path,
        options: &DeployOptions,
        event_sink: &dyn DeployEventSink,
        rng: &mut R,
    ) -> LighterResult<FileOutcome> {
        let resolved = self.resolve(path)?;

        let envelopes = find_envelopes(&Value::Mapping(resolved.config.clone()));
        for envelope in &envelopes {
            debug!("Encrypted value at {}", envelope);
        }

        let provisioning = self
            .provisioner
            .provision(&resolved.document, &resolved.config, rng)?;
        let provisioned = provisioning.is_provisioned();
        let desired = provisioning.unwrap_or(resolved.config);

        let app_id = app_id(&desired).ok_or_else(|| LighterError::MissingAppId {
            path: path.to_path_buf(),
        })?;

        event_sink.on_event(DeployEvent::Resolved {
            index,
            app_id: app_id.clone(),
            provisioned,
            envelopes: envelopes.len(),
        });

        let deployed = match self.orchestrator.fetch_app(&app_id) {
            Ok(app) => app,
            Err(err) => {
                debug!("No deployed state for {}: {}", app_id, err);
                Mapping::new()
            }
        };

        let same = match unchanged(&desired, &deployed) {
            Ok(same) => {
                if same {
                    debug!("Service already deployed with same config: {}", path.display());
                }
                event_sink.on_event(DeployEvent::Compared {
                    index,
                    app_id: app_id.clone(),
                    unchanged: same,
                });
                Some(same)
            }
            Err(err) => {
                event_sink.on_event(DeployEvent::ComparisonFailed {
                    index,
                    app_id: app_id.clone(),
                    error: err.to_string(),
                });
                None
            }
        };

        if options.dry_run {
            event_sink.on_event(DeployEvent::DryRunSkipped {
                index,
                app_id: app_id.clone(),
            });
            return Ok(FileOutcome {
                path: path.to_path_buf(),
                app_id,
                unchanged: same,
                pushed: false,
            });
        }

        debug!("Deploying {}", path.display());
        self.orchestrator.put_app(&app_id, &desired)?;
        event_sink.on_event(DeployEvent::Pushed {
            index,
            app_id: app_id.clone(),
        });

        Ok(FileOutcome {
            path: path.to_path_buf(),
            app_id,
            unchanged: same,
            pushed: true,
        })
    }
}

/// `globals.yml` in the directory of `path`
fn globals_path(path: &Path) -> PathBuf {
    path.parent()
        .map(|dir| dir.join(GLOBALS_FILE))
        .unwrap_or_else(|| PathBuf::from(GLOBALS_FILE))
}

/// A top-level section that must be a mapping when present
fn section<'a>(doc: &'a Mapping, name: &str, path: &Path) -> LighterResult<Option<&'a Mapping>> {
    match doc.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Mapping(mapping)) => Ok(Some(mapping)),
        Some(_) => Err(LighterError::NotAMapping {
            section: name.to_string(),
            path: path.to_path_buf(),
        }),
    }
}

fn owned_section(doc: &Mapping, name: &str, path: &Path) -> LighterResult<Mapping> {
    Ok(section(doc, name, path)?.cloned().unwrap_or_default())
}

fn app_id(config: &Mapping) -> Option<String> {
    config
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.trim_matches('/').is_empty())
        .map(str::to_string)
}
