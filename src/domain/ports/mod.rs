//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod artifact_registry;
pub mod deploy_events;
pub mod document_loader;
pub mod key_encoding;
pub mod orchestrator;

pub use artifact_registry::{ArtifactRegistry, RegistryError};
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use document_loader::{DocumentError, DocumentLoader};
pub use key_encoding::{DecodeError, KeyEncoding};
pub use orchestrator::{Orchestrator, OrchestratorError};
