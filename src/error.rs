//! Error types for lighter
//!
//! Every port and service carries its own `thiserror` enum; `LighterError`
//! aggregates them for the deploy use case.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{DecodeError, DocumentError, OrchestratorError, RegistryError};
use crate::domain::services::{ComparisonError, MergeError};
use crate::domain::value_objects::MissingCoordinate;

/// Result type alias for lighter operations
pub type LighterResult<T> = Result<T, LighterError>;

/// Main error type for lighter operations
#[derive(Error, Debug)]
pub enum LighterError {
    /// Layer merge failed
    #[error(transparent)]
    Merge(#[from] MergeError),

    /// Desired and deployed state could not be compared
    #[error(transparent)]
    Comparison(#[from] ComparisonError),

    /// Master public key could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Service or globals file could not be loaded
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Artifact descriptor could not be fetched
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Orchestrator request failed
    #[error(transparent)]
    Orchestrator(#[from] OrchestratorError),

    /// Merged maven section is incomplete
    #[error("{source} in {path}")]
    Coordinates {
        path: PathBuf,
        #[source]
        source: MissingCoordinate,
    },

    /// Resolved config has no usable `id`
    #[error("resolved config for {path} has no string 'id' field")]
    MissingAppId { path: PathBuf },

    /// A section that must be a mapping is something else
    #[error("'{section}' in {path} must be a mapping")]
    NotAMapping { section: String, path: PathBuf },
}
