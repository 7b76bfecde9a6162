//! ArtifactRegistry port
//!
//! Fetches the JSON app descriptor published alongside a build artifact.

use crate::domain::value_objects::{Mapping, MavenCoordinates};

pub trait ArtifactRegistry {
    fn fetch_descriptor(&self, coordinates: &MavenCoordinates) -> Result<Mapping, RegistryError>;
}

impl<T: ArtifactRegistry + ?Sized> ArtifactRegistry for &T {
    fn fetch_descriptor(&self, coordinates: &MavenCoordinates) -> Result<Mapping, RegistryError> {
        (**self).fetch_descriptor(coordinates)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("failed to fetch {url}: {message}")]
    Request { url: String, message: String },

    #[error("registry returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("descriptor at {url} is not valid JSON: {message}")]
    Parse { url: String, message: String },

    #[error("descriptor at {url} must be a JSON object")]
    NotAMapping { url: String },
}
