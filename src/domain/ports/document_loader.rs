//! DocumentLoader port
//!
//! Loads a specification file into a mapping layer.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::Mapping;

pub trait DocumentLoader {
    fn load(&self, path: &Path) -> Result<Mapping, DocumentError>;
}

impl<T: DocumentLoader + ?Sized> DocumentLoader for &T {
    fn load(&self, path: &Path) -> Result<Mapping, DocumentError> {
        (**self).load(path)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("specification file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read {path}: {message}")]
    Unreadable { path: PathBuf, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("top level of {path} must be a mapping")]
    NotAMapping { path: PathBuf },
}
