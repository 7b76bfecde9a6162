//! YAML Document Loader
//!
//! Reads service specification files and `globals.yml` from disk.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::ports::{DocumentError, DocumentLoader};
use crate::domain::value_objects::{Mapping, Value};

/// Loads specification files written in YAML (JSON works too)
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlDocumentLoader;

impl DocumentLoader for YamlDocumentLoader {
    fn load(&self, path: &Path) -> Result<Mapping, DocumentError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DocumentError::NotFound {
                path: path.to_path_buf(),
            },
            _ => DocumentError::Unreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })?;

        parse_document(&content, path)
    }
}

/// Parse YAML text into a top-level mapping
///
/// An empty document is an empty mapping.
pub fn parse_document(content: &str, path: &Path) -> Result<Mapping, DocumentError> {
    let value: Value = serde_yaml_ng::from_str(content).map_err(|e| DocumentError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(DocumentError::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}
