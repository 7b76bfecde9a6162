//! Maven Coordinates Value Object
//!
//! Identifies the JSON app descriptor published next to a build artifact.

use std::fmt;

use super::value::{Mapping, Value};

/// Coordinates of an artifact descriptor in a Maven-style repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenCoordinates {
    pub repository: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

/// A required coordinate was missing or not a scalar
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("maven section is missing '{field}'")]
pub struct MissingCoordinate {
    pub field: &'static str,
}

impl MavenCoordinates {
    /// Read coordinates from a resolved `maven` section
    pub fn from_mapping(maven: &Mapping) -> Result<Self, MissingCoordinate> {
        Ok(Self {
            repository: field(maven, "repository")?,
            group_id: field(maven, "groupid")?,
            artifact_id: field(maven, "artifactid")?,
            version: field(maven, "version")?,
        })
    }

    /// `{repository}/{group/path}/{artifact}/{version}/{artifact}-{version}.json`
    pub fn descriptor_url(&self) -> String {
        format!(
            "{}/{}/{}/{}/{}-{}.json",
            self.repository.trim_end_matches('/'),
            self.group_id.replace('.', "/"),
            self.artifact_id,
            self.version,
            self.artifact_id,
            self.version
        )
    }
}

impl fmt::Display for MavenCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

fn field(maven: &Mapping, name: &'static str) -> Result<String, MissingCoordinate> {
    match maven.get(name).map(Value::raw) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        // YAML happily reads `version: 1.0` as a number
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(MissingCoordinate { field: name }),
    }
}
