//! Layer entity
//!
//! A layer is one ordered source of configuration values. Layers are merged
//! weakest first; see `services::layer_merger`.

use std::fmt;

use crate::domain::value_objects::Mapping;

/// Where a layer's values came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerOrigin {
    /// JSON descriptor fetched from the artifact registry
    Artifact,
    /// The service specification file
    Service,
    /// The sibling `globals.yml`
    Globals,
}

impl fmt::Display for LayerOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LayerOrigin::Artifact => "artifact",
            LayerOrigin::Service => "service",
            LayerOrigin::Globals => "globals",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigLayer {
    pub name: String,
    pub origin: LayerOrigin,
    pub values: Mapping,
}

impl ConfigLayer {
    pub fn new(name: impl Into<String>, origin: LayerOrigin) -> Self {
        Self {
            name: name.into(),
            origin,
            values: Mapping::new(),
        }
    }

    pub fn with_values(mut self, values: Mapping) -> Self {
        self.values = values;
        self
    }

    /// Qualified name for diagnostics, e.g. `service.override`
    pub fn label(&self) -> String {
        format!("{}.{}", self.origin, self.name)
    }
}
