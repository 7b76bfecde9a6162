//! Maven Repository Client
//!
//! Fetches the JSON app descriptor published next to an artifact. Besides
//! HTTP(S), repositories may live on disk as `file:///abs/path` or
//! `file://./relative/path`.

use std::fs;
use std::path::PathBuf;

use reqwest::blocking::Client;
use reqwest::Method;
use tracing::debug;

use super::request::prepare;
use crate::domain::ports::{ArtifactRegistry, RegistryError};
use crate::domain::value_objects::{Mapping, MavenCoordinates, Value};

pub struct MavenRepositoryClient {
    client: Client,
}

impl MavenRepositoryClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn read_local(&self, url: &str, path: PathBuf) -> Result<String, RegistryError> {
        debug!("Reading descriptor from {}", path.display());
        fs::read_to_string(&path).map_err(|e| RegistryError::Request {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    fn read_remote(&self, url: &str) -> Result<String, RegistryError> {
        let prepared =
            prepare(&self.client, Method::GET, url).map_err(|message| RegistryError::Request {
                url: url.to_string(),
                message,
            })?;
        let url = prepared.url;

        let response = prepared
            .builder
            .send()
            .map_err(|e| RegistryError::Request {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response.text().map_err(|e| RegistryError::Request {
            url,
            message: e.to_string(),
        })
    }
}

impl ArtifactRegistry for MavenRepositoryClient {
    fn fetch_descriptor(&self, coordinates: &MavenCoordinates) -> Result<Mapping, RegistryError> {
        let url = coordinates.descriptor_url();
        let body = match local_path(&url) {
            Some(path) => self.read_local(&url, path)?,
            None => self.read_remote(&url)?,
        };
        parse_descriptor(&url, &body)
    }
}

/// Filesystem path of a `file://` URL; relative paths are kept relative
fn local_path(url: &str) -> Option<PathBuf> {
    url.strip_prefix("file://").map(PathBuf::from)
}

fn parse_descriptor(url: &str, body: &str) -> Result<Mapping, RegistryError> {
    let value: Value = serde_json::from_str(body).map_err(|e| RegistryError::Parse {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(RegistryError::NotAMapping {
            url: url.to_string(),
        }),
    }
}
