//! Marathon Client
//!
//! Reads and replaces app definitions through the Marathon v2 REST API.

use reqwest::blocking::Client;
use reqwest::Method;
use serde::Deserialize;

use super::request::prepare;
use crate::domain::ports::{Orchestrator, OrchestratorError};
use crate::domain::value_objects::Mapping;

#[derive(Deserialize)]
struct AppResponse {
    app: Mapping,
}

/// Orchestrator backed by a Marathon instance
pub struct MarathonClient {
    base_url: String,
    client: Client,
}

impl MarathonClient {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// `{base}/v2/apps/{id}?force=true`, with stray slashes trimmed
    pub fn app_url(&self, id: &str) -> String {
        format!(
            "{}/v2/apps/{}?force=true",
            self.base_url.trim_end_matches('/'),
            id.trim_matches('/')
        )
    }
}

impl Orchestrator for MarathonClient {
    fn fetch_app(&self, id: &str) -> Result<Mapping, OrchestratorError> {
        let url = self.app_url(id);
        let prepared = prepare(&self.client, Method::GET, &url).map_err(|message| {
            OrchestratorError::Request {
                url: url.clone(),
                message,
            }
        })?;
        let url = prepared.url;

        let response = prepared
            .builder
            .send()
            .map_err(|e| OrchestratorError::Request {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(OrchestratorError::Status {
                url,
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let body: AppResponse = response.json().map_err(|e| OrchestratorError::Parse {
            url: url.clone(),
            message: e.to_string(),
        })?;
        Ok(body.app)
    }

    fn put_app(&self, id: &str, app: &Mapping) -> Result<(), OrchestratorError> {
        let url = self.app_url(id);
        let prepared = prepare(&self.client, Method::PUT, &url).map_err(|message| {
            OrchestratorError::Request {
                url: url.clone(),
                message,
            }
        })?;
        let url = prepared.url;

        let response = prepared
            .builder
            .json(app)
            .send()
            .map_err(|e| OrchestratorError::Request {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(OrchestratorError::Status {
                url,
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }
        Ok(())
    }
}
