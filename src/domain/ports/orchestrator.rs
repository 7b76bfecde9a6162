//! Orchestrator port
//!
//! Reads and replaces app definitions on the container orchestrator.

use crate::domain::value_objects::Mapping;

pub trait Orchestrator {
    /// Current definition of the app, as recorded by the orchestrator
    fn fetch_app(&self, id: &str) -> Result<Mapping, OrchestratorError>;

    /// Replace the app definition
    fn put_app(&self, id: &str, app: &Mapping) -> Result<(), OrchestratorError>;
}

impl<T: Orchestrator + ?Sized> Orchestrator for &T {
    fn fetch_app(&self, id: &str) -> Result<Mapping, OrchestratorError> {
        (**self).fetch_app(id)
    }

    fn put_app(&self, id: &str, app: &Mapping) -> Result<(), OrchestratorError> {
        (**self).put_app(id, app)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OrchestratorError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("orchestrator returned HTTP {status} for {url}: {body}")]
    Status { url: String, status: u16, body: String },

    #[error("unexpected response from {url}: {message}")]
    Parse { url: String, message: String },
}
