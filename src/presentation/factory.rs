//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::DeployUseCase;
use crate::domain::ports::DeployEventSink;
use crate::infrastructure::{
    http_client, JsonEventSink, LogEventSink, MarathonClient, MavenRepositoryClient,
    ProbingKeyEncoding, YamlDocumentLoader,
};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase =
    DeployUseCase<YamlDocumentLoader, MavenRepositoryClient, MarathonClient, ProbingKeyEncoding>;

/// Create a deploy use case talking to the Marathon at `marathon_url`
///
/// The registry and Marathon clients share one HTTP connection pool.
pub fn create_deploy_use_case(
    marathon_url: &str,
) -> Result<ConcreteDeployUseCase, reqwest::Error> {
    let client = http_client()?;

    Ok(DeployUseCase::new(
        YamlDocumentLoader,
        MavenRepositoryClient::new(client.clone()),
        MarathonClient::new(marathon_url, client),
        ProbingKeyEncoding,
    ))
}

/// NDJSON on stdout for `--json`, log lines on stderr otherwise
pub fn create_event_sink(json: bool) -> Arc<dyn DeployEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(LogEventSink)
    }
}
