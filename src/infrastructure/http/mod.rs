//! HTTP adapters
//!
//! Blocking clients for the Marathon API and Maven-style repositories.

mod marathon;
mod maven;
mod request;

pub use marathon::MarathonClient;
pub use maven::MavenRepositoryClient;
pub use request::{http_client, prepare, split_credentials, Credentials, Prepared};
