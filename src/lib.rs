//! Lighter - Marathon deployment tool
//!
//! Lighter resolves an app definition from layered configuration (an
//! artifact descriptor published to a Maven repository, a service file and
//! shared globals), decides whether it differs from what Marathon is
//! running, and injects freshly generated deploy keys that do not count as
//! a change on every run.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BatchPolicy, DeployOptions, DeployResult, DeployUseCase};
pub use domain::services::{merge_mappings, unchanged, Provisioning, SecretProvisioner};
pub use domain::value_objects::{Mapping, Value, VolatileValue};
pub use error::{LighterError, LighterResult};
