//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Resolves, compares and pushes each specification file

pub mod deploy;

pub use deploy::{
    BatchPolicy, DeployOptions, DeployResult, DeployUseCase, FileFailure, FileOutcome,
    ResolvedSpec, GLOBALS_FILE,
};
