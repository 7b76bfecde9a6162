//! Deploy Module
//!
//! Orchestrates the deployment flow for lighter.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`, `BatchPolicy`)
//! - `result` - Result types (`DeployResult`, `FileOutcome`, `FileFailure`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use lighter::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(loader, registry, orchestrator, encoding);
//! let result = use_case.execute(&DeployOptions::new(files));
//! ```

mod options;
mod result;
mod use_case;

pub use options::{BatchPolicy, DeployOptions};
pub use result::{DeployResult, FileFailure, FileOutcome};
pub use use_case::{DeployUseCase, ResolvedSpec, GLOBALS_FILE};
