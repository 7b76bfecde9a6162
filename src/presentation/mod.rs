//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text; JSON goes through the event sink)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Text rendering of deploy results
//!
//! ## Usage
//!
//! ```ignore
//! use lighter::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case("http://marathon:8080")?;
//! let result = use_case.execute(&options);
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::Cli;
pub use factory::{create_deploy_use_case, create_event_sink};
pub use output::TextRenderer;
