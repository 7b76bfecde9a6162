//! Common test utilities for lighter integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated workspace with a file:// Maven repository
//! - `StubMarathon`: In-process HTTP server speaking enough of the Marathon API
//! - Fixtures: Reusable specification file contents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod marathon;

pub use env::*;
pub use fixtures::*;
pub use marathon::*;
