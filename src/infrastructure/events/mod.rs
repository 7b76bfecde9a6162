//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - LogEventSink: progress through `tracing`
//! - JsonEventSink: NDJSON output for CI/automation

mod json;
mod log;

pub use json::JsonEventSink;
pub use log::LogEventSink;
