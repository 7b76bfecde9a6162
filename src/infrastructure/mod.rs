//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `documents/` - YAML specification file loader
//! - `http/` - Marathon and Maven repository clients
//! - `keys/` - Base64 and PEM key encodings
//! - `events/` - Deploy event sinks (log, NDJSON)

pub mod documents;
pub mod events;
pub mod http;
pub mod keys;

// Re-export for convenience
pub use documents::YamlDocumentLoader;
pub use events::{JsonEventSink, LogEventSink};
pub use http::{http_client, MarathonClient, MavenRepositoryClient};
pub use keys::{Base64Encoding, PemFileEncoding, ProbingKeyEncoding};
