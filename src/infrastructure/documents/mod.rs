//! Document loaders

mod yaml;

pub use yaml::{parse_document, YamlDocumentLoader};
