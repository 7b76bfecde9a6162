//! Secret Envelope Value Object
//!
//! An already-encrypted payload of the form `ENC[NACL,<payload>]`. Envelopes
//! are recognized so they can be reported; they are never decrypted here.

use std::fmt;

use super::value::Value;

/// A recognized encrypted secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretEnvelope(String);

impl SecretEnvelope {
    pub const PREFIX: &'static str = "ENC[NACL,";
    pub const SUFFIX: &'static str = "]";

    /// Recognize an envelope string
    pub fn recognize(text: &str) -> Option<Self> {
        Self::is_envelope(text).then(|| Self(text.to_string()))
    }

    pub fn is_envelope(text: &str) -> bool {
        text.len() >= Self::PREFIX.len() + Self::SUFFIX.len()
            && text.starts_with(Self::PREFIX)
            && text.ends_with(Self::SUFFIX)
    }

    /// The opaque payload between the markers
    pub fn payload(&self) -> &str {
        &self.0[Self::PREFIX.len()..self.0.len() - Self::SUFFIX.len()]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SecretEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Paths of every envelope string inside a value, in key order
pub fn find_envelopes(value: &Value) -> Vec<String> {
    let mut found = Vec::new();
    collect(value, String::new(), &mut found);
    found
}

fn collect(value: &Value, path: String, found: &mut Vec<String>) {
    match value.raw() {
        Value::String(s) if SecretEnvelope::is_envelope(s) => found.push(path),
        Value::Mapping(map) => {
            for (key, child) in map {
                collect(child, format!("{path}/{key}"), found);
            }
        }
        Value::Sequence(items) => {
            for (index, child) in items.iter().enumerate() {
                collect(child, format!("{path}[{index}]"), found);
            }
        }
        _ => {}
    }
}
