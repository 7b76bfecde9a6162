//! KeyEncoding port
//!
//! Turns raw key bytes into text for the `env` block and back. The master
//! key arrives either as base64 text or as a path to a PEM file; the
//! infrastructure layer decides which.

use std::path::PathBuf;

pub trait KeyEncoding {
    /// Encode raw key bytes as text
    fn encode(&self, raw: &[u8]) -> String;

    /// Decode text (or whatever it points at) into raw key bytes
    fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError>;
}

impl<T: KeyEncoding + ?Sized> KeyEncoding for &T {
    fn encode(&self, raw: &[u8]) -> String {
        (**self).encode(raw)
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        (**self).decode(input)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("secretary.url is set but secretary.master.publickey is missing\n  → Fix: Add the environment's master public key (base64 or PEM file path)")]
    MissingMasterKey,

    #[error("failed to read key file {path}: {message}")]
    Unreadable { path: PathBuf, message: String },

    #[error("failed to parse PEM file {path} (is the path readable and BEGIN/END labels matching?)")]
    MalformedPem { path: PathBuf },

    #[error("key is not valid base64: {message}")]
    InvalidBase64 { message: String },

    #[error("decoded key is {length} bytes, expected {expected}")]
    InvalidKeyLength { length: usize, expected: usize },
}
