//! Key encodings
//!
//! Master public keys are configured either inline as base64 or as the path
//! of a PEM file. `ProbingKeyEncoding` picks the decoder by checking whether
//! the input names an existing file.

mod base64;
mod pem;

use std::path::Path;

use crate::domain::ports::{DecodeError, KeyEncoding};

pub use self::base64::Base64Encoding;
pub use self::pem::{parse_pem, PemFileEncoding};

/// Base64 for encoding; PEM file or inline base64 for decoding
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbingKeyEncoding;

impl KeyEncoding for ProbingKeyEncoding {
    fn encode(&self, raw: &[u8]) -> String {
        Base64Encoding.encode(raw)
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        if Path::new(input).exists() {
            PemFileEncoding.decode(input)
        } else {
            Base64Encoding.decode(input)
        }
    }
}
