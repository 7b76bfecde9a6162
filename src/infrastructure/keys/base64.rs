//! Base64 key encoding (standard alphabet, padded)

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::domain::ports::{DecodeError, KeyEncoding};

#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Encoding;

impl KeyEncoding for Base64Encoding {
    fn encode(&self, raw: &[u8]) -> String {
        STANDARD.encode(raw)
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        STANDARD
            .decode(input.trim())
            .map_err(|e| DecodeError::InvalidBase64 {
                message: e.to_string(),
            })
    }
}
