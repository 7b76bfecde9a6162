//! PEM file key encoding
//!
//! Reads a single `-----BEGIN <LABEL>-----` block whose END label matches,
//! and base64-decodes its body.

use std::fs;
use std::path::Path;

use super::base64::Base64Encoding;
use crate::domain::ports::{DecodeError, KeyEncoding};

const BEGIN: &str = "-----BEGIN ";
const END: &str = "-----END ";
const DASHES: &str = "-----";

#[derive(Debug, Clone, Copy, Default)]
pub struct PemFileEncoding;

impl KeyEncoding for PemFileEncoding {
    fn encode(&self, raw: &[u8]) -> String {
        Base64Encoding.encode(raw)
    }

    /// `input` is the path of the PEM file
    fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        let path = Path::new(input);
        let contents = fs::read_to_string(path).map_err(|e| DecodeError::Unreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let body = parse_pem(&contents).ok_or_else(|| DecodeError::MalformedPem {
            path: path.to_path_buf(),
        })?;
        Base64Encoding.decode(&body)
    }
}

/// Body of the first PEM block, with line breaks removed
///
/// `None` when there is no block, the END label differs from the BEGIN
/// label, or the body is empty.
pub fn parse_pem(contents: &str) -> Option<String> {
    let mut lines = contents.lines().map(str::trim).skip_while(|l| l.is_empty());

    let label = lines
        .next()?
        .strip_prefix(BEGIN)?
        .strip_suffix(DASHES)?
        .to_string();
    if label.is_empty() {
        return None;
    }

    let mut body = String::new();
    for line in lines {
        if let Some(rest) = line.strip_prefix(END) {
            return (rest.strip_suffix(DASHES)? == label && !body.is_empty()).then_some(body);
        }
        body.push_str(line);
    }
    None
}
