//! Text-safe encoding of object payloads
//!
//! Payloads are stored as standard, padded base64 so they fit a text column on every store.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub fn encode(content: &[u8]) -> String {
    STANDARD.encode(content)
}

pub fn decode(encoded: impl AsRef<[u8]>) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(encoded)
}
