//! URL-safe base64 without padding, as embedded after a code prefix.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::{CodecError, Result};

pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decodes unpadded base64url. Padding, characters outside the URL-safe
/// alphabet and impossible lengths are rejected.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(text)
        .map_err(|e| CodecError::invalid(format!("base64url decode failed: {}", e)))
}
