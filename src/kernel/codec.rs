//! Reversible text <-> URL-fragment encoding for workspace state.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use super::error::CodecError;

pub const STATE_MARKER: char = '#';

const ZSTD_LEVEL: i32 = 19;

pub fn encode(text: &str) -> Result<String, CodecError> {
    let compressed = zstd::stream::encode_all(text.as_bytes(), ZSTD_LEVEL)?;
    Ok(URL_SAFE_NO_PAD.encode(compressed))
}

pub fn decode(encoded: &str) -> Result<String, CodecError> {
    let compressed = URL_SAFE_NO_PAD.decode(encoded.trim())?;
    let bytes = zstd::stream::decode_all(compressed.as_slice())?;
    Ok(String::from_utf8(bytes)?)
}

pub fn encode_fragment(text: &str) -> Result<String, CodecError> {
    Ok(format!("{STATE_MARKER}{}", encode(text)?))
}

/// Accepts input with or without the leading marker.
pub fn decode_fragment(state: &str) -> Result<String, CodecError> {
    decode(state.strip_prefix(STATE_MARKER).unwrap_or(state))
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/codec.rs"]
mod tests;
