//! Binary-to-text transport encoding.
//!
//! Standard Base64 alphabet `[A-Za-z0-9+/]` with `=` padding and no line
//! wrapping. Decoding is strict: whitespace, line breaks, URL-safe characters
//! and non-canonical padding are all rejected.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use msgseal_api::{Error, Result};

/// Encodes bytes as a single line of channel-safe text.
pub fn encode(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decodes text produced by [`encode`].
///
/// # Errors
/// Returns `Error::EncodingError` on any character outside the alphabet or
/// on malformed padding.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(text)
        .map_err(|e| Error::encoding("transport decode", e.to_string()))
}

/// Length of the text [`encode`] produces for `len` input bytes.
pub const fn encoded_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}
