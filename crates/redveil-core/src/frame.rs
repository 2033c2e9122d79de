//! Conversion between a text message and its terminator-framed byte stream.
//!
//! Each character occupies exactly one byte (its Unicode code point, which
//! must be in `0..=255`), followed by the [`TERMINATOR`] sentinel. On the
//! wire every byte is spelled out MSB-first, one bit per pixel.

use crate::error::Error;
use crate::result::Result;

/// End-of-message sentinel, a full byte of set bits.
pub const TERMINATOR: u8 = 0xFF;

/// Frames `message` as the byte stream that goes into the carrier.
///
/// Characters above `U+00FF` cannot be represented in the fixed 8-bit frame
/// and are rejected before any pixel is touched.
///
/// Note that `'\u{ff}'` itself is accepted but spells the same bit pattern
/// as the terminator, so everything after it is lost on extraction.
pub fn serialize(message: &str) -> Result<Vec<u8>> {
    let mut framed = Vec::with_capacity(message.len() + 1);
    for ch in message.chars() {
        let code = u32::from(ch);
        if code > u32::from(u8::MAX) {
            return Err(Error::UnencodableCharacter { ch });
        }
        framed.push(code as u8);
    }
    framed.push(TERMINATOR);
    Ok(framed)
}

/// Reads the message back out of a recovered byte stream.
///
/// Bytes up to the first [`TERMINATOR`] become characters. A stream without
/// any terminator decodes in full; callers are expected to have dropped any
/// trailing incomplete 8-bit group already.
pub fn deserialize(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take_while(|&&b| b != TERMINATOR)
        .map(|&b| char::from(b))
        .collect()
}
