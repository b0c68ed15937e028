//! URL-safe base64 (RFC 4648 §5) without padding.
//!
//! Encoding packs bits six at a time into the web-safe alphabet and never
//! emits `=`. Decoding restores the padding from the length before unpacking,
//! so a length of 1 mod 4 is rejected up front.

use crate::encoders::errors::{CodecError, MalformedToken};
use std::borrow::Cow;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
const PADDING: char = '=';
const BITS_PER_CHAR: usize = 6;
const INVALID: u8 = 0xFF;

const DECODE_TABLE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns true if `c` belongs to the web-safe alphabet.
pub fn is_websafe(c: char) -> bool {
    c.is_ascii() && DECODE_TABLE[c as usize] != INVALID
}

/// Encodes bytes as unpadded web-safe base64.
pub fn encode(data: &[u8]) -> String {
    let mut result = String::with_capacity((data.len() * 8).div_ceil(BITS_PER_CHAR));

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for &byte in data {
        bit_buffer = (bit_buffer << 8) | (byte as u32);
        bits_in_buffer += 8;

        while bits_in_buffer >= BITS_PER_CHAR {
            bits_in_buffer -= BITS_PER_CHAR;
            let index = ((bit_buffer >> bits_in_buffer) & 0x3F) as usize;
            result.push(ALPHABET[index] as char);
        }
    }

    // Handle remaining bits
    if bits_in_buffer > 0 {
        let index = ((bit_buffer << (BITS_PER_CHAR - bits_in_buffer)) & 0x3F) as usize;
        result.push(ALPHABET[index] as char);
    }

    result
}

/// Appends the `=` characters a padded encoder would have produced.
///
/// A remainder of 0, 2 or 3 mod 4 maps to 0, 2 or 1 padding characters.
/// A remainder of 1 leaves two bits dangling and cannot be repaired.
pub fn restore_padding(encoded: &str) -> Result<Cow<'_, str>, MalformedToken> {
    let length = encoded.chars().count();
    match length % 4 {
        0 => Ok(Cow::Borrowed(encoded)),
        2 => Ok(Cow::Owned(format!("{encoded}{PADDING}{PADDING}"))),
        3 => Ok(Cow::Owned(format!("{encoded}{PADDING}"))),
        _ => Err(MalformedToken::InvalidLength { length }),
    }
}

/// Decodes unpadded web-safe base64.
///
/// # Errors
///
/// Returns [`CodecError::MalformedToken`] if the input contains padding,
/// a character outside the alphabet, or has an impossible length.
pub fn decode(encoded: &str) -> Result<Vec<u8>, CodecError> {
    if let Some(position) = encoded.chars().position(|c| c == PADDING) {
        return Err(MalformedToken::UnexpectedPadding { position }.into());
    }

    let padded = restore_padding(encoded)?;

    let mut result = Vec::with_capacity(padded.len() / 4 * 3);
    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for (position, c) in padded.chars().enumerate() {
        if c == PADDING {
            break;
        }

        if !is_websafe(c) {
            return Err(MalformedToken::InvalidCharacter {
                character: c,
                position,
            }
            .into());
        }
        let digit = DECODE_TABLE[c as usize];

        bit_buffer = (bit_buffer << BITS_PER_CHAR) | (digit as u32);
        bits_in_buffer += BITS_PER_CHAR;

        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push(((bit_buffer >> bits_in_buffer) & 0xFF) as u8);
        }
    }

    Ok(result)
}
