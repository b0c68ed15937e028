//! Conversion between text and bytes under a configurable encoding.

use crate::core::config::{ErrorPolicy, TextEncoding};
use crate::encoders::errors::CodecError;

/// Substituted for unencodable characters under [`ErrorPolicy::Replace`].
const ENCODE_REPLACEMENT: u8 = b'?';

/// Converts text to bytes and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBytesAdapter {
    encoding: TextEncoding,
    errors: ErrorPolicy,
}

impl TextBytesAdapter {
    pub fn new(encoding: TextEncoding, errors: ErrorPolicy) -> Self {
        Self { encoding, errors }
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub fn errors(&self) -> ErrorPolicy {
        self.errors
    }

    /// Encodes `text` into its byte representation.
    ///
    /// UTF-8 and UTF-16 can represent every string. ASCII and Latin-1 apply
    /// the error policy to characters above their range.
    pub fn to_bytes(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        match self.encoding {
            TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
            TextEncoding::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
            TextEncoding::Utf16Be => Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
            TextEncoding::Ascii => self.encode_single_byte(text, 0x7F),
            TextEncoding::Latin1 => self.encode_single_byte(text, 0xFF),
        }
    }

    /// Decodes `bytes` back into text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::DecodeError`] with the byte offset of the first
    /// invalid sequence when the policy is strict.
    pub fn to_text(&self, bytes: &[u8]) -> Result<String, CodecError> {
        match self.encoding {
            TextEncoding::Utf8 => self.decode_utf8(bytes),
            TextEncoding::Utf16Le => self.decode_utf16(bytes, u16::from_le_bytes),
            TextEncoding::Utf16Be => self.decode_utf16(bytes, u16::from_be_bytes),
            TextEncoding::Ascii => {
                let mut result = String::with_capacity(bytes.len());
                for (offset, &byte) in bytes.iter().enumerate() {
                    if byte.is_ascii() {
                        result.push(byte as char);
                    } else {
                        self.invalid_sequence(&mut result, offset)?;
                    }
                }
                Ok(result)
            }
            // Every byte is a valid Latin-1 code point.
            TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }

    fn encode_single_byte(&self, text: &str, max: u32) -> Result<Vec<u8>, CodecError> {
        let mut result = Vec::with_capacity(text.len());
        for (position, c) in text.chars().enumerate() {
            if (c as u32) <= max {
                result.push(c as u32 as u8);
                continue;
            }
            match self.errors {
                ErrorPolicy::Strict => {
                    return Err(CodecError::EncodeError {
                        character: c,
                        position,
                        encoding: self.encoding,
                    });
                }
                ErrorPolicy::Replace => result.push(ENCODE_REPLACEMENT),
                ErrorPolicy::Ignore => {}
            }
        }
        Ok(result)
    }

    fn decode_utf8(&self, bytes: &[u8]) -> Result<String, CodecError> {
        if let Ok(text) = std::str::from_utf8(bytes) {
            return Ok(text.to_owned());
        }

        let mut result = String::with_capacity(bytes.len());
        let mut offset = 0;
        for chunk in bytes.utf8_chunks() {
            result.push_str(chunk.valid());
            offset += chunk.valid().len();
            if !chunk.invalid().is_empty() {
                self.invalid_sequence(&mut result, offset)?;
                offset += chunk.invalid().len();
            }
        }
        Ok(result)
    }

    fn decode_utf16(&self, bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String, CodecError> {
        let pairs = bytes.chunks_exact(2);
        let trailing = pairs.remainder();
        let units = pairs.map(|pair| unit([pair[0], pair[1]]));

        let mut result = String::with_capacity(bytes.len() / 2);
        let mut unit_index = 0;
        for decoded in char::decode_utf16(units) {
            match decoded {
                Ok(c) => {
                    result.push(c);
                    unit_index += c.len_utf16();
                }
                Err(_) => {
                    self.invalid_sequence(&mut result, unit_index * 2)?;
                    unit_index += 1;
                }
            }
        }

        // An odd byte count leaves half a code unit behind.
        if !trailing.is_empty() {
            self.invalid_sequence(&mut result, bytes.len() - 1)?;
        }
        Ok(result)
    }

    fn invalid_sequence(&self, out: &mut String, offset: usize) -> Result<(), CodecError> {
        match self.errors {
            ErrorPolicy::Strict => Err(CodecError::DecodeError {
                encoding: self.encoding,
                offset,
            }),
            ErrorPolicy::Replace => {
                out.push(char::REPLACEMENT_CHARACTER);
                Ok(())
            }
            ErrorPolicy::Ignore => Ok(()),
        }
    }
}
