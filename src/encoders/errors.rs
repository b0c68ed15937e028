use crate::core::config::TextEncoding;

/// Errors produced by the codec and its building blocks.
///
/// Every failure is local and deterministic: the transforms never retry and
/// never return partial output.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// A value handed to the codec is not text (or not a byte sequence).
    #[error("expected {expected}, got {found}")]
    InvalidInputType {
        expected: &'static str,
        found: String,
    },

    /// A character cannot be represented in the configured text encoding.
    #[error("cannot encode {character:?} at position {position} as {encoding}")]
    EncodeError {
        character: char,
        position: usize,
        encoding: TextEncoding,
    },

    /// Bytes are not valid under the configured text encoding.
    #[error("invalid {encoding} byte sequence at offset {offset}")]
    DecodeError { encoding: TextEncoding, offset: usize },

    /// Compressing would not make the payload strictly shorter.
    #[error(
        "compression is ineffective: {compressed_len} compressed bytes vs {original_len} original bytes"
    )]
    CompressionIneffective {
        original_len: usize,
        compressed_len: usize,
    },

    /// The payload behind a compression marker is not a valid zlib stream.
    #[error("cannot decompress payload: {0}")]
    DecompressionError(String),

    /// The deflate writer itself failed.
    #[error("compressor failed: {0}")]
    Compression(#[source] std::io::Error),

    /// The token is not well-formed web-safe base64.
    #[error(transparent)]
    MalformedToken(#[from] MalformedToken),

    /// The engine was configured with an unknown or out-of-range setting.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Stable discriminant of a [`CodecError`], convenient for matching and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInputType,
    EncodeError,
    DecodeError,
    CompressionIneffective,
    DecompressionError,
    Compression,
    MalformedToken,
    InvalidConfiguration,
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::InvalidInputType { .. } => ErrorKind::InvalidInputType,
            CodecError::EncodeError { .. } => ErrorKind::EncodeError,
            CodecError::DecodeError { .. } => ErrorKind::DecodeError,
            CodecError::CompressionIneffective { .. } => ErrorKind::CompressionIneffective,
            CodecError::DecompressionError(_) => ErrorKind::DecompressionError,
            CodecError::Compression(_) => ErrorKind::Compression,
            CodecError::MalformedToken(_) => ErrorKind::MalformedToken,
            CodecError::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
        }
    }

    /// Create an InvalidInputType error for a value that should have been text.
    pub fn not_text(found: impl Into<String>) -> Self {
        CodecError::InvalidInputType {
            expected: "text",
            found: found.into(),
        }
    }
}

/// Ways a token body can fail web-safe base64 validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedToken {
    /// A stripped length of 1 mod 4 cannot come from any byte sequence.
    #[error(
        "malformed token: {length} characters cannot be unpadded base64\n\nhint: the token looks truncated or has one stray character at the end"
    )]
    InvalidLength { length: usize },

    /// A character outside `A-Z a-z 0-9 - _`.
    #[error(
        "malformed token: invalid character {character:?} at position {position}\n\nhint: valid characters: A-Z a-z 0-9 - _"
    )]
    InvalidCharacter { character: char, position: usize },

    /// Tokens never carry padding; an `=` means the input was not produced here.
    #[error(
        "malformed token: unexpected padding at position {position}\n\nhint: remove trailing '=' characters"
    )]
    UnexpectedPadding { position: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let err = CodecError::DecompressionError("corrupt deflate stream".into());
        assert_eq!(err.kind(), ErrorKind::DecompressionError);

        let err: CodecError = MalformedToken::InvalidLength { length: 5 }.into();
        assert_eq!(err.kind(), ErrorKind::MalformedToken);
    }

    #[test]
    fn test_not_text_message() {
        let err = CodecError::not_text("non-UTF-8 argument");
        assert_eq!(err.kind(), ErrorKind::InvalidInputType);
        assert_eq!(err.to_string(), "expected text, got non-UTF-8 argument");
    }

    #[test]
    fn test_malformed_token_message_has_hint() {
        let err = MalformedToken::InvalidCharacter {
            character: '+',
            position: 3,
        };
        let message = err.to_string();
        assert!(message.contains("position 3"));
        assert!(message.contains("hint:"));
    }
}
