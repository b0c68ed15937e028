use crate::core::config::{EncoderConfig, ErrorPolicy, TextEncoding};
use crate::encoders::errors::CodecError;
use crate::encoders::marker::Format;
use crate::encoders::text::TextBytesAdapter;
use crate::encoders::websafe;
use crate::features::compression::{Compressed, Compressor};
use std::fmt;

/// Reversible text-to-token codec.
///
/// `encode` runs text → bytes → (zlib) → web-safe base64 → marker, and
/// `decode` runs the same stages in reverse. The engine holds only
/// immutable settings, so a single instance can be shared across threads.
///
/// # Example
///
/// ```
/// use web_encoder::WebEncoder;
///
/// let encoder = WebEncoder::new();
/// let token = encoder.encode(&"a".repeat(25), true).unwrap();
/// assert_eq!(token, ".eJxLTMQBAHs-CXo");
/// assert_eq!(encoder.decode(&token).unwrap(), "a".repeat(25));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WebEncoder {
    adapter: TextBytesAdapter,
    compressor: Compressor,
}

impl WebEncoder {
    /// Creates an engine with UTF-8, strict errors and the default level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new builder for constructing a WebEncoder.
    pub fn builder() -> WebEncoderBuilder {
        WebEncoderBuilder::new()
    }

    /// Creates an engine from a resolved configuration.
    pub fn with_config(config: EncoderConfig) -> Result<Self, CodecError> {
        config.validate()?;
        Ok(Self {
            adapter: TextBytesAdapter::new(config.encoding, config.errors),
            compressor: Compressor::new(config.level)?,
        })
    }

    pub fn config(&self) -> EncoderConfig {
        EncoderConfig {
            encoding: self.adapter.encoding(),
            errors: self.adapter.errors(),
            level: self.compressor.level(),
        }
    }

    /// Encodes `text` into a token.
    ///
    /// When `compress` is set the zlib form is used only if it is strictly
    /// shorter than the plain bytes; otherwise the plain form is emitted
    /// without a marker.
    pub fn encode(&self, text: &str, compress: bool) -> Result<String, CodecError> {
        let bytes = self.adapter.to_bytes(text)?;

        let (format, payload) = if compress {
            match self.compressor.compress(&bytes)? {
                Compressed::Smaller(compressed) => {
                    tracing::trace!(
                        original = bytes.len(),
                        compressed = compressed.len(),
                        "using compressed payload"
                    );
                    (Format::Compressed, compressed)
                }
                Compressed::Ineffective {
                    original_len,
                    compressed_len,
                } => {
                    tracing::debug!(
                        original_len,
                        compressed_len,
                        "compression ineffective, falling back to plain payload"
                    );
                    (Format::Plain, bytes)
                }
            }
        } else {
            (Format::Plain, bytes)
        };

        Ok(format.apply(&websafe::encode(&payload)))
    }

    /// Decodes a token produced by [`encode`](Self::encode).
    ///
    /// # Errors
    ///
    /// - [`CodecError::MalformedToken`] if the body is not web-safe base64
    /// - [`CodecError::DecompressionError`] if a marked body is not a zlib stream
    /// - [`CodecError::DecodeError`] if the bytes are not valid text under a
    ///   strict policy
    pub fn decode(&self, token: &str) -> Result<String, CodecError> {
        let (format, body) = Format::split(token);
        let raw = websafe::decode(body)?;

        let bytes = if format.is_compressed() {
            tracing::trace!(compressed = raw.len(), "inflating marked payload");
            self.compressor.decompress(&raw)?
        } else {
            raw
        };

        self.adapter.to_text(&bytes)
    }
}

impl fmt::Display for WebEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WebEncoder(encoding={}, errors={}, level={})",
            self.adapter.encoding(),
            self.adapter.errors(),
            self.compressor.level()
        )
    }
}

/// Builder for [`WebEncoder`].
#[derive(Debug, Default)]
pub struct WebEncoderBuilder {
    encoding: Option<TextEncoding>,
    errors: Option<ErrorPolicy>,
    errors_name: Option<String>,
    level: Option<u32>,
}

impl WebEncoderBuilder {
    /// Creates a new WebEncoderBuilder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text encoding. Default is UTF-8.
    pub fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Sets the error policy. Default is strict.
    pub fn errors(mut self, errors: ErrorPolicy) -> Self {
        self.errors = Some(errors);
        self.errors_name = None;
        self
    }

    /// Sets the error policy by name, validated at [`build`](Self::build).
    pub fn errors_named<S: Into<String>>(mut self, name: S) -> Self {
        self.errors_name = Some(name.into());
        self.errors = None;
        self
    }

    /// Sets the zlib level (0-9). Default is 6.
    pub fn level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    /// Builds the WebEncoder with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidConfiguration`] for an unknown error
    /// policy name or a level above 9.
    pub fn build(self) -> Result<WebEncoder, CodecError> {
        let errors = match self.errors_name {
            Some(name) => name.parse()?,
            None => self.errors.unwrap_or_default(),
        };
        let defaults = EncoderConfig::default();

        WebEncoder::with_config(EncoderConfig {
            encoding: self.encoding.unwrap_or(defaults.encoding),
            errors,
            level: self.level.unwrap_or(defaults.level),
        })
    }
}
