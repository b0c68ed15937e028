//! Reversible text-to-token codec for URLs, cookies and file names.
//!
//! A token is the unpadded web-safe base64 of the text's bytes. When the
//! zlib-compressed bytes are strictly shorter, they are used instead and the
//! token is prefixed with a `.` marker.
//!
//! ```
//! let token = web_encoder::encode("Test message.").unwrap();
//! assert_eq!(token, "VGVzdCBtZXNzYWdlLg");
//! assert_eq!(web_encoder::decode(&token).unwrap(), "Test message.");
//! ```

mod core;
mod encoders;
mod features;

pub mod prelude;

pub use crate::core::config::{CodecSection, ConfigFile, EncoderConfig, ErrorPolicy, TextEncoding};
pub use crate::core::engine::{WebEncoder, WebEncoderBuilder};
pub use encoders::errors::{CodecError, ErrorKind, MalformedToken};
pub use encoders::marker::{Format, MARKER};
pub use encoders::text::TextBytesAdapter;
pub use encoders::websafe;
pub use features::compression::{Compressed, Compressor, DEFAULT_LEVEL, MAX_LEVEL};

/// Encodes `text` with the default engine, compressing when it pays off.
pub fn encode(text: &str) -> Result<String, CodecError> {
    WebEncoder::new().encode(text, true)
}

/// Decodes a token with the default engine.
pub fn decode(token: &str) -> Result<String, CodecError> {
    WebEncoder::new().decode(token)
}
