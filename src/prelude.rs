//! Convenient re-exports for common usage.
//!
//! ```
//! use web_encoder::prelude::*;
//!
//! let encoder = WebEncoder::builder().level(9).build().unwrap();
//! let token = encoder.encode("hello", false).unwrap();
//! assert_eq!(decode(&token).unwrap(), "hello");
//! ```

pub use crate::{
    CodecError, EncoderConfig, ErrorKind, ErrorPolicy, Format, TextEncoding, WebEncoder,
    WebEncoderBuilder, decode, encode,
};
