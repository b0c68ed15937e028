use clap::{Args, Subcommand};
use std::ffi::OsString;

/// Arguments for encoding text
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Text to encode (reads stdin if omitted or "-")
    #[arg(value_name = "DATA")]
    pub data: Option<OsString>,

    /// Never compress, even when it would shrink the token
    #[arg(long)]
    pub no_compress: bool,

    /// Compress when it shrinks the token, overriding a config file that disables it
    #[arg(long, conflicts_with = "no_compress")]
    pub compress: bool,
}

/// Arguments for decoding a token
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Token to decode (reads stdin if omitted or "-")
    #[arg(value_name = "DATA")]
    pub data: Option<OsString>,

    /// Accepted for symmetry with encode; has no effect
    #[arg(long, hide = true)]
    pub no_compress: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode text into a web-safe token
    #[command(name = "e", visible_alias = "encode")]
    Encode(EncodeArgs),

    /// Decode a web-safe token back into text
    #[command(name = "d", visible_alias = "decode")]
    Decode(DecodeArgs),
}
