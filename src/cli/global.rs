use clap::{ArgAction, Args};
use std::path::PathBuf;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Read settings from this file instead of the standard locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Text encoding (utf-8, utf-16le, utf-16be, ascii, latin-1)
    #[arg(long, global = true, value_name = "NAME")]
    pub encoding: Option<String>,

    /// How to handle unencodable or undecodable text (strict, replace, ignore)
    #[arg(long, global = true, value_name = "POLICY")]
    pub errors: Option<String>,

    /// zlib compression level (0-9)
    #[arg(long, global = true)]
    pub level: Option<u32>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}
