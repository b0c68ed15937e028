use crate::encoders::errors::CodecError;
use crate::features::compression::{DEFAULT_LEVEL, MAX_LEVEL};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Character encoding used to turn text into bytes before compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    /// Variable-width Unicode. Every string is representable.
    #[default]
    Utf8,
    /// UTF-16, little endian, no byte order mark.
    Utf16Le,
    /// UTF-16, big endian, no byte order mark.
    Utf16Be,
    /// 7-bit ASCII.
    Ascii,
    /// ISO-8859-1: one byte per code point up to U+00FF.
    Latin1,
}

impl TextEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf16Le => "utf-16le",
            TextEncoding::Utf16Be => "utf-16be",
            TextEncoding::Ascii => "ascii",
            TextEncoding::Latin1 => "latin-1",
        }
    }

    /// All supported encodings, in display order.
    pub fn all() -> &'static [TextEncoding] {
        &[
            TextEncoding::Utf8,
            TextEncoding::Utf16Le,
            TextEncoding::Utf16Be,
            TextEncoding::Ascii,
            TextEncoding::Latin1,
        ]
    }
}

impl FromStr for TextEncoding {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "utf-16le" | "utf16le" | "utf-16-le" => Ok(TextEncoding::Utf16Le),
            "utf-16be" | "utf16be" | "utf-16-be" => Ok(TextEncoding::Utf16Be),
            "ascii" | "us-ascii" => Ok(TextEncoding::Ascii),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => Ok(TextEncoding::Latin1),
            _ => Err(CodecError::InvalidConfiguration(format!(
                "unknown text encoding '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the text adapter does with sequences the encoding cannot express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorPolicy {
    /// Fail with an encode/decode error.
    #[default]
    Strict,
    /// Substitute a replacement marker (`?` when encoding, U+FFFD when decoding).
    Replace,
    /// Drop the offending sequence.
    Ignore,
}

impl ErrorPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorPolicy::Strict => "strict",
            ErrorPolicy::Replace => "replace",
            ErrorPolicy::Ignore => "ignore",
        }
    }
}

impl FromStr for ErrorPolicy {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(ErrorPolicy::Strict),
            "replace" => Ok(ErrorPolicy::Replace),
            "ignore" => Ok(ErrorPolicy::Ignore),
            _ => Err(CodecError::InvalidConfiguration(format!(
                "unknown error policy '{}' (expected strict, replace or ignore)",
                s
            ))),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable settings of a [`WebEncoder`](crate::WebEncoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    pub encoding: TextEncoding,
    pub errors: ErrorPolicy,
    /// zlib compression level, 0-9.
    pub level: u32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::default(),
            errors: ErrorPolicy::default(),
            level: DEFAULT_LEVEL,
        }
    }
}

impl EncoderConfig {
    pub fn validate(&self) -> Result<(), CodecError> {
        if self.level > MAX_LEVEL {
            return Err(CodecError::InvalidConfiguration(format!(
                "compression level {} is out of range (0-{})",
                self.level, MAX_LEVEL
            )));
        }
        Ok(())
    }
}

/// The `[codec]` table of a configuration file.
///
/// Names are kept as strings so that a typo surfaces as an
/// `InvalidConfiguration` error with the offending value.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CodecSection {
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default)]
    pub errors: Option<String>,
    #[serde(default)]
    pub level: Option<u32>,
    /// Whether `encode` compresses when the caller does not say otherwise.
    #[serde(default)]
    pub compress: Option<bool>,
}

/// Configuration loaded from TOML files.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub codec: CodecSection,
}

impl ConfigFile {
    /// Parses configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in defaults
    /// 2. `~/.config/web-encoder/config.toml` (user overrides)
    /// 3. `./web-encoder.toml` (project-local overrides)
    ///
    /// Later files override earlier ones key by key. A file that fails to
    /// parse is reported and skipped.
    pub fn load_with_overrides() -> Self {
        let mut config = Self::default();

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("web-encoder").join("config.toml");
            config.merge_from(&user_config_path);
        }

        config.merge_from(Path::new("web-encoder.toml"));
        config
    }

    fn merge_from(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => {
                tracing::debug!(path = %path.display(), "loaded configuration");
                self.merge(other);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable configuration");
            }
        }
    }

    /// Merges another configuration into this one; keys set in `other` win.
    pub fn merge(&mut self, other: ConfigFile) {
        let codec = other.codec;
        if codec.encoding.is_some() {
            self.codec.encoding = codec.encoding;
        }
        if codec.errors.is_some() {
            self.codec.errors = codec.errors;
        }
        if codec.level.is_some() {
            self.codec.level = codec.level;
        }
        if codec.compress.is_some() {
            self.codec.compress = codec.compress;
        }
    }

    /// Default for the encode-side compression switch.
    pub fn compress_by_default(&self) -> bool {
        self.codec.compress.unwrap_or(true)
    }

    /// Resolves names and validates ranges into an [`EncoderConfig`].
    pub fn encoder_config(&self) -> Result<EncoderConfig, CodecError> {
        let mut config = EncoderConfig::default();
        if let Some(name) = &self.codec.encoding {
            config.encoding = name.parse()?;
        }
        if let Some(name) = &self.codec.errors {
            config.errors = name.parse()?;
        }
        if let Some(level) = self.codec.level {
            config.level = level;
        }
        config.validate()?;
        Ok(config)
    }
}
