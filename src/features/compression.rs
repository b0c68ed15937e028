use crate::encoders::errors::CodecError;
use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};
use std::io::Write;

/// zlib's own default level.
pub const DEFAULT_LEVEL: u32 = 6;
pub const MAX_LEVEL: u32 = 9;

/// Outcome of a compression attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compressed {
    /// The zlib stream is strictly shorter than the input.
    Smaller(Vec<u8>),
    /// The zlib stream would be at least as long as the input.
    Ineffective {
        original_len: usize,
        compressed_len: usize,
    },
}

impl Compressed {
    /// Converts an ineffective outcome into [`CodecError::CompressionIneffective`].
    pub fn require_smaller(self) -> Result<Vec<u8>, CodecError> {
        match self {
            Compressed::Smaller(data) => Ok(data),
            Compressed::Ineffective {
                original_len,
                compressed_len,
            } => Err(CodecError::CompressionIneffective {
                original_len,
                compressed_len,
            }),
        }
    }
}

/// zlib (RFC 1950) compressor with a fixed level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compressor {
    level: u32,
}

impl Default for Compressor {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
        }
    }
}

impl Compressor {
    pub fn new(level: u32) -> Result<Self, CodecError> {
        if level > MAX_LEVEL {
            return Err(CodecError::InvalidConfiguration(format!(
                "compression level {} is out of range (0-{})",
                level, MAX_LEVEL
            )));
        }
        Ok(Self { level })
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Compresses `data`, reporting whether the result is worth keeping.
    pub fn compress(&self, data: &[u8]) -> Result<Compressed, CodecError> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(self.level));
        encoder.write_all(data).map_err(CodecError::Compression)?;
        let compressed = encoder.finish().map_err(CodecError::Compression)?;

        if compressed.len() < data.len() {
            Ok(Compressed::Smaller(compressed))
        } else {
            Ok(Compressed::Ineffective {
                original_len: data.len(),
                compressed_len: compressed.len(),
            })
        }
    }

    /// Inflates a complete zlib stream.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::DecompressionError`] for a bad header or checksum,
    /// or a corrupt or truncated stream. Bytes after the end of the stream
    /// are ignored.
    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        let mut inflater = Decompress::new(true);
        let mut result = Vec::with_capacity(data.len().saturating_mul(4).max(64));

        loop {
            let consumed = inflater.total_in() as usize;
            let produced = inflater.total_out();

            let status = inflater
                .decompress_vec(&data[consumed..], &mut result, FlushDecompress::None)
                .map_err(|e| CodecError::DecompressionError(e.to_string()))?;

            match status {
                Status::StreamEnd => break,
                Status::Ok | Status::BufError => {
                    if result.len() == result.capacity() {
                        result.reserve(result.capacity());
                        continue;
                    }
                    let stalled = inflater.total_in() as usize == consumed
                        && inflater.total_out() == produced;
                    if inflater.total_in() as usize == data.len() || stalled {
                        return Err(CodecError::DecompressionError(
                            "unexpected end of stream".to_string(),
                        ));
                    }
                }
            }
        }

        let trailing = data.len().saturating_sub(inflater.total_in() as usize);
        if trailing > 0 {
            tracing::debug!(trailing, "ignoring bytes after end of zlib stream");
        }

        Ok(result)
    }
}
