/// Leading character of a token whose payload is zlib-compressed.
pub const MARKER: char = '.';

/// Payload format carried by a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// No marker; the body is the base64 of the text bytes.
    Plain,
    /// Marked with `.`; the body is the base64 of a zlib stream.
    Compressed,
}

impl Format {
    /// The string written in front of the base64 body.
    pub fn prefix(self) -> &'static str {
        match self {
            Format::Plain => "",
            Format::Compressed => ".",
        }
    }

    /// Reads the marker off a token, returning the format and the body.
    pub fn split(token: &str) -> (Format, &str) {
        match token.strip_prefix(MARKER) {
            Some(body) => (Format::Compressed, body),
            None => (Format::Plain, token),
        }
    }

    /// Prepends the marker for this format to an encoded body.
    pub fn apply(self, body: &str) -> String {
        let prefix = self.prefix();
        let mut token = String::with_capacity(prefix.len() + body.len());
        token.push_str(prefix);
        token.push_str(body);
        token
    }

    pub fn is_compressed(self) -> bool {
        self == Format::Compressed
    }
}
