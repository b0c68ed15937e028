use std::ffi::OsString;
use std::io::{self, Read};
use web_encoder::CodecError;

/// Resolves the DATA argument to text.
///
/// A missing argument or "-" reads standard input, dropping one trailing
/// newline so that piped `echo` output encodes as expected. Anything that is
/// not valid UTF-8 is rejected as the wrong input type.
pub fn read_data(data: Option<OsString>) -> Result<String, Box<dyn std::error::Error>> {
    match data {
        Some(arg) if arg != "-" => arg.into_string().map_err(|raw| {
            CodecError::not_text(format!("non-UTF-8 argument {:?}", raw)).into()
        }),
        _ => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            let text = String::from_utf8(buffer)
                .map_err(|_| CodecError::not_text("non-UTF-8 standard input"))?;
            Ok(strip_trailing_newline(text))
        }
    }
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
