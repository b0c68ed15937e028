use crate::cli::global::GlobalArgs;
use std::path::{Path, PathBuf};
use web_encoder::{ConfigFile, WebEncoder};

/// Settings resolved from config files and command-line flags.
#[derive(Debug)]
pub struct Settings {
    pub encoder: WebEncoder,
    /// Whether `e` compresses when neither --compress nor --no-compress is given
    pub compress_by_default: bool,
}

/// Loads the configuration file named by --config, or the standard locations.
fn load_config_file(path: Option<&Path>) -> Result<ConfigFile, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let expanded = shellexpand::tilde(path.to_string_lossy().as_ref()).into_owned();
            let path = PathBuf::from(expanded);
            ConfigFile::load_from_file(&path)
                .map_err(|e| format!("Cannot load config '{}': {}", path.display(), e).into())
        }
        None => Ok(ConfigFile::load_with_overrides()),
    }
}

/// Applies command-line overrides on top of file settings.
///
/// Flags replace file values before validation, so a bad value in a file
/// can be worked around from the command line.
fn apply_overrides(file: &mut ConfigFile, global: &GlobalArgs) {
    if let Some(encoding) = &global.encoding {
        file.codec.encoding = Some(encoding.clone());
    }
    if let Some(errors) = &global.errors {
        file.codec.errors = Some(errors.clone());
    }
    if let Some(level) = global.level {
        file.codec.level = Some(level);
    }
}

pub fn resolve_settings(global: &GlobalArgs) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut file = load_config_file(global.config.as_deref())?;
    apply_overrides(&mut file, global);

    let config = file.encoder_config()?;
    tracing::debug!(
        encoding = %config.encoding,
        errors = %config.errors,
        level = config.level,
        "resolved codec settings"
    );

    Ok(Settings {
        encoder: WebEncoder::with_config(config)?,
        compress_by_default: file.compress_by_default(),
    })
}
