use std::{
    env,
    path::{Path, PathBuf},
};

use super::{
    error::ConfigError,
    model::{Settings, MAX_VALUE},
};

/// Environment variable pointing at an explicit settings file.
pub const CONFIG_ENV: &str = "BINGEN_CONFIG";
/// Settings file picked up from the working directory when present.
pub const DEFAULT_CONFIG_PATH: &str = "bingen.json";

/// Resolves the settings for this process.
///
/// `BINGEN_CONFIG` must name a readable file. Without it, `./bingen.json` is
/// used if it exists, otherwise the defaults.
///
/// # Errors
/// Returns a [`ConfigError`] if the chosen file cannot be read or is invalid.
pub fn resolve() -> Result<Settings, ConfigError> {
    match env::var_os(CONFIG_ENV) {
        Some(path) => load(Path::new(&path)),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_PATH);
            if path.is_file() {
                load(&path)
            } else {
                Ok(Settings::default())
            }
        }
    }
}

/// Loads [`Settings`] from a JSON file.
///
/// # Errors
/// Returns a [`ConfigError`] if the file cannot be read, parsed or validated.
pub fn load(path: &Path) -> Result<Settings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse(&content, path)
}

fn parse(content: &str, path: &Path) -> Result<Settings, ConfigError> {
    let settings: Settings = serde_json::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    check_range("count", settings.count)?;
    check_range("interval_ms", settings.interval_ms)?;

    Ok(settings)
}

fn check_range(field: &str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Invalid(format!(
            "{field} must be greater than zero"
        )));
    }
    if value > MAX_VALUE {
        return Err(ConfigError::Invalid(format!(
            "{field} must be at most {MAX_VALUE}, got {value}"
        )));
    }
    Ok(())
}
