use std::{error::Error, fmt, io, path::PathBuf};

/// Failures while loading the settings file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The file is not valid settings JSON.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The file parsed but holds an unusable value.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read '{}': {source}", path.display()),
            Self::Parse { path, source } => {
                write!(f, "invalid settings in '{}': {source}", path.display())
            }
            Self::Invalid(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}
