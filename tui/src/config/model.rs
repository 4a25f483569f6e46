use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_COUNT: u64 = 10;
pub const DEFAULT_INTERVAL_MS: u64 = 1000;
/// Largest count or interval accepted, the most the panel fields can hold.
pub const MAX_VALUE: u64 = 999_999_999;

/// Start-up settings, read from `bingen.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Initial value of the count field.
    pub count: u64,
    /// Initial value of the interval field, in milliseconds.
    pub interval_ms: u64,
    /// Whether instant mode starts switched on.
    pub instant: bool,
    /// Seed for a reproducible bit stream.
    pub seed: Option<u64>,
    /// Where log records go while the terminal is taken over.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            interval_ms: DEFAULT_INTERVAL_MS,
            instant: false,
            seed: None,
            log_file: None,
        }
    }
}
