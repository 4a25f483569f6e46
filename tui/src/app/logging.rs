use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::config::Settings;

/// Initialises `env_logger` for the TUI.
///
/// The terminal is in the alternate screen while the app runs, so records go
/// to `log_file` when one is configured. Without it nothing is logged unless
/// `RUST_LOG` asks for it.
///
/// # Errors
/// Returns an error if the log file cannot be opened or a logger is already set.
pub fn init(settings: &Settings) -> Result<()> {
    let default_filter = if settings.log_file.is_some() {
        "info"
    } else {
        "off"
    };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));

    if let Some(path) = &settings.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open log file '{}'", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("logger already initialised")?;
    Ok(())
}
