use binary_generator::RngBitSource;
use tokio::runtime::Handle;

use crate::config::Settings;

/// Process-wide resources shared by the screens.
#[derive(Clone)]
pub struct AppContext {
    /// Runtime driving the real-time timers.
    pub runtime: Handle,
    pub settings: Settings,
}

impl AppContext {
    pub fn new(runtime: Handle, settings: Settings) -> Self {
        Self { runtime, settings }
    }

    /// Builds the bit source for a new generator, seeded if configured.
    pub fn bit_source(&self) -> RngBitSource {
        match self.settings.seed {
            Some(seed) => RngBitSource::seeded(seed),
            None => RngBitSource::from_entropy(),
        }
    }
}
