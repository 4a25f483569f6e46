use std::{
    collections::VecDeque,
    fmt,
    num::{NonZeroU64, NonZeroUsize},
    time::Duration,
};

use crate::bit::BitValue;

/// How the values of a run are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// The whole sequence is drawn synchronously in one step.
    Instant,
    /// One value is drawn per timer interval.
    RealTime,
}

impl GenerationMode {
    /// Derives the mode from the instant-mode flag.
    pub fn from_instant_flag(instant: bool) -> Self {
        if instant {
            GenerationMode::Instant
        } else {
            GenerationMode::RealTime
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationMode::Instant => write!(f, "instant"),
            GenerationMode::RealTime => write!(f, "real-time"),
        }
    }
}

/// Lifecycle of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationState {
    #[default]
    Idle,
    Running,
}

/// Bounds of a single generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParameters {
    count: NonZeroUsize,
    interval_ms: NonZeroU64,
}

impl GenerationParameters {
    /// Creates a new set of parameters, clamping both values to at least 1.
    ///
    /// # Arguments
    /// * `count` - The amount of values to generate.
    /// * `interval_ms` - Milliseconds between values in real-time mode.
    pub fn new(count: usize, interval_ms: u64) -> Self {
        Self {
            count: NonZeroUsize::new(count).unwrap_or(NonZeroUsize::MIN),
            interval_ms: NonZeroU64::new(interval_ms).unwrap_or(NonZeroU64::MIN),
        }
    }

    /// Returns the requested amount of values.
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Returns the real-time interval in milliseconds.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms.get()
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.get())
    }
}

/// Read-only view of the controller published to subscribers on every change.
///
/// The controller edits the published snapshot in place, so a tick costs one
/// insertion rather than a copy of the list.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Generated values, newest first.
    pub results: VecDeque<BitValue>,
    pub state: GenerationState,
    /// Mode of the last run, cleared on reset.
    pub mode: Option<GenerationMode>,
    /// Requested count of the last run, zero when none.
    pub requested: usize,
}

impl Snapshot {
    pub fn is_running(&self) -> bool {
        self.state == GenerationState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_clamp_to_one() {
        let params = GenerationParameters::new(0, 0);
        assert_eq!(params.count(), 1);
        assert_eq!(params.interval_ms(), 1);
        assert_eq!(params.interval(), Duration::from_millis(1));
    }

    #[test]
    fn mode_follows_flag() {
        assert_eq!(GenerationMode::from_instant_flag(true), GenerationMode::Instant);
        assert_eq!(GenerationMode::from_instant_flag(false), GenerationMode::RealTime);
    }
}
