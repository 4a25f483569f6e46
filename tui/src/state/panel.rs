use binary_generator::{GenerationMode, GenerationParameters};

use crate::config::{model::MAX_VALUE, Settings};

/// Longest accepted numeric entry.
const MAX_DIGITS: usize = 9;

/// Focusable controls of the panel, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Count,
    Interval,
    Instant,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Field::Count => Field::Interval,
            Field::Interval => Field::Instant,
            Field::Instant => Field::Count,
        }
    }

    fn prev(self) -> Self {
        match self {
            Field::Count => Field::Instant,
            Field::Interval => Field::Count,
            Field::Instant => Field::Interval,
        }
    }
}

/// Editable generation parameters.
///
/// Text is kept as typed; it is only turned into numbers when a run is
/// requested, clamping anything empty or zero to 1.
#[derive(Debug, Clone)]
pub struct ConfigPanel {
    count: String,
    interval: String,
    instant: bool,
    focus: Field,
}

impl ConfigPanel {
    /// Creates a panel pre-filled from the settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            count: settings.count.to_string(),
            interval: settings.interval_ms.to_string(),
            instant: settings.instant,
            focus: Field::Count,
        }
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Types a character into the focused text field.
    ///
    /// # Returns
    /// Whether the character was accepted.
    pub fn input(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() {
            return false;
        }

        match self.focused_text() {
            Some(text) if text.len() < MAX_DIGITS => {
                text.push(c);
                true
            }
            _ => false,
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    pub fn toggle_instant(&mut self) {
        self.instant = !self.instant;
    }

    pub fn count_text(&self) -> &str {
        &self.count
    }

    pub fn interval_text(&self) -> &str {
        &self.interval
    }

    pub fn instant(&self) -> bool {
        self.instant
    }

    /// Reads the parameters of the next run.
    pub fn parameters(&self) -> GenerationParameters {
        let count = usize::try_from(parse_clamped(&self.count)).unwrap_or(usize::MAX);
        GenerationParameters::new(count, parse_clamped(&self.interval))
    }

    /// Reads the mode of the next run from the instant toggle.
    pub fn mode(&self) -> GenerationMode {
        GenerationMode::from_instant_flag(self.instant)
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Count => Some(&mut self.count),
            Field::Interval => Some(&mut self.interval),
            Field::Instant => None,
        }
    }
}

fn parse_clamped(text: &str) -> u64 {
    text.trim()
        .parse::<u64>()
        .map_or(1, |v| v.clamp(1, MAX_VALUE))
}
