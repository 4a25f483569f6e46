use ratatui::style::{Color, Modifier, Style};

/// Neon-green terminal theme.
///
/// Zeros are drawn in red and ones in green everywhere they appear.
pub struct Theme;

impl Theme {
    // Core palette
    pub const BG: Color = Color::Rgb(0, 0, 0);
    pub const FG_NEON: Color = Color::Rgb(57, 255, 20);
    pub const FG_DIM: Color = Color::Rgb(0, 190, 0);
    pub const FG_MUTED: Color = Color::Rgb(80, 90, 80);

    pub const ACCENT_CYAN: Color = Color::Rgb(0, 255, 255);
    pub const ACCENT_YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const ACCENT_RED: Color = Color::Rgb(255, 70, 70);

    // Value colours
    pub const ZERO: Color = Color::Rgb(200, 40, 40);
    pub const ONE: Color = Color::Rgb(30, 160, 60);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG_NEON).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::FG_NEON).bg(Self::BG)
    }

    /// Titles (bold neon).
    pub fn title() -> Style {
        Style::default()
            .fg(Self::FG_NEON)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG_NEON)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    /// Muted/disabled text.
    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    pub fn ok() -> Style {
        Style::default()
            .fg(Self::FG_NEON)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warn() -> Style {
        Style::default()
            .fg(Self::ACCENT_YELLOW)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_cyan() -> Style {
        Style::default()
            .fg(Self::ACCENT_CYAN)
            .add_modifier(Modifier::BOLD)
    }

    /// Focused control.
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::BG)
            .bg(Self::FG_NEON)
            .add_modifier(Modifier::BOLD)
    }

    /// Text on a zero-coloured background.
    pub fn zero_segment() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ZERO)
            .add_modifier(Modifier::BOLD)
    }

    /// Text on a one-coloured background.
    pub fn one_segment() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ONE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn zero_row() -> Style {
        Style::default().fg(Self::ZERO)
    }

    pub fn one_row() -> Style {
        Style::default().fg(Self::ONE)
    }
}
