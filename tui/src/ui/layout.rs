use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Theme;

/// Regions of the generator screen.
pub struct GeneratorAreas {
    pub header: Rect,
    pub panel: Rect,
    pub stats: Rect,
    pub results: Rect,
    pub hints: Rect,
}

/// Computes the generator screen regions, top to bottom.
pub fn generator(area: Rect) -> GeneratorAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(6), // parameters + buttons
            Constraint::Length(7), // statistics
            Constraint::Min(3),    // results
            Constraint::Length(1), // hints
        ])
        .split(area);

    GeneratorAreas {
        header: chunks[0],
        panel: chunks[1],
        stats: chunks[2],
        results: chunks[3],
        hints: chunks[4],
    }
}

/// Renders a one-line row of `[key] action` pairs.
pub fn render_hints(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let spans = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!("[{key}]"), Theme::accent_cyan()),
                Span::styled(format!(" {action}  "), Theme::dim()),
            ]
        })
        .collect::<Vec<_>>();

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}
