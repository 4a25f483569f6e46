use std::collections::VecDeque;

use binary_generator::{result_rows, split_width, BitValue, Snapshot, Stats};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::theme::Theme;
use crate::state::panel::{ConfigPanel, Field};

pub fn header(snapshot: &Snapshot) -> Paragraph<'static> {
    let (state, state_style) = if snapshot.is_running() {
        ("RUNNING", Theme::warn())
    } else {
        ("IDLE", Theme::ok())
    };
    let mode = snapshot
        .mode
        .map_or_else(|| "-".to_string(), |mode| mode.to_string());

    let line = Line::from(vec![
        Span::styled("Binary Generator", Theme::title()),
        Span::styled("  |  ", Theme::muted()),
        Span::styled(state, state_style),
        Span::styled("  |  ", Theme::muted()),
        Span::styled(format!("mode: {mode}"), Theme::text()),
        Span::styled("  |  ", Theme::muted()),
        Span::styled(
            format!("progress: {} / {}", snapshot.results.len(), snapshot.requested),
            Theme::text(),
        ),
    ]);

    Paragraph::new(line).block(bordered(" Overview "))
}

pub fn panel(panel: &ConfigPanel, running: bool) -> Paragraph<'static> {
    let fields = Line::from(vec![
        Span::styled("count: ", Theme::dim()),
        input(panel.count_text(), panel.focus() == Field::Count),
        Span::raw("    "),
        Span::styled("interval (ms): ", Theme::dim()),
        input(panel.interval_text(), panel.focus() == Field::Interval),
        Span::raw("    "),
        checkbox("instant mode", panel.instant(), panel.focus() == Field::Instant),
    ]);

    let generate = if running {
        Span::styled("[ Generating... ]", Theme::muted())
    } else {
        Span::styled("[ Generate ]", Theme::ok())
    };
    let second = if running {
        Span::styled("[ Stop ]", Theme::warn())
    } else {
        Span::styled("[ Reset ]", Theme::error())
    };

    let buttons = Line::from(vec![generate, Span::raw("  "), second]);

    Paragraph::new(vec![fields, Line::default(), buttons]).block(bordered(" Parameters "))
}

/// Draws the counters and the two-segment bar.
pub fn draw_stats(f: &mut Frame, area: Rect, stats: &Stats) {
    let block = bordered(" Statistics ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let lines = vec![
        Line::from(Span::styled(format!("Iteration № {}", stats.total), Theme::title())),
        Line::from(vec![
            Span::styled("Zeros: ", Theme::zero_row()),
            Span::styled(
                format!("{} ({})", stats.zeros, Stats::format_pct(stats.zero_pct)),
                Theme::text(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Ones:  ", Theme::one_row()),
            Span::styled(
                format!("{} ({})", stats.ones, Stats::format_pct(stats.one_pct)),
                Theme::text(),
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), rows[0]);

    draw_bar(f, rows[1], stats);
}

fn draw_bar(f: &mut Frame, area: Rect, stats: &Stats) {
    let (zero_w, one_w) = split_width(area.width, stats.zero_pct);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(zero_w), Constraint::Length(one_w)])
        .split(area);

    let segment = |pct: f64, style: Style| {
        Paragraph::new(Stats::format_pct(pct))
            .style(style)
            .alignment(Alignment::Center)
    };

    if zero_w > 0 {
        f.render_widget(segment(stats.zero_pct, Theme::zero_segment()), cols[0]);
    }
    if one_w > 0 {
        f.render_widget(segment(stats.one_pct, Theme::one_segment()), cols[1]);
    }
}

/// Builds the visible window of the result table.
///
/// # Arguments
/// * `results` - Generated values, newest first.
/// * `offset` - Index of the first row shown.
/// * `height` - Amount of rows that fit.
pub fn results_table(
    results: &VecDeque<BitValue>,
    offset: usize,
    height: usize,
) -> Table<'static> {
    let header = Row::new(vec!["iteration", "value"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = result_rows(results)
        .skip(offset)
        .take(height)
        .map(|row| {
            let style = if row.value.is_zero() {
                Theme::zero_row()
            } else {
                Theme::one_row()
            };
            Row::new(vec![
                Cell::from(row.iteration.to_string()),
                Cell::from(row.value.to_string()),
            ])
            .style(style)
        })
        .collect::<Vec<_>>();

    Table::new(rows, [Constraint::Length(12), Constraint::Min(6)])
        .header(header)
        .block(bordered(" Results "))
}

fn input(text: &str, focused: bool) -> Span<'static> {
    if focused {
        Span::styled(format!("{text}█"), Theme::focused())
    } else {
        Span::styled(text.to_string(), Theme::text())
    }
}

fn checkbox(label: &str, checked: bool, focused: bool) -> Span<'static> {
    let mark = if checked { "x" } else { " " };
    let style = if focused { Theme::focused() } else { Theme::text() };
    Span::styled(format!("[{mark}] {label}"), style)
}

fn bordered(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(title)
        .title_style(Theme::title())
}
