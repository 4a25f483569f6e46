use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::context::AppContext;
use crate::ui::{
    layout::{centered_rect, render_hints},
    theme::Theme,
};

use super::{generator::GeneratorState, Action, Screen};

const BANNER: [&str; 3] = ["0 1 1 0 1", "binary generator", "1 0 0 1 0"];

/// Entries of the start screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Generator,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 2] = [MenuItem::Generator, MenuItem::Quit];

    fn label(self) -> &'static str {
        match self {
            MenuItem::Generator => "Open Generator",
            MenuItem::Quit => "Quit",
        }
    }
}

pub struct MenuState {
    selected: usize,
}

impl MenuState {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    fn current(&self) -> MenuItem {
        MenuItem::ALL[self.selected]
    }
}

pub fn handle_key(state: &mut MenuState, key: KeyCode, ctx: &AppContext) -> Action {
    match key {
        KeyCode::Up | KeyCode::Char('k') => state.selected = state.selected.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => {
            state.selected = (state.selected + 1).min(MenuItem::ALL.len() - 1);
        }
        KeyCode::Enter => {
            return match state.current() {
                MenuItem::Generator => {
                    Action::Transition(Screen::Generator(Box::new(GeneratorState::new(ctx))))
                }
                MenuItem::Quit => Action::Quit,
            }
        }
        KeyCode::Char('q') => return Action::Quit,
        _ => {}
    }

    Action::None
}

pub fn draw(f: &mut Frame, state: &MenuState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(centered_rect(50, 50, area));

    let mut lines: Vec<Line> = BANNER
        .iter()
        .map(|text| Line::styled(*text, Theme::title()))
        .collect();
    lines.push(Line::default());
    lines.extend(MenuItem::ALL.iter().map(|item| {
        if *item == state.current() {
            Line::styled(format!("> {}", item.label()), Theme::focused())
        } else {
            Line::styled(format!("  {}", item.label()), Theme::dim())
        }
    }));

    let menu = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    );
    f.render_widget(menu, chunks[0]);

    render_hints(
        f,
        chunks[1],
        &[("up/down", "select"), ("enter", "open"), ("q", "quit")],
    );
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::runtime::Handle;

    use super::*;
    use crate::config::Settings;

    fn context() -> AppContext {
        AppContext::new(Handle::current(), Settings::default())
    }

    #[tokio::test]
    async fn enter_on_first_item_opens_the_generator() {
        let mut state = MenuState::new();

        assert!(matches!(
            handle_key(&mut state, KeyCode::Enter, &context()),
            Action::Transition(Screen::Generator(_))
        ));
    }

    #[tokio::test]
    async fn selection_stays_in_bounds() {
        let ctx = context();
        let mut state = MenuState::new();

        handle_key(&mut state, KeyCode::Up, &ctx);
        assert_eq!(state.current(), MenuItem::Generator);

        for _ in 0..5 {
            handle_key(&mut state, KeyCode::Char('j'), &ctx);
        }
        assert_eq!(state.current(), MenuItem::Quit);
        assert!(matches!(
            handle_key(&mut state, KeyCode::Enter, &ctx),
            Action::Quit
        ));
    }

    #[test]
    fn marker_follows_the_selection() {
        let mut state = MenuState::new();
        state.selected = 1;

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &state)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(text.contains("> Quit"));
        assert!(text.contains("  Open Generator"));
    }
}
