use binary_generator::{GenerationController, Snapshot, Stats};
use crossterm::event::KeyCode;
use log::debug;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Paragraph},
    Frame,
};
use tokio::sync::watch;

use crate::app::context::AppContext;
use crate::state::panel::{ConfigPanel, Field};
use crate::ui::{layout, theme::Theme, widgets};

use super::{menu::MenuState, Action, Screen};

/// Rows moved by one page of scrolling.
const PAGE: usize = 10;

/// The main screen: parameters, statistics and the result table.
///
/// Owns the controller, so leaving the screen stops any run in progress.
pub struct GeneratorState {
    panel: ConfigPanel,
    controller: GenerationController,
    view: watch::Receiver<Snapshot>,
    scroll: usize,
}

impl GeneratorState {
    pub fn new(ctx: &AppContext) -> Self {
        let controller = GenerationController::new(ctx.bit_source(), ctx.runtime.clone());
        let view = controller.subscribe();

        Self {
            panel: ConfigPanel::new(&ctx.settings),
            controller,
            view,
            scroll: 0,
        }
    }

    /// Applies pending real-time ticks.
    pub fn tick(&mut self) {
        let applied = self.controller.pump();
        if applied > 0 {
            debug!("applied {applied} tick(s)");
        }
    }

    fn is_running(&self) -> bool {
        self.view.borrow().is_running()
    }

    fn generate(&mut self) {
        if self.is_running() {
            return;
        }
        self.controller.start(self.panel.parameters(), self.panel.mode());
        self.scroll = 0;
    }

    fn scroll_by(&mut self, delta: isize) {
        let last = self.view.borrow().results.len().saturating_sub(1);
        self.scroll = self.scroll.saturating_add_signed(delta).min(last);
    }
}

pub fn handle_key(state: &mut GeneratorState, key: KeyCode) -> Action {
    let running = state.is_running();

    match key {
        KeyCode::Tab => state.panel.focus_next(),
        KeyCode::BackTab => state.panel.focus_prev(),
        KeyCode::Enter | KeyCode::Char('g') => state.generate(),
        KeyCode::Char('s') if running => state.controller.stop(),
        KeyCode::Char('r') if !running => {
            state.controller.reset();
            state.scroll = 0;
        }
        KeyCode::Char(' ') if state.panel.focus() == Field::Instant => {
            state.panel.toggle_instant();
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            state.panel.input(c);
        }
        KeyCode::Backspace => state.panel.backspace(),
        KeyCode::PageDown => state.scroll_by(PAGE as isize),
        KeyCode::PageUp => state.scroll_by(-(PAGE as isize)),
        KeyCode::Home => state.scroll = 0,
        KeyCode::Esc => return Action::Transition(Screen::Menu(MenuState::new())),
        KeyCode::Char('q') => return Action::Quit,
        _ => {}
    }

    Action::None
}

pub fn draw(f: &mut Frame, state: &GeneratorState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let snapshot = state.view.borrow();
    let areas = layout::generator(area);

    f.render_widget(widgets::header(&snapshot), areas.header);
    f.render_widget(
        widgets::panel(&state.panel, snapshot.is_running()),
        areas.panel,
    );

    let stats = Stats::from_results(&snapshot.results);
    widgets::draw_stats(f, areas.stats, &stats);

    draw_results(f, areas.results, &snapshot, state.scroll);

    let second = if snapshot.is_running() {
        ("s", "stop")
    } else {
        ("r", "reset")
    };
    layout::render_hints(
        f,
        areas.hints,
        &[
            ("enter", "generate"),
            second,
            ("tab", "next field"),
            ("space", "toggle"),
            ("pgup/pgdn", "scroll"),
            ("esc", "menu"),
            ("q", "quit"),
        ],
    );
}

fn draw_results(f: &mut Frame, area: Rect, snapshot: &Snapshot, scroll: usize) {
    if snapshot.results.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("no results yet", Theme::muted())),
            area,
        );
        return;
    }

    // Borders and the header row take three lines.
    let height = usize::from(area.height.saturating_sub(3));
    f.render_widget(
        widgets::results_table(&snapshot.results, scroll, height),
        area,
    );
}

#[cfg(test)]
mod tests {
    use binary_generator::{GenerationMode, GenerationState};
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::runtime::Handle;

    use super::*;
    use crate::config::Settings;

    fn state_with(settings: Settings) -> GeneratorState {
        GeneratorState::new(&AppContext::new(Handle::current(), settings))
    }

    fn screen_text(state: &GeneratorState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn instant_settings(count: u64) -> Settings {
        Settings {
            count,
            instant: true,
            seed: Some(5),
            ..Settings::default()
        }
    }

    #[tokio::test]
    async fn generate_in_instant_mode_fills_the_table() {
        let mut state = state_with(instant_settings(4));

        handle_key(&mut state, KeyCode::Enter);

        let snapshot = state.view.borrow().clone();
        assert_eq!(snapshot.results.len(), 4);
        assert_eq!(snapshot.mode, Some(GenerationMode::Instant));

        let text = screen_text(&state);
        assert!(text.contains("Iteration № 4"));
        assert!(text.contains("iteration"));
        assert!(text.contains("[ Reset ]"));
    }

    #[tokio::test]
    async fn empty_screen_hides_the_table() {
        let state = state_with(Settings::default());

        let text = screen_text(&state);
        assert!(text.contains("no results yet"));
        assert!(text.contains("0.00%"));
        assert!(text.contains("100.00%"));
        assert!(text.contains("[ Generate ]"));
    }

    #[tokio::test(start_paused = true)]
    async fn real_time_run_shows_stop_and_ignores_generate() {
        let mut state = state_with(Settings {
            count: 3,
            interval_ms: 100,
            ..Settings::default()
        });

        handle_key(&mut state, KeyCode::Enter);
        assert!(state.is_running());

        let text = screen_text(&state);
        assert!(text.contains("[ Generating... ]"));
        assert!(text.contains("[ Stop ]"));

        // Reset is not offered while running.
        handle_key(&mut state, KeyCode::Char('r'));
        assert!(state.is_running());

        tokio::time::sleep(std::time::Duration::from_millis(150)).await;
        state.tick();
        assert_eq!(state.view.borrow().results.len(), 1);

        handle_key(&mut state, KeyCode::Enter);
        assert_eq!(state.view.borrow().results.len(), 1);

        handle_key(&mut state, KeyCode::Char('s'));
        assert_eq!(state.controller.state(), GenerationState::Idle);
        assert_eq!(state.view.borrow().results.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn one_frame_catches_up_on_every_missed_tick() {
        let mut state = state_with(Settings {
            count: 1000,
            interval_ms: 2,
            ..Settings::default()
        });
        handle_key(&mut state, KeyCode::Enter);

        tokio::time::sleep(std::time::Duration::from_millis(101)).await;
        state.tick();

        assert_eq!(state.view.borrow().results.len(), 50);
        assert!(screen_text(&state).contains("Iteration № 50"));
    }

    #[tokio::test]
    async fn reset_clears_results_when_idle() {
        let mut state = state_with(instant_settings(6));
        handle_key(&mut state, KeyCode::Enter);
        handle_key(&mut state, KeyCode::PageDown);
        assert_eq!(state.scroll, 5);

        handle_key(&mut state, KeyCode::Char('r'));

        assert!(state.view.borrow().results.is_empty());
        assert_eq!(state.scroll, 0);
    }

    #[tokio::test]
    async fn space_toggles_instant_only_on_its_field() {
        let mut state = state_with(Settings::default());

        handle_key(&mut state, KeyCode::Char(' '));
        assert!(!state.panel.instant());

        handle_key(&mut state, KeyCode::BackTab);
        handle_key(&mut state, KeyCode::Char(' '));
        assert!(state.panel.instant());
    }

    #[tokio::test]
    async fn escape_returns_to_the_menu() {
        let mut state = state_with(Settings::default());

        assert!(matches!(
            handle_key(&mut state, KeyCode::Esc),
            Action::Transition(Screen::Menu(_))
        ));
        assert!(matches!(
            handle_key(&mut state, KeyCode::Char('q')),
            Action::Quit
        ));
    }
}
