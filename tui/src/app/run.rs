use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use super::{context::AppContext, logging};
use crate::config::json;
use crate::ui::screens::{menu, Action, Screen};

/// How long one frame waits for input before pumping timers again.
const FRAME: Duration = Duration::from_millis(16);

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the TUI application.
///
/// # Errors
/// Returns an error if settings are invalid or terminal setup or rendering fails.
pub fn run() -> Result<()> {
    let settings = json::resolve().context("loading settings")?;
    logging::init(&settings)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("bingen-timer")
        .enable_time()
        .build()
        .context("building timer runtime")?;
    let ctx = AppContext::new(runtime.handle().clone(), settings);
    info!("starting binary generator");

    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut screen = Screen::Menu(menu::MenuState::new());

    loop {
        screen.tick();
        terminal.draw(|f| screen.draw(f))?;

        if event::poll(FRAME)? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match screen.handle_key(k.code, &ctx) {
                    Action::Quit => break,
                    Action::Transition(next) => screen = next,
                    Action::None => {}
                }
            }
        }
    }

    // Drops the controller, and with it any running timer, before the runtime.
    drop(screen);
    terminal.show_cursor()?;
    info!("binary generator closed");
    Ok(())
}
