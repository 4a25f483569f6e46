pub mod generator;
pub mod menu;

use crossterm::event::KeyCode;
use ratatui::Frame;

use crate::app::context::AppContext;

pub enum Action {
    None,
    Quit,
    Transition(Screen),
}

pub enum Screen {
    Menu(menu::MenuState),
    Generator(Box<generator::GeneratorState>),
}

impl Screen {
    pub fn draw(&self, f: &mut Frame) {
        match self {
            Screen::Menu(s) => menu::draw(f, s),
            Screen::Generator(s) => generator::draw(f, s),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, ctx: &AppContext) -> Action {
        match self {
            Screen::Menu(s) => menu::handle_key(s, key, ctx),
            Screen::Generator(s) => generator::handle_key(s, key),
        }
    }

    /// Advances time-driven state once per frame.
    pub fn tick(&mut self) {
        if let Screen::Generator(s) = self {
            s.tick();
        }
    }
}
