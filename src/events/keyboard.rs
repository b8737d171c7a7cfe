//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,

        // Selection - arrows or vim style
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => Action::SelectPrevious,
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Action::SelectNext,

        _ => Action::None,
    }
}
