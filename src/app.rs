//! Demo application state.

use std::cell::Cell;
use std::rc::Rc;

use hpicker::config::Config;
use hpicker::events::{Action, EventContext};
use hpicker::tui::InteractionRegistry;
use hpicker::{HPicker, Picker, PickerItem, log};

/// Modes offered by the demo picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Mode::First,
        Mode::Second,
        Mode::Third,
        Mode::Fourth,
        Mode::Fifth,
        Mode::Sixth,
    ];
}

impl PickerItem for Mode {
    type Id = Mode;

    fn id(&self) -> Self::Id {
        *self
    }

    fn title(&self) -> &str {
        match self {
            Mode::First => "First",
            Mode::Second => "Second",
            Mode::Third => "Third",
            Mode::Fourth => "Fourth",
            Mode::Fifth => "Fifth",
            Mode::Sixth => "Sixth",
        }
    }
}

pub struct App {
    pub picker: HPicker<Mode>,
    pub interactions: InteractionRegistry,
    /// Layout units per terminal cell, shared by rendering and pointer input
    pub units_per_cell: f32,
    /// Number of selection changes made by the user
    pub changes: Rc<Cell<usize>>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> hpicker::Result<Self> {
        let changes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&changes);

        let picker = config
            .apply(HPicker::new(Mode::ALL.to_vec(), Mode::Third)?)
            .on_change(move |mode: &Mode| {
                counter.set(counter.get() + 1);
                log::log(&format!("Selected {}", mode.title()));
            });

        Ok(Self {
            picker,
            interactions: InteractionRegistry::new(),
            units_per_cell: config.units_per_cell(),
            changes,
            should_quit: false,
        })
    }

    fn to_units(&self, column: u16) -> f32 {
        f32::from(column) * self.units_per_cell
    }

    /// Apply an action to the picker.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Tap(index) => self.picker.tap_index(index),
            Action::SelectPrevious => self.picker.select_prev(),
            Action::SelectNext => self.picker.select_next(),
            Action::DragBegan { column, tap } => {
                let x = self.to_units(column);
                self.picker.press(x, tap);
            }
            Action::DragMoved(column) => {
                let x = self.to_units(column);
                self.picker.drag_moved(x);
            }
            Action::DragEnded => self.picker.drag_ended(),
            Action::None => {}
        }
    }
}

impl EventContext for App {
    fn interactions(&self) -> &InteractionRegistry {
        &self.interactions
    }

    fn is_dragging(&self) -> bool {
        self.picker.is_dragging()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let config = Config::parse("feedback = \"none\"\ntransition_ms = 0").unwrap();
        App::new(&config).unwrap()
    }

    #[test]
    fn test_starts_on_third() {
        let app = app();
        assert_eq!(app.picker.selection(), &Mode::Third);
        assert_eq!(app.changes.get(), 0);
    }

    #[test]
    fn test_drag_across_columns_moves_one_item() {
        let mut app = app();

        app.dispatch(Action::DragBegan { column: 40, tap: None });
        assert!(app.is_dragging());
        // 11 columns at 10 units per cell is past the 100 unit threshold
        app.dispatch(Action::DragMoved(29));
        app.dispatch(Action::DragMoved(5));
        app.dispatch(Action::DragEnded);

        assert!(!app.is_dragging());
        assert_eq!(app.picker.selection(), &Mode::Fourth);
        assert_eq!(app.changes.get(), 1);
    }

    #[test]
    fn test_short_drag_does_nothing() {
        let mut app = app();

        app.dispatch(Action::DragBegan { column: 40, tap: Some(0) });
        app.dispatch(Action::DragMoved(45));
        app.dispatch(Action::DragEnded);

        assert_eq!(app.picker.selection(), &Mode::Third);
        assert_eq!(app.changes.get(), 0);
    }

    #[test]
    fn test_click_selects_item() {
        let mut app = app();

        app.dispatch(Action::DragBegan { column: 3, tap: Some(5) });
        app.dispatch(Action::DragEnded);

        assert_eq!(app.picker.selection(), &Mode::Sixth);
    }

    #[test]
    fn test_keyboard_navigation_and_quit() {
        let mut app = app();

        app.dispatch(Action::SelectPrevious);
        app.dispatch(Action::SelectPrevious);
        app.dispatch(Action::SelectPrevious);
        assert_eq!(app.picker.selection(), &Mode::First);
        assert_eq!(app.changes.get(), 2);

        app.dispatch(Action::Quit);
        assert!(app.should_quit);
    }
}
