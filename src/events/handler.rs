//! Central event handler that coordinates keyboard and mouse events.

use crossterm::event::{Event, KeyEventKind};

use crate::tui::InteractionRegistry;

use super::Action;
use super::keyboard::handle_key_event;
use super::mouse::handle_mouse_event;

/// Host state the event handlers read from.
pub trait EventContext {
    /// Regions registered during the last render
    fn interactions(&self) -> &InteractionRegistry;

    /// Whether a drag gesture is in progress
    fn is_dragging(&self) -> bool;
}

/// Central event handler for the application.
#[derive(Debug)]
pub struct EventHandler;

impl EventHandler {
    /// Handle a crossterm event (keyboard, mouse) and return an action.
    pub fn handle_event(ctx: &impl EventContext, event: &Event) -> Action {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
            Event::Mouse(mouse) => handle_mouse_event(ctx, *mouse),
            _ => Action::None,
        }
    }
}
