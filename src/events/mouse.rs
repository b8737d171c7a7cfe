//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which is
//! populated during each render. A left press inside a draggable region
//! starts a drag gesture; movement and release are forwarded while it runs.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::Action;
use super::handler::EventContext;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(ctx: &impl EventContext, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;
    let interactions = ctx.interactions();

    match mouse.kind {
        MouseEventKind::ScrollUp => interactions.handle_scroll_up(x, y),
        MouseEventKind::ScrollDown => interactions.handle_scroll_down(x, y),
        MouseEventKind::Down(MouseButton::Left) => {
            let click = interactions.handle_click(x, y);
            if !interactions.is_draggable(x, y) {
                return click;
            }
            let tap = match click {
                Action::Tap(index) => Some(index),
                _ => None,
            };
            Action::DragBegan { column: x, tap }
        }
        MouseEventKind::Drag(MouseButton::Left) if ctx.is_dragging() => Action::DragMoved(x),
        MouseEventKind::Up(MouseButton::Left) if ctx.is_dragging() => Action::DragEnded,
        _ => Action::None,
    }
}
