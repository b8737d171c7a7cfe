//! Event handling for keyboard and mouse input.
//!
//! Terminal events are translated into [`Action`]s. The host applies them to
//! its picker, which keeps input decoding separate from state changes.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::{EventContext, EventHandler};
pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;
