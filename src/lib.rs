//! A horizontally scrolling item picker for ratatui.
//!
//! Items are laid out in a single row with the selected item centered. Taps
//! select an item directly; a horizontal drag moves the selection by one item
//! per gesture.
//!
//! - `picker` - `HPicker` state: layout tables, selection and gestures
//! - `tui` - `HPickerView` widget, item rendering and mouse regions
//! - `events` - translation of crossterm events into `Action`s
//! - `config` - `~/.config/hpicker/config.toml`
//! - `log` - optional file logging

pub mod config;
pub mod error;
pub mod events;
pub mod log;
pub mod picker;
pub mod tui;

pub use error::{PickerError, Result};
pub use picker::{HPicker, Picker, PickerItem};
pub use tui::HPickerView;
