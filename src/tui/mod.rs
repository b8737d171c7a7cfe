//! Terminal rendering for the picker.
//!
//! - `item_view` - one item's content, measurement and clipped drawing
//! - `widget` - `HPickerView`, the stateful ratatui widget for an `HPicker`
//! - `interaction` - per-frame registry of clickable and draggable regions
//! - `theme` - colors

pub mod interaction;
mod item_view;
pub mod theme;
mod widget;

pub use interaction::{ClickRegion, InteractionRegistry, InteractiveRegion};
pub use item_view::{ItemContent, ItemView, default_content};
pub use widget::HPickerView;

/// Layout units covered by one terminal cell.
pub const DEFAULT_UNITS_PER_CELL: f32 = 10.0;
