//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the region under the pointer.
//!
//! # Example
//!
//! ```ignore
//! // During render, register an interactive region:
//! registry.register(
//!     InteractiveRegion::clickable("hpicker_item", ClickRegion::new(x, y, width, 1), Action::Tap(0))
//!         .with_priority(1),
//! );
//!
//! // Mouse events are dispatched to matching regions
//! let action = registry.handle_click(column, row);
//! ```

use ratatui::layout::Rect;

use crate::events::Action;

/// A rectangular screen region in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is within this region (right and bottom edges excluded)
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(y) < u32::from(self.y) + u32::from(self.height)
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// An interactive region that can respond to mouse events.
///
/// Components create these during render to define clickable, scrollable and
/// draggable areas.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for this region (for debugging/logging)
    pub id: &'static str,

    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// A left press here starts a drag gesture
    pub draggable: bool,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    fn empty(id: &'static str, bounds: ClickRegion) -> Self {
        Self {
            id,
            bounds,
            on_click: None,
            on_scroll_up: None,
            on_scroll_down: None,
            draggable: false,
            priority: 0,
        }
    }

    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            on_click: Some(action),
            ..Self::empty(id, bounds)
        }
    }

    /// Create a region where a left press starts a drag
    pub fn draggable(id: &'static str, bounds: ClickRegion) -> Self {
        Self {
            draggable: true,
            ..Self::empty(id, bounds)
        }
    }

    /// Add scroll wheel actions (for builder pattern)
    pub fn with_scroll(mut self, scroll_up: Action, scroll_down: Action) -> Self {
        self.on_scroll_up = Some(scroll_up);
        self.on_scroll_down = Some(scroll_down);
        self
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Action of the highest-priority region containing (x, y) that has one.
    fn dispatch(
        &self,
        x: u16,
        y: u16,
        handler: impl Fn(&InteractiveRegion) -> Option<&Action>,
    ) -> Action {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y))
            .filter_map(|r| handler(r).map(|action| (r.priority, action)))
            // max_by_key keeps the last maximum; registration order breaks ties
            .rev()
            .max_by_key(|(priority, _)| *priority)
            .map(|(_, action)| action.clone())
            .unwrap_or(Action::None)
    }

    /// Find the action to dispatch for a click at (x, y)
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.dispatch(x, y, |r| r.on_click.as_ref())
    }

    /// Find the action to dispatch for a scroll up at (x, y)
    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.dispatch(x, y, |r| r.on_scroll_up.as_ref())
    }

    /// Find the action to dispatch for a scroll down at (x, y)
    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.dispatch(x, y, |r| r.on_scroll_down.as_ref())
    }

    /// Whether a left press at (x, y) starts a drag.
    pub fn is_draggable(&self, x: u16, y: u16) -> bool {
        self.regions.iter().any(|r| r.draggable && r.contains(x, y))
    }
}
