//! Action enum for decoupling input handling from state changes.

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are applied by the host to its picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,

    // === Selection ===
    /// Select the item at this index
    Tap(usize),
    /// Select the previous item, if any
    SelectPrevious,
    /// Select the next item, if any
    SelectNext,

    // === Drag gesture ===
    /// Left button pressed in a draggable region
    DragBegan {
        /// Pointer column
        column: u16,
        /// Item under the pointer, tapped on release if the pointer never moved
        tap: Option<usize>,
    },
    /// Pointer moved while the button is held
    DragMoved(u16),
    /// Left button released
    DragEnded,

    /// No action
    None,
}
