//! Drag gesture state machine.
//!
//! A drag can move the selection by at most one item. Once the horizontal
//! translation crosses the threshold the gesture is marked as fired and
//! further movement is ignored until the pointer is released.

/// Horizontal translation needed before a drag changes the selection.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 100.0;

/// Whether the current drag has already changed the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Fired,
}

/// Which neighbour a fired drag selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragDirection {
    /// Dragged right, towards the start of the list
    Previous,
    /// Dragged left, towards the end of the list
    Next,
}

#[derive(Debug, Clone)]
pub struct DragGesture {
    state: DragState,
    threshold: f32,
    /// Pointer position where the current drag started
    origin: Option<f32>,
    /// Largest distance the pointer travelled from the origin
    travelled: f32,
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD)
    }
}

impl DragGesture {
    pub fn new(threshold: f32) -> Self {
        Self {
            state: DragState::Idle,
            threshold,
            origin: None,
            travelled: 0.0,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold;
    }

    /// True between `begin` and `end`.
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// True if the pointer moved at all during the current drag.
    pub fn has_moved(&self) -> bool {
        self.travelled > 0.0
    }

    /// Start tracking a drag at pointer position `x`. Any drag still running
    /// (its release never arrived) is dropped.
    pub fn begin(&mut self, x: f32) {
        self.state = DragState::Idle;
        self.origin = Some(x);
        self.travelled = 0.0;
    }

    /// Feed a pointer movement. Returns a direction the first time the
    /// translation exceeds the threshold during this drag.
    ///
    /// A movement without a preceding `begin` starts the drag at `x`.
    pub fn update(&mut self, x: f32) -> Option<DragDirection> {
        let origin = *self.origin.get_or_insert(x);
        let translation = x - origin;
        self.travelled = self.travelled.max(translation.abs());

        if self.state == DragState::Fired {
            return None;
        }

        let direction = if translation > self.threshold {
            DragDirection::Previous
        } else if translation < -self.threshold {
            DragDirection::Next
        } else {
            return None;
        };

        self.state = DragState::Fired;
        Some(direction)
    }

    /// Finish the drag, whatever the final translation was.
    pub fn end(&mut self) {
        self.state = DragState::Idle;
        self.origin = None;
        self.travelled = 0.0;
    }
}
