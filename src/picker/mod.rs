//! Horizontal picker
//!
//! `HPicker` holds the state of a horizontally scrolling selector: the item
//! list, the current selection, measured widths and computed offsets, and the
//! gesture state that turns taps and drags into selection changes.
//!
//! Rendering lives in [`crate::tui`]. The picker itself works in abstract
//! layout units and can be driven directly, which is what the tests do.

mod feedback;
mod gesture;
mod layout;
mod traits;
mod transition;

use std::collections::HashSet;
use std::fmt;
use std::time::{Duration, Instant};

pub use feedback::{FeedbackKind, NoFeedback, SelectionFeedback, TerminalBell};
pub use gesture::{DEFAULT_DRAG_THRESHOLD, DragDirection, DragGesture, DragState};
pub use layout::{DEFAULT_ITEM_GAP, OffsetTable, WidthTable, compute_offsets, x_position};
pub use traits::{Picker, PickerItem};
pub use transition::{DEFAULT_TRANSITION, Transition};

use crate::error::{PickerError, Result};
use crate::log;

type ChangeCallback<T> = Box<dyn FnMut(&T)>;

pub struct HPicker<T: PickerItem> {
    items: Vec<T>,
    selected: usize,
    widths: WidthTable<T::Id>,
    offsets: OffsetTable<T::Id>,
    item_gap: f32,
    drag: DragGesture,
    /// Item under the pointer when the current press started
    pending_tap: Option<usize>,
    feedback: Box<dyn SelectionFeedback>,
    transition: Option<Transition>,
    transition_duration: Duration,
    on_change: Option<ChangeCallback<T>>,
}

impl<T: PickerItem> fmt::Debug for HPicker<T>
where
    T: fmt::Debug,
    T::Id: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HPicker")
            .field("items", &self.items)
            .field("selected", &self.selected)
            .field("widths", &self.widths)
            .field("offsets", &self.offsets)
            .field("item_gap", &self.item_gap)
            .field("drag", &self.drag)
            .field("pending_tap", &self.pending_tap)
            .field("transition", &self.transition)
            .finish_non_exhaustive()
    }
}

impl<T: PickerItem> HPicker<T> {
    /// Create a picker over `items` with `selection` initially selected.
    ///
    /// The list must be non-empty, identities must be unique, and the
    /// selection must be one of the items.
    pub fn new(items: Vec<T>, selection: T) -> Result<Self> {
        validate_items(&items)?;
        let selected = position_of(&items, &selection)
            .ok_or_else(|| PickerError::SelectionNotFound(selection.title().to_string()))?;

        let mut picker = Self {
            items,
            selected,
            widths: WidthTable::new(),
            offsets: OffsetTable::new(),
            item_gap: DEFAULT_ITEM_GAP,
            drag: DragGesture::default(),
            pending_tap: None,
            feedback: Box::new(TerminalBell),
            transition: None,
            transition_duration: DEFAULT_TRANSITION,
            on_change: None,
        };
        picker.recalculate();
        Ok(picker)
    }

    pub fn with_item_gap(mut self, gap: f32) -> Self {
        self.item_gap = gap;
        self.recalculate();
        self
    }

    pub fn with_drag_threshold(mut self, threshold: f32) -> Self {
        self.drag.set_threshold(threshold);
        self
    }

    pub fn with_feedback(mut self, feedback: Box<dyn SelectionFeedback>) -> Self {
        self.feedback = feedback;
        self
    }

    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = duration;
        self
    }

    /// Register the callback invoked after every user-driven selection change.
    pub fn on_change(mut self, callback: impl FnMut(&T) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    // === Layout ===

    pub fn item_gap(&self) -> f32 {
        self.item_gap
    }

    pub fn widths(&self) -> &WidthTable<T::Id> {
        &self.widths
    }

    pub fn offsets(&self) -> &OffsetTable<T::Id> {
        &self.offsets
    }

    /// True once a width has been reported for this identity during the
    /// current mount.
    pub fn is_measured(&self, id: &T::Id) -> bool {
        self.widths.is_known(id)
    }

    /// Store a measured width and recompute every offset.
    pub fn report_width(&mut self, id: T::Id, width: f32) {
        self.widths.record(id, width);
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.offsets = compute_offsets(&self.items, &self.widths, self.item_gap);
    }

    pub fn offset(&self, item: &T) -> f32 {
        self.offsets.offset(&item.id())
    }

    /// Center of `item` inside a container of the given width, with the
    /// selected item on the midpoint.
    pub fn x_position(&self, item: &T, container_width: f32) -> f32 {
        x_position(
            self.offset(item),
            self.offset(self.selection()),
            container_width,
        )
    }

    /// Offset currently drawn at the container midpoint. Equals the selected
    /// item's offset unless a transition is running.
    pub fn displayed_offset(&self, now: Instant) -> f32 {
        let target = self.offset(self.selection());
        match &self.transition {
            Some(transition) => transition.value_at(target, now),
            None => target,
        }
    }

    /// Like [`HPicker::x_position`], following the running transition.
    pub fn animated_x_position(&self, item: &T, container_width: f32, now: Instant) -> f32 {
        x_position(self.offset(item), self.displayed_offset(now), container_width)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition
            .as_ref()
            .is_some_and(|transition| !transition.is_finished(now))
    }

    /// Drop a transition that has run to completion.
    pub fn finish_transition(&mut self, now: Instant) {
        if self.transition.is_some_and(|t| t.is_finished(now)) {
            self.transition = None;
        }
    }

    // === Selection ===

    pub fn selection(&self) -> &T {
        &self.items[self.selected]
    }

    pub fn is_selected(&self, item: &T) -> bool {
        self.selection() == item
    }

    /// User-driven selection change: signal feedback, animate towards the
    /// new item and notify the change callback.
    pub fn update_selection(&mut self, item: &T) {
        if let Some(index) = position_of(&self.items, item) {
            self.update_selection_at(index);
        }
    }

    fn update_selection_at(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }

        self.feedback.selection_changed();

        let now = Instant::now();
        let from = self.displayed_offset(now);
        self.transition = Some(Transition::new(from, now, self.transition_duration));
        self.selected = index;

        log::log_event(&format!("selection -> {}", self.items[index].title()));

        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.items[index]);
        }
    }

    /// Tapping an item selects it, wherever it is in the list.
    pub fn tap(&mut self, item: &T) {
        self.update_selection(item);
    }

    pub fn tap_index(&mut self, index: usize) {
        self.update_selection_at(index);
    }

    /// Reassign the selection from the host side.
    ///
    /// This mirrors a write to the bound value, so neither feedback nor the
    /// change callback fire.
    pub fn set_selection(&mut self, item: &T) -> Result<()> {
        let index = position_of(&self.items, item)
            .ok_or_else(|| PickerError::SelectionNotFound(item.title().to_string()))?;
        self.selected = index;
        self.transition = None;
        Ok(())
    }

    /// Replace the item list.
    ///
    /// Measurements of items that are gone are dropped. If the selection is no
    /// longer in the list the first item becomes selected and the change
    /// callback fires.
    pub fn set_items(&mut self, items: Vec<T>) -> Result<()> {
        validate_items(&items)?;

        let previous = self.selection().clone();
        let ids: HashSet<T::Id> = items.iter().map(PickerItem::id).collect();
        self.widths.retain(|id| ids.contains(id));
        self.items = items;
        self.pending_tap = None;
        self.recalculate();

        match position_of(&self.items, &previous) {
            Some(index) => self.selected = index,
            None => {
                self.selected = 0;
                self.transition = None;
                log::log_event(&format!(
                    "selection '{}' removed, falling back to '{}'",
                    previous.title(),
                    self.items[0].title()
                ));
                if let Some(callback) = self.on_change.as_mut() {
                    callback(&self.items[0]);
                }
            }
        }
        Ok(())
    }

    /// Discard per-mount layout state. Items report their widths again on the
    /// next layout pass.
    pub fn unmount(&mut self) {
        self.widths.clear();
        self.offsets.clear();
        self.drag.end();
        self.pending_tap = None;
        self.transition = None;
    }

    // === Gestures ===

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Pointer pressed at `x`, optionally on the item at `tap`.
    pub fn press(&mut self, x: f32, tap: Option<usize>) {
        self.pending_tap = tap;
        self.drag_began(x);
    }

    pub fn drag_began(&mut self, x: f32) {
        self.drag.begin(x);
    }

    /// Pointer moved to `x` during a drag.
    pub fn drag_moved(&mut self, x: f32) {
        let direction = self.drag.update(x);
        if self.drag.has_moved() {
            self.pending_tap = None;
        }

        match direction {
            Some(DragDirection::Previous) => self.select_prev(),
            Some(DragDirection::Next) => self.select_next(),
            None => {}
        }
    }

    /// Pointer released. A press that never moved counts as a tap.
    pub fn drag_ended(&mut self) {
        self.drag.end();
        if let Some(index) = self.pending_tap.take() {
            self.tap_index(index);
        }
    }
}

impl<T: PickerItem> Picker for HPicker<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        &self.items
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn set_selected_index(&mut self, index: usize) {
        self.update_selection_at(index);
    }
}

fn position_of<T: PickerItem>(items: &[T], item: &T) -> Option<usize> {
    items.iter().position(|candidate| candidate == item)
}

fn validate_items<T: PickerItem>(items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(PickerError::EmptyItems);
    }

    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id()) {
            return Err(PickerError::DuplicateItem(item.title().to_string()));
        }
    }
    Ok(())
}
