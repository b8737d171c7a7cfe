//! Horizontal flow layout for picker items.
//!
//! Every item is placed by the distance from the first item's center to its
//! own center. Widths arrive incrementally as items are measured, so the
//! offsets are rebuilt from scratch whenever the width table changes.

use std::collections::HashMap;
use std::hash::Hash;

use super::traits::PickerItem;

/// Space between the edges of two neighbouring items, in layout units.
pub const DEFAULT_ITEM_GAP: f32 = 35.0;

/// Measured rendered width of each item, keyed by item identity.
#[derive(Debug, Clone, PartialEq)]
pub struct WidthTable<Id: Eq + Hash> {
    widths: HashMap<Id, f32>,
}

impl<Id: Eq + Hash> Default for WidthTable<Id> {
    fn default() -> Self {
        Self {
            widths: HashMap::new(),
        }
    }
}

impl<Id: Eq + Hash> WidthTable<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the width for an item, replacing any earlier measurement.
    pub fn record(&mut self, id: Id, width: f32) {
        self.widths.insert(id, width);
    }

    /// Width of an item, or zero when it has not been measured yet.
    pub fn width(&self, id: &Id) -> f32 {
        self.widths.get(id).copied().unwrap_or(0.0)
    }

    pub fn is_known(&self, id: &Id) -> bool {
        self.widths.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    pub fn clear(&mut self) {
        self.widths.clear();
    }

    /// Drop measurements for identities the predicate rejects.
    pub fn retain(&mut self, mut keep: impl FnMut(&Id) -> bool) {
        self.widths.retain(|id, _| keep(id));
    }
}

/// Horizontal offset of each item's center from the first item's center.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetTable<Id: Eq + Hash> {
    offsets: HashMap<Id, f32>,
}

impl<Id: Eq + Hash> Default for OffsetTable<Id> {
    fn default() -> Self {
        Self {
            offsets: HashMap::new(),
        }
    }
}

impl<Id: Eq + Hash> OffsetTable<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset of an item, or zero when none has been computed for it.
    pub fn offset(&self, id: &Id) -> f32 {
        self.offsets.get(id).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn clear(&mut self) {
        self.offsets.clear();
    }
}

/// Compute the offset of every item from the widths measured so far.
///
/// For the item at index `i` the prefix `items[0..=i]` is walked: the two
/// ends of the prefix contribute half their width, inner items their full
/// width, and unmeasured items nothing. One gap is added between each pair
/// of neighbours. A single-item prefix always yields zero.
///
/// Each prefix is summed independently, which is quadratic in the number of
/// items. Pickers hold a handful of entries so this stays cheap.
pub fn compute_offsets<T: PickerItem>(
    items: &[T],
    widths: &WidthTable<T::Id>,
    gap: f32,
) -> OffsetTable<T::Id> {
    let mut table = OffsetTable::new();

    for (index, item) in items.iter().enumerate() {
        let prefix = &items[..=index];
        table.offsets.insert(item.id(), prefix_distance(prefix, widths, gap));
    }

    table
}

fn prefix_distance<T: PickerItem>(prefix: &[T], widths: &WidthTable<T::Id>, gap: f32) -> f32 {
    if prefix.len() == 1 {
        return 0.0;
    }

    let last = prefix.len() - 1;
    let widths_sum: f32 = prefix
        .iter()
        .enumerate()
        .map(|(position, item)| {
            let width = widths.width(&item.id());
            if position == 0 || position == last {
                width / 2.0
            } else {
                width
            }
        })
        .sum();

    widths_sum + gap * last as f32
}

/// Screen x-coordinate of an item's center inside a container.
///
/// The selected item always lands on the container's horizontal midpoint.
pub fn x_position(item_offset: f32, selection_offset: f32, container_width: f32) -> f32 {
    item_offset - selection_offset + container_width / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::test_support::{Mode, modes};

    fn widths_for(items: &[Mode], values: &[f32]) -> WidthTable<&'static str> {
        let mut table = WidthTable::new();
        for (item, width) in items.iter().zip(values) {
            table.record(item.id(), *width);
        }
        table
    }

    #[test]
    fn test_offsets_for_three_measured_items() {
        let items = modes(&["A", "B", "C"]);
        let widths = widths_for(&items, &[40.0, 60.0, 50.0]);

        let offsets = compute_offsets(&items, &widths, 35.0);

        assert_eq!(offsets.offset(&"A"), 0.0);
        // 40/2 + 60/2 + 35
        assert_eq!(offsets.offset(&"B"), 85.0);
        // 40/2 + 60 + 50/2 + 2 * 35
        assert_eq!(offsets.offset(&"C"), 175.0);
    }

    #[test]
    fn test_offsets_before_any_width_is_known() {
        let items = modes(&["A", "B", "C"]);
        let offsets = compute_offsets(&items, &WidthTable::new(), 35.0);

        assert_eq!(offsets.offset(&"A"), 0.0);
        assert_eq!(offsets.offset(&"B"), 35.0);
        assert_eq!(offsets.offset(&"C"), 70.0);
    }

    #[test]
    fn test_first_item_offset_is_zero_when_only_it_is_measured() {
        let items = modes(&["A", "B"]);
        let widths = widths_for(&items, &[40.0]);

        let offsets = compute_offsets(&items, &widths, 35.0);

        assert_eq!(offsets.offset(&"A"), 0.0);
        assert_eq!(offsets.offset(&"B"), 20.0 + 35.0);
    }

    #[test]
    fn test_single_item_is_always_at_zero() {
        let items = modes(&["Only"]);
        for width in [0.0, 12.5, 400.0] {
            let widths = widths_for(&items, &[width]);
            assert_eq!(compute_offsets(&items, &widths, 35.0).offset(&"Only"), 0.0);
        }
    }

    #[test]
    fn test_offsets_are_monotonic() {
        let items = modes(&["A", "B", "C", "D", "E", "F"]);
        let widths = widths_for(&items, &[50.0, 0.0, 60.0, 10.0, 55.0, 40.0]);

        let offsets = compute_offsets(&items, &widths, DEFAULT_ITEM_GAP);
        let values: Vec<f32> = items.iter().map(|m| offsets.offset(&m.id())).collect();

        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]), "{values:?}");
    }

    #[test]
    fn test_missing_offset_defaults_to_zero() {
        let offsets: OffsetTable<&str> = OffsetTable::new();
        assert_eq!(offsets.offset(&"missing"), 0.0);
    }

    #[test]
    fn test_width_table_retain_and_clear() {
        let items = modes(&["A", "B", "C"]);
        let mut widths = widths_for(&items, &[1.0, 2.0, 3.0]);

        widths.retain(|id| *id != "B");
        assert!(widths.is_known(&"A"));
        assert!(!widths.is_known(&"B"));
        assert_eq!(widths.width(&"B"), 0.0);
        assert_eq!(widths.len(), 2);

        widths.clear();
        assert!(widths.is_empty());
    }

    #[test]
    fn test_selected_item_sits_at_midpoint() {
        for (offset, container) in [(0.0, 80.0), (175.0, 800.0), (42.5, 13.0)] {
            assert_eq!(x_position(offset, offset, container), container / 2.0);
        }
        assert_eq!(x_position(85.0, 0.0, 200.0), 185.0);
        assert_eq!(x_position(0.0, 85.0, 200.0), 15.0);
    }
}
