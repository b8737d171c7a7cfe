//! Picker trait definitions
//!
//! `PickerItem` describes what the picker needs from an item, `Picker`
//! provides the shared index navigation on top of any item list.

use std::hash::Hash;

/// An item that can be shown in a picker.
///
/// Items are owned by the host application. The picker only needs a stable
/// identity to key its layout tables and a title to display.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// enum Mode {
///     First,
///     Second,
/// }
///
/// impl PickerItem for Mode {
///     type Id = &'static str;
///
///     fn id(&self) -> Self::Id {
///         self.title()
///     }
///
///     fn title(&self) -> &str {
///         match self {
///             Mode::First => "First",
///             Mode::Second => "Second",
///         }
///     }
/// }
/// ```
pub trait PickerItem: Clone + PartialEq {
    /// Identity used to key measured widths and offsets
    type Id: Eq + Hash + Clone;

    /// Unique identity of this item within the picker
    fn id(&self) -> Self::Id;

    /// Text shown for this item
    fn title(&self) -> &str;
}

/// A generic picker trait for list selection
///
/// Navigation stops at both ends of the list: moving before the first item or
/// past the last one leaves the selection untouched.
pub trait Picker {
    /// The type of items in the picker
    type Item;

    /// Get the list of items
    fn items(&self) -> &[Self::Item];

    /// Get the current selected index
    fn selected_index(&self) -> usize;

    /// Set the selected index
    fn set_selected_index(&mut self, index: usize);

    /// Get the number of items
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Check if the picker is empty
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Select the next item, no-op on the last item
    fn select_next(&mut self) {
        let next = self.selected_index() + 1;
        if next < self.len() {
            self.set_selected_index(next);
        }
    }

    /// Select the previous item, no-op on the first item
    fn select_prev(&mut self) {
        if let Some(prev) = self.selected_index().checked_sub(1) {
            self.set_selected_index(prev);
        }
    }

    /// Get the currently selected item
    fn selected_item(&self) -> Option<&Self::Item> {
        self.items().get(self.selected_index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ListPicker {
        items: Vec<&'static str>,
        selected: usize,
        writes: usize,
    }

    impl Picker for ListPicker {
        type Item = &'static str;

        fn items(&self) -> &[Self::Item] {
            &self.items
        }

        fn selected_index(&self) -> usize {
            self.selected
        }

        fn set_selected_index(&mut self, index: usize) {
            self.selected = index;
            self.writes += 1;
        }
    }

    fn list(selected: usize) -> ListPicker {
        ListPicker {
            items: vec!["a", "b", "c"],
            selected,
            writes: 0,
        }
    }

    #[test]
    fn test_select_next_stops_at_last() {
        let mut picker = list(1);
        picker.select_next();
        assert_eq!(picker.selected_item(), Some(&"c"));

        picker.select_next();
        assert_eq!(picker.selected_index(), 2);
        assert_eq!(picker.writes, 1);
    }

    #[test]
    fn test_select_prev_stops_at_first() {
        let mut picker = list(1);
        picker.select_prev();
        assert_eq!(picker.selected_item(), Some(&"a"));

        picker.select_prev();
        assert_eq!(picker.selected_index(), 0);
        assert_eq!(picker.writes, 1);
    }

    #[test]
    fn test_empty_picker_navigation_is_noop() {
        let mut picker = ListPicker {
            items: vec![],
            selected: 0,
            writes: 0,
        };
        picker.select_next();
        picker.select_prev();
        assert!(picker.is_empty());
        assert_eq!(picker.writes, 0);
        assert!(picker.selected_item().is_none());
    }
}
