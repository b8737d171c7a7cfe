//! Stateful ratatui widget drawing an `HPicker`.

use std::time::Instant;

use ratatui::{buffer::Buffer, layout::Rect, widgets::StatefulWidget};

use crate::events::Action;
use crate::picker::{HPicker, Picker, PickerItem};

use super::interaction::{ClickRegion, InteractionRegistry, InteractiveRegion};
use super::item_view::{ItemContent, ItemView, default_content};
use super::DEFAULT_UNITS_PER_CELL;

/// Draws the picker's items in a single row, the selected item centered.
///
/// Each render measures items that have not reported a width yet, so the
/// first frame already lays out with real widths. When an
/// [`InteractionRegistry`] is attached, every visible item registers a tap
/// region and the whole area registers as draggable.
///
/// # Example
///
/// ```ignore
/// app.interactions.clear();
/// let view = HPickerView::new()
///     .units_per_cell(config.units_per_cell())
///     .interactions(&mut app.interactions);
/// frame.render_stateful_widget(view, area, &mut app.picker);
/// ```
pub struct HPickerView<'a, T: PickerItem> {
    content: Option<&'a ItemContent<'a, T>>,
    units_per_cell: f32,
    now: Instant,
    interactions: Option<&'a mut InteractionRegistry>,
}

impl<T: PickerItem> Default for HPickerView<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: PickerItem> HPickerView<'a, T> {
    pub fn new() -> Self {
        Self {
            content: None,
            units_per_cell: DEFAULT_UNITS_PER_CELL,
            now: Instant::now(),
            interactions: None,
        }
    }

    /// Use a custom renderer for item content instead of the bold title.
    pub fn content(mut self, content: &'a ItemContent<'a, T>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn units_per_cell(mut self, units_per_cell: f32) -> Self {
        self.units_per_cell = units_per_cell;
        self
    }

    /// Frame time used to sample a running transition.
    pub fn at(mut self, now: Instant) -> Self {
        self.now = now;
        self
    }

    pub fn interactions(mut self, registry: &'a mut InteractionRegistry) -> Self {
        self.interactions = Some(registry);
        self
    }
}

impl<T: PickerItem> StatefulWidget for HPickerView<'_, T> {
    type State = HPicker<T>;

    fn render(self, area: Rect, buf: &mut Buffer, picker: &mut HPicker<T>) {
        if area.is_empty() {
            return;
        }

        let fallback = default_content::<T>;
        let content: &ItemContent<'_, T> = match self.content {
            Some(content) => content,
            None => &fallback,
        };

        let views: Vec<ItemView<T>> = picker
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| ItemView::new(item, index, picker.is_selected(item), content))
            .collect();

        for view in &views {
            view.report_width(picker, self.units_per_cell);
        }

        let container_width = f32::from(area.width) * self.units_per_cell;
        let centers: Vec<f32> = picker
            .items()
            .iter()
            .map(|item| {
                picker.animated_x_position(item, container_width, self.now) / self.units_per_cell
            })
            .collect();
        let row = area.y + area.height / 2;

        let mut interactions = self.interactions;
        if let Some(registry) = interactions.as_deref_mut() {
            registry.register(
                InteractiveRegion::draggable("hpicker", ClickRegion::from(area))
                    .with_scroll(Action::SelectPrevious, Action::SelectNext),
            );
        }

        for (view, center) in views.into_iter().zip(centers) {
            let index = view.index();
            let Some(rect) = view.render(center, row, area, buf) else {
                continue;
            };
            if let Some(registry) = interactions.as_deref_mut() {
                registry.register(
                    InteractiveRegion::clickable(
                        "hpicker_item",
                        ClickRegion::from(rect),
                        Action::Tap(index),
                    )
                    .with_priority(1),
                );
            }
        }

        picker.finish_transition(self.now);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::text::Line;

    use super::*;
    use crate::picker::NoFeedback;
    use crate::picker::test_support::{Mode, modes};
    use crate::tui::theme::{ACCENT, PRIMARY};

    fn one_two_three(selected: &'static str) -> HPicker<Mode> {
        HPicker::new(modes(&["One", "Two", "Three"]), Mode(selected))
            .unwrap()
            .with_feedback(Box::new(NoFeedback))
            .with_transition_duration(Duration::ZERO)
            .with_item_gap(2.0)
    }

    fn render(picker: &mut HPicker<Mode>, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, 3);
        let mut buf = Buffer::empty(area);
        HPickerView::<Mode>::new()
            .units_per_cell(1.0)
            .render(area, &mut buf, picker);
        buf
    }

    fn row_text(buf: &Buffer, row: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, row)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_selected_item_is_centered() {
        let mut picker = one_two_three("Two");
        let buf = render(&mut picker, 21);

        assert_eq!(row_text(&buf, 0).trim(), "");
        assert_eq!(row_text(&buf, 1), "    One  Two  Three  ");
        assert_eq!(row_text(&buf, 2).trim(), "");
        assert_eq!(buf[(9, 1)].fg, ACCENT);
        assert_eq!(buf[(4, 1)].fg, PRIMARY);
    }

    #[test]
    fn test_first_render_measures_every_item() {
        let mut picker = one_two_three("One");
        render(&mut picker, 21);

        assert_eq!(picker.widths().width(&"Three"), 5.0);
        // 1.5 + 3 + 2.5 + 2 * 2
        assert_eq!(picker.offset(&Mode("Three")), 11.0);
    }

    #[test]
    fn test_items_clip_at_both_edges() {
        let mut picker = one_two_three("One");
        assert_eq!(row_text(&render(&mut picker, 9), 1), "   One  T");

        let mut picker = one_two_three("Three");
        assert_eq!(row_text(&render(&mut picker, 11), 1), "o  Three   ");
    }

    #[test]
    fn test_registers_tap_and_drag_regions() {
        let mut picker = one_two_three("Two");
        let mut registry = InteractionRegistry::new();
        let area = Rect::new(0, 0, 21, 3);
        let mut buf = Buffer::empty(area);

        HPickerView::<Mode>::new()
            .units_per_cell(1.0)
            .interactions(&mut registry)
            .render(area, &mut buf, &mut picker);

        assert_eq!(registry.len(), 4);
        assert!(matches!(registry.handle_click(10, 1), Action::Tap(1)));
        assert!(matches!(registry.handle_click(15, 1), Action::Tap(2)));
        assert!(matches!(registry.handle_click(8, 1), Action::None));
        assert!(registry.is_draggable(0, 0));
        assert!(matches!(registry.handle_scroll_down(0, 2), Action::SelectNext));
    }

    #[test]
    fn test_custom_content_is_measured() {
        let mut picker = one_two_three("Two");
        let brackets = |mode: &Mode, selected: bool| {
            if selected {
                Line::raw(format!("[{}]", mode.0))
            } else {
                Line::raw(mode.0)
            }
        };
        let area = Rect::new(0, 0, 21, 3);
        let mut buf = Buffer::empty(area);

        HPickerView::<Mode>::new()
            .content(&brackets)
            .units_per_cell(1.0)
            .render(area, &mut buf, &mut picker);

        assert_eq!(picker.widths().width(&"Two"), 5.0);
        assert_eq!(row_text(&buf, 1), "   One  [Two]  Three ");
    }

    #[test]
    fn test_empty_area_is_ignored() {
        let mut picker = one_two_three("Two");
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);

        HPickerView::<Mode>::new().render(area, &mut buf, &mut picker);
        assert!(picker.widths().is_empty());
    }
}
