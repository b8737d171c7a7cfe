//! Single picker item: content, measurement and drawing.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::picker::{HPicker, PickerItem};
use crate::tui::theme::*;

/// Renders an item's content. The flag tells whether the item is selected.
pub type ItemContent<'a, T> = dyn Fn(&T, bool) -> Line<'static> + 'a;

/// Bold title, accent colored when selected.
pub fn default_content<T: PickerItem>(item: &T, is_selected: bool) -> Line<'static> {
    let color = if is_selected { ACCENT } else { PRIMARY };
    Line::styled(
        item.title().to_string(),
        Style::new().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// One item laid out for the current frame.
#[derive(Debug, Clone)]
pub struct ItemView<T: PickerItem> {
    id: T::Id,
    index: usize,
    line: Line<'static>,
}

impl<T: PickerItem> ItemView<T> {
    pub fn new(item: &T, index: usize, is_selected: bool, content: &ItemContent<'_, T>) -> Self {
        Self {
            id: item.id(),
            index,
            line: content(item, is_selected),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Rendered width in terminal cells.
    pub fn width_cells(&self) -> u16 {
        u16::try_from(self.line.width()).unwrap_or(u16::MAX)
    }

    /// Rendered width in layout units.
    pub fn measured_width(&self, units_per_cell: f32) -> f32 {
        f32::from(self.width_cells()) * units_per_cell
    }

    /// Report this item's width to the picker unless it was already measured
    /// during the current mount. Returns true if a width was reported.
    pub fn report_width(&self, picker: &mut HPicker<T>, units_per_cell: f32) -> bool {
        if picker.is_measured(&self.id) {
            return false;
        }
        picker.report_width(self.id.clone(), self.measured_width(units_per_cell));
        true
    }

    /// Draw the item centered on `center_x` cells from the left of `area`, on
    /// the given row. Parts outside `area` are clipped.
    ///
    /// Returns the visible screen rect, or `None` when nothing is visible.
    pub fn render(self, center_x: f32, row: u16, area: Rect, buf: &mut Buffer) -> Option<Rect> {
        if row < area.top() || row >= area.bottom() {
            return None;
        }

        let width = i32::from(self.width_cells());
        let left = i32::from(area.x) + (center_x - width as f32 / 2.0).round() as i32;
        let right = left + width;

        let visible_left = left.max(i32::from(area.left()));
        let visible_right = right.min(i32::from(area.right()));
        if visible_left >= visible_right {
            return None;
        }

        // Both bounds lie inside `area`, so they fit in u16
        let rect = Rect::new(
            visible_left as u16,
            row,
            (visible_right - visible_left) as u16,
            1,
        );
        let skip = (visible_left - left) as u16;
        Paragraph::new(self.line).scroll((0, skip)).render(rect, buf);
        Some(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::test_support::{Mode, modes};
    use crate::picker::NoFeedback;

    fn row_text(buf: &Buffer, row: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, row)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_default_content_colors_selection() {
        let selected = default_content(&Mode("First"), true);
        let plain = default_content(&Mode("First"), false);

        assert_eq!(selected.width(), 5);
        assert_eq!(selected.style.fg, Some(ACCENT));
        assert_eq!(plain.style.fg, Some(PRIMARY));
        assert!(plain.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_reports_width_once_per_mount() {
        let mut picker = HPicker::new(modes(&["First", "Second"]), Mode("First"))
            .unwrap()
            .with_feedback(Box::new(NoFeedback));
        let view = ItemView::new(&Mode("Second"), 1, false, &default_content::<Mode>);

        assert!(view.report_width(&mut picker, 10.0));
        assert_eq!(picker.widths().width(&"Second"), 60.0);
        assert!(!view.report_width(&mut picker, 1.0));
        assert_eq!(picker.widths().width(&"Second"), 60.0);

        picker.unmount();
        assert!(view.report_width(&mut picker, 1.0));
        assert_eq!(picker.widths().width(&"Second"), 6.0);
    }

    #[test]
    fn test_render_clips_left_edge() {
        let area = Rect::new(0, 0, 6, 1);
        let mut buf = Buffer::empty(area);
        let view = ItemView::new(&Mode("Second"), 0, false, &default_content::<Mode>);

        // Centered at column 1 the item spans -2..4
        let rect = view.render(1.0, 0, area, &mut buf);

        assert_eq!(rect, Some(Rect::new(0, 0, 4, 1)));
        assert_eq!(row_text(&buf, 0), "cond  ");
    }

    #[test]
    fn test_render_clips_right_edge() {
        let area = Rect::new(2, 0, 6, 1);
        let mut buf = Buffer::empty(area);
        let view = ItemView::new(&Mode("Second"), 0, false, &default_content::<Mode>);

        let rect = view.render(5.0, 0, area, &mut buf);

        assert_eq!(rect, Some(Rect::new(4, 0, 4, 1)));
        assert_eq!(row_text(&buf, 0), "  Seco");
    }

    #[test]
    fn test_render_outside_area_draws_nothing() {
        let area = Rect::new(0, 0, 6, 2);
        let mut buf = Buffer::empty(area);
        let view = ItemView::new(&Mode("Second"), 0, false, &default_content::<Mode>);

        assert_eq!(view.clone().render(-10.0, 0, area, &mut buf), None);
        assert_eq!(view.render(3.0, 2, area, &mut buf), None);
        assert_eq!(row_text(&buf, 0), "      ");
    }
}
