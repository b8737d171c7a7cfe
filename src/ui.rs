use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use hpicker::tui::theme::*;
use hpicker::{HPickerView, PickerItem};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let layout = Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Min(0),    // Spacing
        Constraint::Length(3), // Picker
        Constraint::Length(1), // Status
        Constraint::Min(0),    // Spacing
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    let title = Line::styled(
        "HPicker",
        Style::new().fg(HIGHLIGHT).add_modifier(Modifier::BOLD),
    )
    .centered();
    frame.render_widget(Paragraph::new(title), layout[0]);

    // Regions are rebuilt every frame
    app.interactions.clear();
    let view = HPickerView::new()
        .units_per_cell(app.units_per_cell)
        .interactions(&mut app.interactions);
    frame.render_stateful_widget(view, layout[2], &mut app.picker);

    let status = Line::from(vec![
        Span::styled("selected ", Style::new().fg(TEXT_DIM)),
        Span::styled(app.picker.selection().title().to_string(), Style::new().fg(ACCENT)),
        Span::styled(" · changes ", Style::new().fg(TEXT_DIM)),
        Span::styled(app.changes.get().to_string(), Style::new().fg(PRIMARY)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(status), layout[3]);

    render_hotkeys(frame, layout[5]);
}

fn render_hotkeys(frame: &mut Frame, area: ratatui::layout::Rect) {
    let hotkeys = Line::from(vec![
        Span::styled("[←/→]", Style::new().fg(PRIMARY)),
        Span::styled(" select · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[click]", Style::new().fg(PRIMARY)),
        Span::styled(" pick · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[drag]", Style::new().fg(PRIMARY)),
        Span::styled(" swipe · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[q]", Style::new().fg(PRIMARY)),
        Span::styled(" quit", Style::new().fg(TEXT_DIM)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hotkeys), area);
}
