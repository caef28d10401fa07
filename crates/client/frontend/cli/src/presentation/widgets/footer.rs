//! Footer widget with key hints for the focused panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::state::Focus;

pub fn render(frame: &mut Frame, area: Rect, focus: Focus) {
    let panel_keys = match focus {
        Focus::Attributes | Focus::Skills => "+/→ add  -/← remove",
        Focus::Classes => "Enter/Space select",
    };

    let lines = vec![
        Line::from(format!(
            "[{}] ↑/↓ move  {}  Tab/Shift-Tab switch panel",
            focus.title(),
            panel_keys
        )),
        Line::from("r reset  q/Esc quit").style(Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
