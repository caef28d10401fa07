//! Header widget with sheet-wide counters.

use client_frontend_core::view_model::SheetViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the header panel.
///
/// Displays attribute total against the cap, the skill pool and the
/// selected class.
pub fn render(frame: &mut Frame, area: Rect, view_model: &SheetViewModel, theme: &RatatuiTheme) {
    let totals = &view_model.totals;
    let at_cap = totals.attribute_headroom() == 0;

    let class_name = view_model
        .selected_class()
        .map(|class| class.name.as_str())
        .unwrap_or("none");

    let text = vec![Line::from(vec![
        Span::raw("Attribute points: "),
        Span::styled(
            format!("{}/{}", totals.attribute_total, totals.attribute_cap),
            if at_cap {
                Style::default().fg(Color::LightRed)
            } else {
                theme.accent()
            },
        ),
        Span::raw(" | Skill points: "),
        Span::styled(
            totals.available_skill_points.to_string(),
            Style::default().fg(Color::LightGreen),
        ),
        Span::raw(format!(" available, {} spent", totals.spent_skill_points)),
        Span::raw(" | Class: "),
        Span::styled(
            class_name,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Character"));

    frame.render_widget(paragraph, area);
}
