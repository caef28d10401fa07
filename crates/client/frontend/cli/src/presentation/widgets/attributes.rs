//! Attribute panel: value and modifier per attribute.

use client_frontend_core::view_model::{PresentationMapper, SheetViewModel, format_modifier};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
};

use super::panel_block;
use crate::presentation::theme::RatatuiTheme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view_model: &SheetViewModel,
    cursor: usize,
    focused: bool,
    theme: &RatatuiTheme,
) {
    let items: Vec<ListItem> = view_model
        .attributes
        .iter()
        .map(|row| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<4}", row.attribute.abbreviation())),
                Span::raw(format!("{:<13}", row.attribute.to_string())),
                Span::raw(format!("{:>3} ", row.value)),
                Span::styled(
                    format!("({})", format_modifier(row.modifier)),
                    theme.style_modifier(row.modifier),
                ),
            ]))
        })
        .collect();

    let totals = &view_model.totals;
    let title = format!("Attributes {}/{}", totals.attribute_total, totals.attribute_cap);

    let mut list = List::new(items).block(panel_block(title, focused, theme));
    if focused {
        list = list.highlight_style(theme.highlight());
    }

    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut state);
}
