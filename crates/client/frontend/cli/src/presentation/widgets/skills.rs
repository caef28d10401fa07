//! Skill panel: allocated points, governing modifier and total.

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
        .skills
        .iter()
        .map(|skill| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<16}", skill.name)),
                Span::raw(format!("{:<4}", skill.attribute.abbreviation())),
                Span::raw(format!("{:>2} ", skill.points)),
                Span::styled(
                    format!("{:>3}", format_modifier(skill.modifier)),
                    theme.style_modifier(skill.modifier),
                ),
                Span::raw(" = "),
                Span::styled(
                    format!("{:>3}", skill.total),
                    theme.style_modifier(skill.total),
                ),
            ]))
        })
        .collect();

    let title = format!("Skills ({} points available)", view_model.totals.available_skill_points);

    let mut list = List::new(items).block(panel_block(title, focused, theme));
    if focused {
        list = list.highlight_style(theme.highlight());
    }

    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut state);
}
