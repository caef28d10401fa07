//! Class list with eligibility and selection markers.

use client_frontend_core::view_model::{PresentationMapper, SheetViewModel};
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
        .classes
        .iter()
        .map(|class| {
            let marker = if class.selected { "[x] " } else { "[ ] " };
            let status = if class.eligible { "" } else { "  (ineligible)" };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    class.name.clone(),
                    theme.style_class(class.eligible, class.selected),
                ),
                Span::raw(status),
            ]))
        })
        .collect();

    let title = format!("Classes ({} eligible)", view_model.eligible_count());

    let mut list = List::new(items).block(panel_block(title, focused, theme));
    if focused {
        list = list.highlight_style(theme.highlight());
    }

    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut state);
}
