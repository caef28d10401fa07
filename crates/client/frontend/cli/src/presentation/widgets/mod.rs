//! Panel widgets. Each exposes a `render(frame, area, ...)` function.
pub mod attributes;
pub mod class_details;
pub mod classes;
pub mod footer;
pub mod header;
pub mod messages;
pub mod skills;

use ratatui::widgets::{Block, Borders};

use crate::presentation::theme::RatatuiTheme;
use client_frontend_core::view_model::PresentationMapper;

/// Bordered panel block, highlighted when focused.
pub(crate) fn panel_block<'a>(title: String, focused: bool, theme: &RatatuiTheme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.style_border(focused))
        .title(title)
}
