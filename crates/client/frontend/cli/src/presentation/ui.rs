//! UI rendering entry point.
//!
//! Composes all panel widgets into the full terminal layout.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::{
    config::NoticePanel,
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::{AppState, Focus},
};
use client_frontend_core::{message::MessageLog, view_model::SheetViewModel};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view_model: &'a SheetViewModel,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub notices: NoticePanel,
}

/// Render the terminal UI from the view model.
pub fn render_with_view_model(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme::new();
    terminal.draw(|frame| render_sheet_ui(frame, ctx, &theme))?;
    Ok(())
}

/// Header, three panel columns, notices and footer.
fn render_sheet_ui(frame: &mut ratatui::Frame, ctx: &RenderContext, theme: &RatatuiTheme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                          // Header
            Constraint::Min(10),                            // Panels
            Constraint::Length(ctx.notices.panel_height()), // Notices
            Constraint::Length(2),                          // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, rows[0], ctx.view_model, theme);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28), // Attributes
            Constraint::Percentage(32), // Classes + details
            Constraint::Percentage(40), // Skills
        ])
        .split(rows[1]);

    let focus = ctx.app_state.focus;
    widgets::attributes::render(
        frame,
        columns[0],
        ctx.view_model,
        ctx.app_state.cursor(Focus::Attributes),
        focus == Focus::Attributes,
        theme,
    );

    let class_column = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(columns[1]);
    widgets::classes::render(
        frame,
        class_column[0],
        ctx.view_model,
        ctx.app_state.cursor(Focus::Classes),
        focus == Focus::Classes,
        theme,
    );
    widgets::class_details::render(
        frame,
        class_column[1],
        ctx.view_model.class_details.as_ref(),
        theme,
    );

    widgets::skills::render(
        frame,
        columns[2],
        ctx.view_model,
        ctx.app_state.cursor(Focus::Skills),
        focus == Focus::Skills,
        theme,
    );

    let visible = usize::from(ctx.notices.rows());
    widgets::messages::render(frame, rows[2], ctx.messages, visible, theme);

    widgets::footer::render(frame, rows[3], focus);
}
