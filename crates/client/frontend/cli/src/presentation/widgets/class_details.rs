//! Requirement breakdown for the selected class.

use client_frontend_core::view_model::{ClassDetailsView, PresentationMapper};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::panel_block;
use crate::presentation::theme::RatatuiTheme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    details: Option<&ClassDetailsView>,
    theme: &RatatuiTheme,
) {
    let Some(details) = details else {
        let hint = Paragraph::new("No class selected. Focus Classes and press Enter.")
            .style(Style::default().fg(Color::DarkGray))
            .block(panel_block("Class Details".to_string(), false, theme));
        frame.render_widget(hint, area);
        return;
    };

    let mut lines = vec![Line::from(vec![
        Span::raw("Status: "),
        Span::styled(
            if details.eligible {
                "eligible"
            } else {
                "requirements not met"
            },
            theme.style_requirement(details.eligible),
        ),
    ])];

    if details.requirements.is_empty() {
        lines.push(Line::from("No attribute requirements"));
    }

    for requirement in &details.requirements {
        let met = requirement.is_met();
        lines.push(Line::from(vec![
            Span::raw(format!(
                "{:<4}{:>3}  ",
                requirement.attribute.abbreviation(),
                requirement.minimum
            )),
            Span::styled(
                format!(
                    "{} {}",
                    if met { "ok" } else { "need" },
                    requirement.current
                ),
                theme.style_requirement(met),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(panel_block(
        format!("{} Requirements", details.name),
        false,
        theme,
    ));
    frame.render_widget(paragraph, area);
}
