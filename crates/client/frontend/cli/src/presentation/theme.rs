//! Ratatui theme implementation of PresentationMapper.

use client_frontend_core::{message::MessageLevel, view_model::PresentationMapper};
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme implementing PresentationMapper.
///
/// This provides consistent color schemes and styling rules for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    fn style_modifier(&self, modifier: i32) -> Self::Style {
        let color = match modifier {
            m if m > 0 => Color::Green,
            0 => Color::Gray,
            -2..=-1 => Color::Yellow,
            _ => Color::LightRed,
        };
        Style::default().fg(color)
    }

    fn style_class(&self, eligible: bool, selected: bool) -> Self::Style {
        let mut style = if eligible {
            Style::default().fg(Color::LightGreen)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if selected {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    fn style_requirement(&self, met: bool) -> Self::Style {
        if met {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::LightRed)
        }
    }

    fn style_border(&self, focused: bool) -> Self::Style {
        if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl RatatuiTheme {
    /// Create a new RatatuiTheme instance.
    pub fn new() -> Self {
        Self
    }

    /// Highlight for the row under the cursor in the focused panel.
    pub fn highlight(&self) -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(Color::Yellow)
    }
}
