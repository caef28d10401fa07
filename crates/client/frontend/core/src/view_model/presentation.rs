//! Framework-agnostic styling hooks.

use crate::message::MessageLevel;

/// Maps view-model facts onto a frontend's style type.
///
/// Panels ask the mapper how to draw a value rather than hard-coding colors,
/// so a GUI client can reuse the same view model with its own palette.
pub trait PresentationMapper {
    type Style;

    fn style_message(&self, level: MessageLevel) -> Self::Style;

    /// Style for a derived modifier (or skill total).
    fn style_modifier(&self, modifier: i32) -> Self::Style;

    fn style_class(&self, eligible: bool, selected: bool) -> Self::Style;

    fn style_requirement(&self, met: bool) -> Self::Style;

    /// Border style for a panel, highlighted when it has keyboard focus.
    fn style_border(&self, focused: bool) -> Self::Style;
}

/// Signed modifier text: `+2`, `0`, `-5`.
pub fn format_modifier(modifier: i32) -> String {
    if modifier > 0 {
        format!("+{modifier}")
    } else {
        modifier.to_string()
    }
}
