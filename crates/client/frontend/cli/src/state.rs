//! Application state for panel focus and row cursors.

use client_frontend_core::SheetViewModel;
use sheet_core::SheetCommand;

/// Panel that currently receives keyboard input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Attributes,
    Classes,
    Skills,
}

impl Focus {
    const ORDER: [Focus; 3] = [Focus::Attributes, Focus::Classes, Focus::Skills];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn title(self) -> &'static str {
        match self {
            Focus::Attributes => "Attributes",
            Focus::Classes => "Classes",
            Focus::Skills => "Skills",
        }
    }
}

/// Mutable UI state: which panel is focused and where each cursor sits.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub focus: Focus,
    pub attribute_cursor: usize,
    pub class_cursor: usize,
    pub skill_cursor: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Cursor of the panel with `focus`.
    pub fn cursor(&self, focus: Focus) -> usize {
        match focus {
            Focus::Attributes => self.attribute_cursor,
            Focus::Classes => self.class_cursor,
            Focus::Skills => self.skill_cursor,
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.focus {
            Focus::Attributes => &mut self.attribute_cursor,
            Focus::Classes => &mut self.class_cursor,
            Focus::Skills => &mut self.skill_cursor,
        }
    }

    /// Moves the focused cursor up, wrapping to the last row.
    pub fn cursor_up(&mut self, view_model: &SheetViewModel) {
        let len = row_count(view_model, self.focus);
        if len == 0 {
            return;
        }
        let cursor = self.cursor_mut();
        *cursor = (*cursor + len - 1) % len;
    }

    /// Moves the focused cursor down, wrapping to the first row.
    pub fn cursor_down(&mut self, view_model: &SheetViewModel) {
        let len = row_count(view_model, self.focus);
        if len == 0 {
            return;
        }
        let cursor = self.cursor_mut();
        *cursor = (*cursor + 1) % len;
    }

    /// Command that adds a point to the focused row.
    pub fn increase_command(&self, view_model: &SheetViewModel) -> Option<SheetCommand> {
        match self.focus {
            Focus::Attributes => view_model
                .attributes
                .get(self.attribute_cursor)
                .map(|row| SheetCommand::increment_attribute(row.attribute)),
            Focus::Skills => view_model
                .skills
                .get(self.skill_cursor)
                .map(|row| SheetCommand::increment_skill(row.id)),
            Focus::Classes => None,
        }
    }

    /// Command that removes a point from the focused row.
    pub fn decrease_command(&self, view_model: &SheetViewModel) -> Option<SheetCommand> {
        match self.focus {
            Focus::Attributes => view_model
                .attributes
                .get(self.attribute_cursor)
                .map(|row| SheetCommand::decrement_attribute(row.attribute)),
            Focus::Skills => view_model
                .skills
                .get(self.skill_cursor)
                .map(|row| SheetCommand::decrement_skill(row.id)),
            Focus::Classes => None,
        }
    }

    /// Command that toggles the class under the cursor.
    pub fn toggle_command(&self, view_model: &SheetViewModel) -> Option<SheetCommand> {
        match self.focus {
            Focus::Classes => view_model
                .classes
                .get(self.class_cursor)
                .map(|row| SheetCommand::select_class(row.id)),
            Focus::Attributes | Focus::Skills => None,
        }
    }

    /// Keeps cursors inside their panels, e.g. after content changes.
    pub fn clamp(&mut self, view_model: &SheetViewModel) {
        self.attribute_cursor = clamp_index(self.attribute_cursor, view_model.attributes.len());
        self.class_cursor = clamp_index(self.class_cursor, view_model.classes.len());
        self.skill_cursor = clamp_index(self.skill_cursor, view_model.skills.len());
    }
}

fn row_count(view_model: &SheetViewModel, focus: Focus) -> usize {
    match focus {
        Focus::Attributes => view_model.attributes.len(),
        Focus::Classes => view_model.classes.len(),
        Focus::Skills => view_model.skills.len(),
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
