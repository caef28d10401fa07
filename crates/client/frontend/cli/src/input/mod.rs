//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-intent mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    FocusNext,
    FocusPrevious,
    CursorUp,
    CursorDown,
    /// Add a point to the row under the cursor.
    Increase,
    /// Remove a point from the row under the cursor.
    Decrease,
    /// Select or deselect the class under the cursor.
    Toggle,
    /// Start the sheet over.
    Reset,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into UI intents.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Tab => KeyAction::FocusNext,
            KeyCode::BackTab => KeyAction::FocusPrevious,
            KeyCode::Up => KeyAction::CursorUp,
            KeyCode::Down => KeyAction::CursorDown,
            KeyCode::Right => KeyAction::Increase,
            KeyCode::Left => KeyAction::Decrease,
            KeyCode::Enter => KeyAction::Toggle,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw {
            '+' | '=' => KeyAction::Increase,
            '-' | '_' => KeyAction::Decrease,
            ' ' => KeyAction::Toggle,
            _ => match raw.to_ascii_lowercase() {
                'q' => KeyAction::Quit,
                'r' => KeyAction::Reset,
                'k' => KeyAction::CursorUp,
                'j' => KeyAction::CursorDown,
                'l' => KeyAction::Increase,
                'h' => KeyAction::Decrease,
                _ => KeyAction::None,
            },
        }
    }
}
