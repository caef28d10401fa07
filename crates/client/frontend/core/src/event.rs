//! Utilities for reacting to command results inside UI layers.
use sheet_core::{ExecuteError, ExecutionOutcome, SheetCommand};

use crate::message::MessageLog;

/// Something that happened to the sheet, as seen by a frontend.
#[derive(Clone, Copy, Debug)]
pub enum CommandEvent<'a> {
    Executed {
        command: &'a SheetCommand,
        outcome: &'a ExecutionOutcome,
    },
    Rejected {
        command: &'a SheetCommand,
        error: &'a ExecuteError,
    },
    /// The whole sheet was returned to its starting state.
    Reset,
}

impl<'a> CommandEvent<'a> {
    pub fn from_result(
        command: &'a SheetCommand,
        result: &'a Result<ExecutionOutcome, ExecuteError>,
    ) -> Self {
        match result {
            Ok(outcome) => Self::Executed { command, outcome },
            Err(error) => Self::Rejected { command, error },
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &CommandEvent<'_>) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
}

