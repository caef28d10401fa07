//! Command execution pipeline.
//!
//! The [`SheetEngine`] is the authoritative reducer for [`SheetState`]. It
//! drives each command through its transition phases, restores the previous
//! state when any phase fails, and reports which sections changed.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::command::SheetCommand;
use crate::env::SheetEnv;
use crate::error::SheetError;
use crate::state::{SheetDelta, SheetState};

/// Outcome of a successfully executed command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// Sections of the sheet the command changed. Empty for no-ops.
    pub delta: SheetDelta,
}

/// Sheet engine applying commands to borrowed state.
///
/// All state mutations flow through the three-phase pipeline:
/// pre_validate → apply → post_validate
pub struct SheetEngine<'a> {
    state: &'a mut SheetState,
}

impl<'a> SheetEngine<'a> {
    pub fn new(state: &'a mut SheetState) -> Self {
        Self { state }
    }

    /// Executes a command against the state.
    ///
    /// On error the state is rolled back, so a rejected command never leaves
    /// a partial mutation behind.
    pub fn execute(
        &mut self,
        env: SheetEnv<'_>,
        command: &SheetCommand,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let before = self.state.clone();

        if let Err(error) = transition::execute_transition(command, self.state, &env) {
            *self.state = before;
            if error.severity().is_recoverable() {
                tracing::info!(%command, code = error.error_code(), "command rejected: {error}");
            } else {
                tracing::warn!(%command, code = error.error_code(), "command failed: {error}");
            }
            return Err(error);
        }

        let delta = SheetDelta::from_states(&before, self.state);
        tracing::debug!(%command, ?delta, "command applied");
        Ok(ExecutionOutcome { delta })
    }
}
