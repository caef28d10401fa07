//! Command dispatch through the three-phase pipeline.

use crate::command::{SheetCommand, SheetTransition};
use crate::env::SheetEnv;
use crate::state::SheetState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the sheet state
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut SheetState,
    env: &SheetEnv<'_>,
) -> Result<(), TransitionPhaseError<T::Error>>
where
    T: SheetTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))
}

/// Routes a command to its transition. Used by `SheetEngine::execute()`.
pub(super) fn execute_transition(
    command: &SheetCommand,
    state: &mut SheetState,
    env: &SheetEnv<'_>,
) -> Result<(), ExecuteError> {
    match command {
        SheetCommand::IncrementAttribute(t) => {
            drive_transition(t, state, env).map_err(ExecuteError::Attribute)
        }
        SheetCommand::DecrementAttribute(t) => {
            drive_transition(t, state, env).map_err(ExecuteError::Attribute)
        }
        SheetCommand::SelectClass(t) => {
            drive_transition(t, state, env).map_err(ExecuteError::Class)
        }
        SheetCommand::IncrementSkill(t) => {
            drive_transition(t, state, env).map_err(ExecuteError::Skill)
        }
        SheetCommand::DecrementSkill(t) => {
            drive_transition(t, state, env).map_err(ExecuteError::Skill)
        }
    }
}
