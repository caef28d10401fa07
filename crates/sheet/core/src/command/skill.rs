use crate::catalog::SkillId;
use crate::env::SheetEnv;
use crate::error::{ErrorSeverity, SheetError};
use crate::state::SheetState;

use super::SheetTransition;

/// Spends one available skill point on a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IncrementSkill {
    pub skill: SkillId,
}

impl IncrementSkill {
    pub const fn new(skill: SkillId) -> Self {
        Self { skill }
    }
}

/// Refunds one point from a skill. Silently ignored at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecrementSkill {
    pub skill: SkillId,
}

impl DecrementSkill {
    pub const fn new(skill: SkillId) -> Self {
        Self { skill }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillError {
    #[error("No skill points available to allocate")]
    NoPointsAvailable { skill: SkillId },

    #[error("unknown skill {0}")]
    UnknownSkill(SkillId),

    #[error("{skill} dropped below zero allocated points ({points})")]
    NegativeAllocation { skill: SkillId, points: i32 },
}

impl SheetError for SkillError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoPointsAvailable { .. } => ErrorSeverity::Recoverable,
            Self::UnknownSkill(_) => ErrorSeverity::Validation,
            Self::NegativeAllocation { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoPointsAvailable { .. } => "SKILL_NO_POINTS_AVAILABLE",
            Self::UnknownSkill(_) => "SKILL_UNKNOWN",
            Self::NegativeAllocation { .. } => "SKILL_NEGATIVE_ALLOCATION",
        }
    }
}

/// The skill must exist in both the catalog and the allocation table.
fn ensure_known(skill: SkillId, state: &SheetState, env: &SheetEnv<'_>) -> Result<(), SkillError> {
    if env.catalog.skill(skill).is_none() || state.allocated(skill).is_none() {
        return Err(SkillError::UnknownSkill(skill));
    }
    Ok(())
}

fn ensure_non_negative(skill: SkillId, state: &SheetState) -> Result<(), SkillError> {
    match state.allocated(skill) {
        Some(points) if points < 0 => Err(SkillError::NegativeAllocation { skill, points }),
        Some(_) => Ok(()),
        None => Err(SkillError::UnknownSkill(skill)),
    }
}

impl SheetTransition for IncrementSkill {
    type Error = SkillError;

    fn pre_validate(&self, state: &SheetState, env: &SheetEnv<'_>) -> Result<(), Self::Error> {
        ensure_known(self.skill, state, env)?;
        if state.available_skill_points <= 0 {
            return Err(SkillError::NoPointsAvailable { skill: self.skill });
        }
        Ok(())
    }

    fn apply(&self, state: &mut SheetState, _env: &SheetEnv<'_>) -> Result<(), Self::Error> {
        let points = state
            .skill_points
            .get_mut(self.skill.index())
            .ok_or(SkillError::UnknownSkill(self.skill))?;
        *points += 1;
        state.available_skill_points -= 1;
        Ok(())
    }

    fn post_validate(&self, state: &SheetState, _env: &SheetEnv<'_>) -> Result<(), Self::Error> {
        ensure_non_negative(self.skill, state)
    }
}

impl SheetTransition for DecrementSkill {
    type Error = SkillError;

    fn pre_validate(&self, state: &SheetState, env: &SheetEnv<'_>) -> Result<(), Self::Error> {
        ensure_known(self.skill, state, env)
    }

    fn apply(&self, state: &mut SheetState, _env: &SheetEnv<'_>) -> Result<(), Self::Error> {
        let points = state
            .skill_points
            .get_mut(self.skill.index())
            .ok_or(SkillError::UnknownSkill(self.skill))?;
        if *points <= 0 {
            return Ok(());
        }
        *points -= 1;
        state.available_skill_points += 1;
        Ok(())
    }

    fn post_validate(&self, state: &SheetState, _env: &SheetEnv<'_>) -> Result<(), Self::Error> {
        ensure_non_negative(self.skill, state)
    }
}
