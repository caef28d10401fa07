//! Error types for the command pipeline.

use crate::command::{AttributeError, ClassError, SkillError};
use crate::error::{ErrorSeverity, SheetError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing a command through the sheet engine.
///
/// The sheet is restored to its pre-command state before any of these is
/// returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("attribute command failed: {0}")]
    Attribute(TransitionPhaseError<AttributeError>),

    #[error("skill command failed: {0}")]
    Skill(TransitionPhaseError<SkillError>),

    #[error("class command failed: {0}")]
    Class(TransitionPhaseError<ClassError>),
}

impl ExecuteError {
    pub fn phase(&self) -> TransitionPhase {
        match self {
            Self::Attribute(e) => e.phase,
            Self::Skill(e) => e.phase,
            Self::Class(e) => e.phase,
        }
    }

    /// The user-facing notice for a rule rejection.
    ///
    /// Returns `None` for validation and internal errors, which indicate a
    /// caller or engine bug rather than something the user did.
    pub fn notice(&self) -> Option<String> {
        if !self.severity().is_recoverable() {
            return None;
        }
        Some(match self {
            Self::Attribute(e) => e.error.to_string(),
            Self::Skill(e) => e.error.to_string(),
            Self::Class(e) => e.error.to_string(),
        })
    }
}

impl SheetError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Attribute(e) => e.error.severity(),
            Self::Skill(e) => e.error.severity(),
            Self::Class(e) => e.error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Attribute(e) => e.error.error_code(),
            Self::Skill(e) => e.error.error_code(),
            Self::Class(e) => e.error.error_code(),
        }
    }
}
