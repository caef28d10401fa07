use crate::attribute::Attribute;
use crate::env::SheetEnv;
use crate::error::{ErrorSeverity, SheetError};
use crate::state::SheetState;

use super::SheetTransition;

/// Raises one attribute by a single point, subject to the attribute cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IncrementAttribute {
    pub attribute: Attribute,
}

impl IncrementAttribute {
    pub const fn new(attribute: Attribute) -> Self {
        Self { attribute }
    }
}

/// Lowers one attribute by a single point. Silently ignored at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecrementAttribute {
    pub attribute: Attribute,
}

impl DecrementAttribute {
    pub const fn new(attribute: Attribute) -> Self {
        Self { attribute }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeError {
    #[error("Total attribute points cannot exceed {cap}")]
    LimitExceeded { cap: i32, total: i32 },

    #[error("{attribute} dropped below zero ({value})")]
    NegativeValue { attribute: Attribute, value: i32 },

    #[error("attribute total {total} is above the cap of {cap}")]
    TotalOverCap { cap: i32, total: i32 },
}

impl SheetError for AttributeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::LimitExceeded { .. } => ErrorSeverity::Recoverable,
            Self::NegativeValue { .. } | Self::TotalOverCap { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LimitExceeded { .. } => "ATTRIBUTE_LIMIT_EXCEEDED",
            Self::NegativeValue { .. } => "ATTRIBUTE_NEGATIVE_VALUE",
            Self::TotalOverCap { .. } => "ATTRIBUTE_TOTAL_OVER_CAP",
        }
    }
}

impl SheetTransition for IncrementAttribute {
    type Error = AttributeError;

    fn pre_validate(&self, state: &SheetState, env: &SheetEnv<'_>) -> Result<(), Self::Error> {
        let cap = env.config.attribute_cap;
        let total = state.attribute_total();
        if total >= cap {
            return Err(AttributeError::LimitExceeded { cap, total });
        }
        Ok(())
    }

    fn apply(&self, state: &mut SheetState, env: &SheetEnv<'_>) -> Result<(), Self::Error> {
        let value = state.attribute(self.attribute);
        state.attributes.set(self.attribute, value + 1);
        if self.attribute == Attribute::Intelligence {
            state.refresh_available_skill_points(env.config);
        }
        Ok(())
    }

    fn post_validate(&self, state: &SheetState, env: &SheetEnv<'_>) -> Result<(), Self::Error> {
        check_invariants(state, env)
    }
}

impl SheetTransition for DecrementAttribute {
    type Error = AttributeError;

    fn apply(&self, state: &mut SheetState, env: &SheetEnv<'_>) -> Result<(), Self::Error> {
        let value = state.attribute(self.attribute);
        if value <= 0 {
            return Ok(());
        }
        state.attributes.set(self.attribute, value - 1);
        if self.attribute == Attribute::Intelligence {
            state.refresh_available_skill_points(env.config);
        }
        Ok(())
    }

    fn post_validate(&self, state: &SheetState, env: &SheetEnv<'_>) -> Result<(), Self::Error> {
        check_invariants(state, env)
    }
}

fn check_invariants(state: &SheetState, env: &SheetEnv<'_>) -> Result<(), AttributeError> {
    if let Some(attribute) = state.attributes.first_negative() {
        return Err(AttributeError::NegativeValue {
            attribute,
            value: state.attribute(attribute),
        });
    }

    let cap = env.config.attribute_cap;
    let total = state.attribute_total();
    if total > cap {
        return Err(AttributeError::TotalOverCap { cap, total });
    }

    Ok(())
}
