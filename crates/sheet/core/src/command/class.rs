use crate::catalog::ClassId;
use crate::env::SheetEnv;
use crate::error::{ErrorSeverity, SheetError};
use crate::state::SheetState;

use super::SheetTransition;

/// Toggles the expanded class.
///
/// Selecting the expanded class collapses it; selecting any other class
/// replaces the selection. Eligibility is not checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectClass {
    pub class: ClassId,
}

impl SelectClass {
    pub const fn new(class: ClassId) -> Self {
        Self { class }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassError {
    #[error("unknown class {0}")]
    UnknownClass(ClassId),
}

impl SheetError for ClassError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "CLASS_UNKNOWN"
    }
}

impl SheetTransition for SelectClass {
    type Error = ClassError;

    fn pre_validate(&self, _state: &SheetState, env: &SheetEnv<'_>) -> Result<(), Self::Error> {
        if env.catalog.class(self.class).is_none() {
            return Err(ClassError::UnknownClass(self.class));
        }
        Ok(())
    }

    fn apply(&self, state: &mut SheetState, _env: &SheetEnv<'_>) -> Result<(), Self::Error> {
        state.selected_class = if state.selected_class == Some(self.class) {
            None
        } else {
            Some(self.class)
        };
        Ok(())
    }
}
