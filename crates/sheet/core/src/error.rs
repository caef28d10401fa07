//! Common error infrastructure for sheet-core.
//!
//! Command-specific errors (`AttributeError`, `SkillError`, `ClassError`) live
//! beside the commands they validate. This module holds the severity scale
//! and the trait that lets frontends treat all of them uniformly.

/// Severity level of an error, used for categorization and presentation.
///
/// - **Recoverable**: a rule rejected the command; show a notice and carry on
/// - **Validation**: the caller passed a handle the catalog does not know
/// - **Internal**: a post-condition failed after mutation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Rule rejection surfaced to the user as a notice.
    ///
    /// Examples: attribute cap reached, no skill points left
    Recoverable,

    /// Invalid input, should not retry without changes.
    ///
    /// Examples: unknown skill id, unknown class id
    Validation,

    /// Unexpected state inconsistency; indicates a bug.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error should be shown to the user as a notice.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all sheet-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - The Display text of a `Recoverable` error is the user-facing notice
pub trait SheetError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant, for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
