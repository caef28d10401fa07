//! Commands the presentation layer can issue against a sheet.
//!
//! Each command is a small struct implementing [`SheetTransition`]; the
//! [`SheetCommand`] enum is what callers pass to
//! [`SheetEngine::execute`](crate::engine::SheetEngine::execute).

mod attribute;
mod class;
mod skill;

pub use attribute::{AttributeError, DecrementAttribute, IncrementAttribute};
pub use class::{ClassError, SelectClass};
pub use skill::{DecrementSkill, IncrementSkill, SkillError};

use core::fmt;

use crate::attribute::Attribute;
use crate::catalog::{ClassId, SkillId};
use crate::env::SheetEnv;
use crate::state::SheetState;

/// Defines how a command mutates sheet state.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the mutation. Hooks receive
/// read-only access to the catalog and rule config via [`SheetEnv`] and must
/// stay side-effect free.
pub trait SheetTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &SheetState, _env: &SheetEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Mutates the state directly. Implementations may assume that
    /// `pre_validate` has already run successfully.
    fn apply(&self, state: &mut SheetState, env: &SheetEnv<'_>) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &SheetState, _env: &SheetEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A single user interaction against the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetCommand {
    IncrementAttribute(IncrementAttribute),
    DecrementAttribute(DecrementAttribute),
    SelectClass(SelectClass),
    IncrementSkill(IncrementSkill),
    DecrementSkill(DecrementSkill),
}

impl SheetCommand {
    pub const fn increment_attribute(attribute: Attribute) -> Self {
        Self::IncrementAttribute(IncrementAttribute::new(attribute))
    }

    pub const fn decrement_attribute(attribute: Attribute) -> Self {
        Self::DecrementAttribute(DecrementAttribute::new(attribute))
    }

    pub const fn select_class(class: ClassId) -> Self {
        Self::SelectClass(SelectClass::new(class))
    }

    pub const fn increment_skill(skill: SkillId) -> Self {
        Self::IncrementSkill(IncrementSkill::new(skill))
    }

    pub const fn decrement_skill(skill: SkillId) -> Self {
        Self::DecrementSkill(DecrementSkill::new(skill))
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IncrementAttribute(_) => "increment_attribute",
            Self::DecrementAttribute(_) => "decrement_attribute",
            Self::SelectClass(_) => "select_class",
            Self::IncrementSkill(_) => "increment_skill",
            Self::DecrementSkill(_) => "decrement_skill",
        }
    }
}

impl fmt::Display for SheetCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncrementAttribute(cmd) => write!(f, "{}({})", self.as_str(), cmd.attribute),
            Self::DecrementAttribute(cmd) => write!(f, "{}({})", self.as_str(), cmd.attribute),
            Self::SelectClass(cmd) => write!(f, "{}({})", self.as_str(), cmd.class),
            Self::IncrementSkill(cmd) => write!(f, "{}({})", self.as_str(), cmd.skill),
            Self::DecrementSkill(cmd) => write!(f, "{}({})", self.as_str(), cmd.skill),
        }
    }
}
