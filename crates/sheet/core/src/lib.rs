//! Deterministic character sheet rules shared across frontends.
//!
//! `sheet-core` defines the canonical rules (attributes, classes, skills,
//! point budgets) and exposes pure APIs for any presentation layer. All state
//! mutation flows through [`engine::SheetEngine`]; [`CharacterSheet`] bundles
//! the engine with owned state for callers that do not need the pieces.
pub mod attribute;
pub mod catalog;
pub mod command;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod rules;
pub mod sheet;
pub mod state;

pub use attribute::{Attribute, AttributeSet, modifier};
pub use catalog::{
    Catalog, CatalogError, ClassDefinition, ClassId, Requirements, SkillDefinition, SkillId,
};
pub use command::{
    AttributeError, ClassError, DecrementAttribute, DecrementSkill, IncrementAttribute,
    IncrementSkill, SelectClass, SheetCommand, SheetTransition, SkillError,
};
pub use config::{ConfigError, SheetConfig};
pub use engine::{
    ExecuteError, ExecutionOutcome, SheetEngine, TransitionPhase, TransitionPhaseError,
};
pub use env::SheetEnv;
pub use error::{ErrorSeverity, SheetError};
pub use sheet::CharacterSheet;
pub use state::{SheetDelta, SheetState};
