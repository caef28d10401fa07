//! Presentation-optimized views of a [`sheet_core::CharacterSheet`].
//!
//! The view model is built once and then refreshed section by section by
//! [`crate::ViewModelUpdater`] as commands report what they changed.
mod core;
mod presentation;
mod rows;

pub use self::core::SheetViewModel;
pub use presentation::{PresentationMapper, format_modifier};
pub use rows::{AttributeView, ClassDetailsView, ClassView, RequirementView, SkillView, TotalsView};
