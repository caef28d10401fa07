//! ViewModelUpdater service layer for delta-based incremental updates.
//!
//! - `UpdateScope`: Bitflags tracking which parts of the view model changed
//! - `ViewModelUpdater`: Stateless service applying command events to the view model

use bitflags::bitflags;
use sheet_core::{CharacterSheet, SheetDelta};

use crate::event::CommandEvent;
use crate::view_model::SheetViewModel;

bitflags! {
    /// Tracks which parts of the view model have been updated.
    ///
    /// Widgets can skip rendering panels whose scope is not set.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct UpdateScope: u8 {
        /// Attribute values or modifiers changed.
        const ATTRIBUTES    = 1 << 0;

        /// Class eligibility or selection changed.
        const CLASSES       = 1 << 1;

        /// Skill allocations or totals changed.
        const SKILLS        = 1 << 2;

        /// Header counters (attribute total, skill pool) changed.
        const TOTALS        = 1 << 3;

        /// Everything changed (full rebuild).
        const ALL = Self::ATTRIBUTES.bits()
                  | Self::CLASSES.bits()
                  | Self::SKILLS.bits()
                  | Self::TOTALS.bits();
    }
}

impl Default for UpdateScope {
    fn default() -> Self {
        Self::empty()
    }
}

/// Interprets command events and refreshes only the affected view sections.
pub struct ViewModelUpdater;

impl ViewModelUpdater {
    /// Update the view model after `event`.
    ///
    /// Returns the sections that were refreshed.
    pub fn update(
        view_model: &mut SheetViewModel,
        event: &CommandEvent<'_>,
        sheet: &CharacterSheet,
    ) -> UpdateScope {
        match event {
            CommandEvent::Executed { outcome, .. } => {
                Self::apply_delta(view_model, outcome.delta, sheet)
            }
            // Rejections are rolled back by the engine.
            CommandEvent::Rejected { .. } => UpdateScope::empty(),
            CommandEvent::Reset => {
                view_model.rebuild_from_sheet(sheet);
                UpdateScope::ALL
            }
        }
    }

    /// Maps sheet sections onto view sections.
    ///
    /// An empty delta is a no-op command (e.g. decrementing at zero), so
    /// nothing is refreshed.
    pub fn apply_delta(
        view_model: &mut SheetViewModel,
        delta: SheetDelta,
        sheet: &CharacterSheet,
    ) -> UpdateScope {
        let scope = Self::scope_for(delta);

        if scope.contains(UpdateScope::ATTRIBUTES) {
            view_model.refresh_attributes(sheet);
        }
        if scope.contains(UpdateScope::CLASSES) {
            view_model.refresh_classes(sheet);
        }
        if scope.contains(UpdateScope::SKILLS) {
            view_model.refresh_skills(sheet);
        }
        if scope.contains(UpdateScope::TOTALS) {
            view_model.refresh_totals(sheet);
        }

        scope
    }

    /// Sections of the view that depend on the given sheet sections.
    pub fn scope_for(delta: SheetDelta) -> UpdateScope {
        let mut scope = UpdateScope::empty();

        // Attributes feed modifiers, eligibility and skill totals.
        if delta.affects_derived() {
            scope |= UpdateScope::ATTRIBUTES
                | UpdateScope::CLASSES
                | UpdateScope::SKILLS
                | UpdateScope::TOTALS;
        }
        if delta.contains(SheetDelta::SKILL_POINTS) {
            scope |= UpdateScope::TOTALS;
        }
        if delta.contains(SheetDelta::SKILLS) {
            scope |= UpdateScope::SKILLS | UpdateScope::TOTALS;
        }
        if delta.contains(SheetDelta::SELECTION) {
            scope |= UpdateScope::CLASSES;
        }

        scope
    }
}
