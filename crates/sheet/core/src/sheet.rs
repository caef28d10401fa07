//! Owned character sheet: catalog, rules, and state in one value.

use crate::attribute::Attribute;
use crate::catalog::{Catalog, ClassDefinition, ClassId, SkillDefinition, SkillId};
use crate::command::SheetCommand;
use crate::config::SheetConfig;
use crate::engine::{ExecuteError, ExecutionOutcome, SheetEngine};
use crate::env::SheetEnv;
use crate::rules;
use crate::state::SheetState;

/// A character sheet a presentation layer can hold and mutate.
///
/// Every mutating method runs through [`SheetEngine`], so derived values
/// (attribute total, available skill points) are consistent with the
/// attribute values by the time a method returns. Independent sheets share
/// nothing and can live side by side.
#[derive(Clone, Debug)]
pub struct CharacterSheet {
    catalog: Catalog,
    config: SheetConfig,
    state: SheetState,
}

impl CharacterSheet {
    pub fn new(catalog: Catalog, config: SheetConfig) -> Self {
        let state = SheetState::new(&catalog, &config);
        Self {
            catalog,
            config,
            state,
        }
    }

    /// Sheet over the built-in catalog with default rules.
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin(), SheetConfig::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn state(&self) -> &SheetState {
        &self.state
    }

    /// Executes a command through the engine.
    pub fn execute(&mut self, command: SheetCommand) -> Result<ExecutionOutcome, ExecuteError> {
        let env = SheetEnv::new(&self.catalog, &self.config);
        SheetEngine::new(&mut self.state).execute(env, &command)
    }

    /// Returns the sheet to its initial all-zero state.
    pub fn reset(&mut self) {
        self.state = SheetState::new(&self.catalog, &self.config);
        tracing::debug!("sheet reset");
    }

    // ===== mutations =====

    pub fn increment_attribute(
        &mut self,
        attribute: Attribute,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(SheetCommand::increment_attribute(attribute))
    }

    pub fn decrement_attribute(
        &mut self,
        attribute: Attribute,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(SheetCommand::decrement_attribute(attribute))
    }

    pub fn select_class(&mut self, class: ClassId) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(SheetCommand::select_class(class))
    }

    pub fn increment_skill(&mut self, skill: SkillId) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(SheetCommand::increment_skill(skill))
    }

    pub fn decrement_skill(&mut self, skill: SkillId) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(SheetCommand::decrement_skill(skill))
    }

    // ===== queries =====

    pub fn attribute(&self, attribute: Attribute) -> i32 {
        self.state.attribute(attribute)
    }

    pub fn attribute_modifier(&self, attribute: Attribute) -> i32 {
        self.state.attributes.modifier(attribute)
    }

    pub fn attribute_total(&self) -> i32 {
        self.state.attribute_total()
    }

    pub fn available_skill_points(&self) -> i32 {
        self.state.available_skill_points
    }

    pub fn spent_skill_points(&self) -> i32 {
        self.state.spent_skill_points()
    }

    pub fn allocated_points(&self, skill: SkillId) -> Option<i32> {
        self.state.allocated(skill)
    }

    /// The expanded class and its definition.
    pub fn selected_class(&self) -> Option<(ClassId, &ClassDefinition)> {
        let id = self.state.selected_class?;
        self.catalog.class(id).map(|class| (id, class))
    }

    /// `None` for an id outside the catalog.
    pub fn is_eligible(&self, class: ClassId) -> Option<bool> {
        self.catalog
            .class(class)
            .map(|definition| rules::is_eligible(&self.state.attributes, definition))
    }

    pub fn eligible_classes(&self) -> impl Iterator<Item = (ClassId, &ClassDefinition)> + '_ {
        self.catalog
            .classes()
            .filter(|(_, class)| rules::is_eligible(&self.state.attributes, class))
    }

    /// Allocated points plus the linked attribute's modifier.
    pub fn skill_total(&self, skill: SkillId) -> Option<i32> {
        let definition: &SkillDefinition = self.catalog.skill(skill)?;
        let allocated = self.state.allocated(skill)?;
        Some(rules::skill_total(&self.state.attributes, definition, allocated))
    }
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self::builtin()
    }
}
