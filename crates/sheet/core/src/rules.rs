//! Pure derived-value rules.
//!
//! Nothing here touches mutable state; the engine and the view model both
//! call into these so displayed numbers and enforced limits never disagree.

use crate::attribute::{Attribute, AttributeSet, modifier};
use crate::catalog::{ClassDefinition, SkillDefinition};
use crate::config::SheetConfig;

/// Skill points granted by an Intelligence value:
/// `max(0, base + per_modifier * modifier(intelligence))`.
pub fn skill_points_for_intelligence(config: &SheetConfig, intelligence: i32) -> i32 {
    let granted = config
        .skill_points_per_modifier
        .saturating_mul(modifier(intelligence))
        .saturating_add(config.base_skill_points);
    granted.max(0)
}

/// Skill points granted by the Intelligence in `attributes`.
pub fn granted_skill_points(config: &SheetConfig, attributes: &AttributeSet) -> i32 {
    skill_points_for_intelligence(config, attributes.get(Attribute::Intelligence))
}

/// True iff every requirement of `class` is met by `attributes`.
pub fn is_eligible(attributes: &AttributeSet, class: &ClassDefinition) -> bool {
    class.requirements.is_met_by(attributes)
}

/// Allocated points plus the modifier of the skill's linked attribute.
pub fn skill_total(attributes: &AttributeSet, skill: &SkillDefinition, allocated: i32) -> i32 {
    allocated + attributes.modifier(skill.attribute)
}
