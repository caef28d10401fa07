//! Skill definitions.

use crate::attribute::Attribute;

/// A named capability whose total is its allocated points plus the modifier
/// of one linked attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDefinition {
    pub name: String,
    /// Attribute whose modifier is added to the skill total.
    pub attribute: Attribute,
}

impl SkillDefinition {
    pub fn new(name: impl Into<String>, attribute: Attribute) -> Self {
        Self {
            name: name.into(),
            attribute,
        }
    }
}
