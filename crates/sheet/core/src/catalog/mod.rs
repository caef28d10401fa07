//! Static reference data: classes and skills.
//!
//! A [`Catalog`] is built once (from the built-in tables or a content file)
//! and never mutated afterwards. Sheet state refers to its entries through
//! [`ClassId`] and [`SkillId`] handles, which are indices into the catalog.

mod builtin;
mod class;
mod skill;

pub use class::{ClassDefinition, Requirements};
pub use skill::SkillDefinition;

use std::collections::HashSet;
use std::fmt;

/// Handle to a class in a [`Catalog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassId(pub u16);

/// Handle to a skill in a [`Catalog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillId(pub u16);

impl ClassId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl SkillId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class#{}", self.0)
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skill#{}", self.0)
    }
}

/// Reasons a catalog is rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog defines no skills")]
    NoSkills,

    #[error("catalog defines too many {kind} entries ({count})")]
    TooManyEntries { kind: &'static str, count: usize },

    #[error("{kind} at position {index} has a blank name")]
    BlankName { kind: &'static str, index: usize },

    #[error("duplicate {kind} name '{name}'")]
    DuplicateName { kind: &'static str, name: String },

    #[error("class '{class}' requires negative {attribute} ({minimum})")]
    NegativeRequirement {
        class: String,
        attribute: crate::attribute::Attribute,
        minimum: i32,
    },
}

/// Classes and skills available to a character sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    #[cfg_attr(feature = "serde", serde(default))]
    classes: Vec<ClassDefinition>,
    skills: Vec<SkillDefinition>,
}

impl Catalog {
    /// Builds and validates a catalog.
    pub fn new(
        classes: Vec<ClassDefinition>,
        skills: Vec<SkillDefinition>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self { classes, skills };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Three classes (Barbarian, Wizard, Bard) and the eighteen standard skills.
    pub fn builtin() -> Self {
        Self {
            classes: builtin::classes(),
            skills: builtin::skills(),
        }
    }

    /// Checks names and requirement values.
    ///
    /// Catalogs deserialized directly bypass [`Catalog::new`], so loaders call
    /// this explicitly.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.skills.is_empty() {
            return Err(CatalogError::NoSkills);
        }
        check_names("class", self.classes.iter().map(|c| c.name.as_str()))?;
        check_names("skill", self.skills.iter().map(|s| s.name.as_str()))?;

        for class in &self.classes {
            if let Some((attribute, minimum)) =
                class.requirements.iter().find(|(_, minimum)| *minimum < 0)
            {
                return Err(CatalogError::NegativeRequirement {
                    class: class.name.clone(),
                    attribute,
                    minimum,
                });
            }
        }

        Ok(())
    }

    pub fn classes(&self) -> impl ExactSizeIterator<Item = (ClassId, &ClassDefinition)> + '_ {
        self.classes
            .iter()
            .enumerate()
            .map(|(index, class)| (ClassId(index as u16), class))
    }

    pub fn skills(&self) -> impl ExactSizeIterator<Item = (SkillId, &SkillDefinition)> + '_ {
        self.skills
            .iter()
            .enumerate()
            .map(|(index, skill)| (SkillId(index as u16), skill))
    }

    pub fn class(&self, id: ClassId) -> Option<&ClassDefinition> {
        self.classes.get(id.index())
    }

    pub fn skill(&self, id: SkillId) -> Option<&SkillDefinition> {
        self.skills.get(id.index())
    }

    /// Looks up a class by name, ignoring ASCII case.
    pub fn class_id(&self, name: &str) -> Option<ClassId> {
        self.classes
            .iter()
            .position(|class| class.name.eq_ignore_ascii_case(name))
            .map(|index| ClassId(index as u16))
    }

    /// Looks up a skill by name, ignoring ASCII case.
    pub fn skill_id(&self, name: &str) -> Option<SkillId> {
        self.skills
            .iter()
            .position(|skill| skill.name.eq_ignore_ascii_case(name))
            .map(|index| SkillId(index as u16))
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_names<'a>(
    kind: &'static str,
    names: impl ExactSizeIterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let count = names.len();
    if count > u16::MAX as usize {
        return Err(CatalogError::TooManyEntries { kind, count });
    }

    let mut seen = HashSet::with_capacity(count);
    for (index, name) in names.enumerate() {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::BlankName { kind, index });
        }
        if !seen.insert(name.to_ascii_lowercase()) {
            return Err(CatalogError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}
