//! Built-in reference data used when no content directory is configured.

use crate::attribute::Attribute::{self, *};

use super::{ClassDefinition, Requirements, SkillDefinition};

const BASELINE: i32 = 9;
const PRIMARY: i32 = 14;

const CLASSES: [(&str, Attribute); 3] = [
    ("Barbarian", Strength),
    ("Wizard", Intelligence),
    ("Bard", Charisma),
];

const SKILLS: [(&str, Attribute); 18] = [
    ("Acrobatics", Dexterity),
    ("Animal Handling", Wisdom),
    ("Arcana", Intelligence),
    ("Athletics", Strength),
    ("Deception", Charisma),
    ("History", Intelligence),
    ("Insight", Wisdom),
    ("Intimidation", Charisma),
    ("Investigation", Intelligence),
    ("Medicine", Wisdom),
    ("Nature", Intelligence),
    ("Perception", Wisdom),
    ("Performance", Charisma),
    ("Persuasion", Charisma),
    ("Religion", Intelligence),
    ("Sleight of Hand", Dexterity),
    ("Stealth", Dexterity),
    ("Survival", Wisdom),
];

pub(super) fn classes() -> Vec<ClassDefinition> {
    CLASSES
        .iter()
        .map(|(name, primary)| {
            ClassDefinition::new(
                *name,
                Requirements::uniform(BASELINE).with(*primary, PRIMARY),
            )
        })
        .collect()
}

pub(super) fn skills() -> Vec<SkillDefinition> {
    SKILLS
        .iter()
        .map(|(name, attribute)| SkillDefinition::new(*name, *attribute))
        .collect()
}
