//! Class definitions and their attribute requirements.

use std::collections::BTreeMap;

use crate::attribute::{Attribute, AttributeSet};

/// Minimum attribute values a character must meet to qualify for a class.
///
/// Entries iterate in attribute display order. An empty set of requirements
/// is trivially met.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Requirements {
    minimums: BTreeMap<Attribute, i32>,
}

impl Requirements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same minimum for every attribute.
    pub fn uniform(minimum: i32) -> Self {
        Attribute::ALL.into_iter().map(|a| (a, minimum)).collect()
    }

    /// Builder-style override of a single minimum.
    #[must_use]
    pub fn with(mut self, attribute: Attribute, minimum: i32) -> Self {
        self.minimums.insert(attribute, minimum);
        self
    }

    pub fn get(&self, attribute: Attribute) -> Option<i32> {
        self.minimums.get(&attribute).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        self.minimums.iter().map(|(attribute, minimum)| (*attribute, *minimum))
    }

    pub fn len(&self) -> usize {
        self.minimums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minimums.is_empty()
    }

    /// True iff every minimum is met or exceeded by `attributes`.
    pub fn is_met_by(&self, attributes: &AttributeSet) -> bool {
        self.iter()
            .all(|(attribute, minimum)| attributes.get(attribute) >= minimum)
    }
}

impl FromIterator<(Attribute, i32)> for Requirements {
    fn from_iter<I: IntoIterator<Item = (Attribute, i32)>>(iter: I) -> Self {
        Self {
            minimums: iter.into_iter().collect(),
        }
    }
}

/// A named archetype with minimum-attribute eligibility requirements.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassDefinition {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub requirements: Requirements,
}

impl ClassDefinition {
    pub fn new(name: impl Into<String>, requirements: Requirements) -> Self {
        Self {
            name: name.into(),
            requirements,
        }
    }
}
