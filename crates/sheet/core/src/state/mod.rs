//! Mutable character sheet state.
//!
//! [`SheetState`] is the single source of truth: attribute values, allocated
//! skill points, the unspent skill point pool, and the expanded class. The
//! attribute total is never stored; it is summed on demand.

mod delta;

pub use delta::SheetDelta;

use crate::attribute::{Attribute, AttributeSet};
use crate::catalog::{Catalog, ClassId, SkillId};
use crate::config::SheetConfig;
use crate::rules;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetState {
    pub attributes: AttributeSet,
    /// Allocated points per skill, indexed by [`SkillId`].
    pub skill_points: Vec<i32>,
    /// Unspent skill points.
    ///
    /// Reset to the Intelligence grant whenever Intelligence changes and
    /// adjusted by one on every allocation or refund in between.
    pub available_skill_points: i32,
    /// Class currently expanded for detail viewing.
    pub selected_class: Option<ClassId>,
}

impl SheetState {
    /// Fresh sheet: every attribute and skill at zero, no class selected.
    pub fn new(catalog: &Catalog, config: &SheetConfig) -> Self {
        let attributes = AttributeSet::zero();
        let available_skill_points = rules::granted_skill_points(config, &attributes);

        Self {
            attributes,
            skill_points: vec![0; catalog.skill_count()],
            available_skill_points,
            selected_class: None,
        }
    }

    pub fn attribute(&self, attribute: Attribute) -> i32 {
        self.attributes.get(attribute)
    }

    pub fn attribute_total(&self) -> i32 {
        self.attributes.total()
    }

    /// Allocated points for a skill, or `None` for an id outside the catalog.
    pub fn allocated(&self, skill: SkillId) -> Option<i32> {
        self.skill_points.get(skill.index()).copied()
    }

    /// Sum of allocated points across all skills.
    pub fn spent_skill_points(&self) -> i32 {
        self.skill_points.iter().sum()
    }

    /// Recomputes the unspent pool from the current Intelligence.
    ///
    /// Points already allocated are not reclaimed.
    pub(crate) fn refresh_available_skill_points(&mut self, config: &SheetConfig) {
        self.available_skill_points = rules::granted_skill_points(config, &self.attributes);
    }
}
