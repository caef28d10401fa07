//! Row types rendered by sheet panels.

use sheet_core::{Attribute, CharacterSheet, ClassId, SkillId};

/// One attribute line: value and derived modifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeView {
    pub attribute: Attribute,
    pub value: i32,
    pub modifier: i32,
}

impl AttributeView {
    pub fn from_sheet(sheet: &CharacterSheet, attribute: Attribute) -> Self {
        Self {
            attribute,
            value: sheet.attribute(attribute),
            modifier: sheet.attribute_modifier(attribute),
        }
    }
}

/// Sheet-wide counters shown in panel titles and the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TotalsView {
    pub attribute_total: i32,
    pub attribute_cap: i32,
    pub available_skill_points: i32,
    pub spent_skill_points: i32,
}

impl TotalsView {
    pub fn from_sheet(sheet: &CharacterSheet) -> Self {
        Self {
            attribute_total: sheet.attribute_total(),
            attribute_cap: sheet.config().attribute_cap,
            available_skill_points: sheet.available_skill_points(),
            spent_skill_points: sheet.spent_skill_points(),
        }
    }

    /// Points left before the attribute cap is reached.
    pub fn attribute_headroom(&self) -> i32 {
        (self.attribute_cap - self.attribute_total).max(0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassView {
    pub id: ClassId,
    pub name: String,
    pub eligible: bool,
    pub selected: bool,
}

/// One requirement of the selected class, compared with the current value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequirementView {
    pub attribute: Attribute,
    pub minimum: i32,
    pub current: i32,
}

impl RequirementView {
    pub fn is_met(&self) -> bool {
        self.current >= self.minimum
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDetailsView {
    pub id: ClassId,
    pub name: String,
    pub eligible: bool,
    pub requirements: Vec<RequirementView>,
}

impl ClassDetailsView {
    /// Details for the selected class, if any.
    pub fn from_sheet(sheet: &CharacterSheet) -> Option<Self> {
        let (id, class) = sheet.selected_class()?;
        let requirements: Vec<_> = class
            .requirements
            .iter()
            .map(|(attribute, minimum)| RequirementView {
                attribute,
                minimum,
                current: sheet.attribute(attribute),
            })
            .collect();
        Some(Self {
            id,
            name: class.name.clone(),
            eligible: requirements.iter().all(RequirementView::is_met),
            requirements,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillView {
    pub id: SkillId,
    pub name: String,
    pub attribute: Attribute,
    pub points: i32,
    pub modifier: i32,
    pub total: i32,
}
