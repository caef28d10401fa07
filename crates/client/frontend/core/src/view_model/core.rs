//! Core view model structure.

use sheet_core::CharacterSheet;

use super::rows::{AttributeView, ClassDetailsView, ClassView, SkillView, TotalsView};

/// Stateful view model owned by the frontend session.
///
/// Each section can be refreshed on its own, so a command that only touched
/// skill allocations does not rebuild the attribute or class panels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetViewModel {
    /// Attribute rows in canonical order.
    pub attributes: Vec<AttributeView>,

    /// Classes in catalog order, with eligibility and selection flags.
    pub classes: Vec<ClassView>,

    /// Requirement breakdown for the selected class.
    pub class_details: Option<ClassDetailsView>,

    /// Skills in catalog order.
    pub skills: Vec<SkillView>,

    pub totals: TotalsView,
}

impl SheetViewModel {
    pub fn from_sheet(sheet: &CharacterSheet) -> Self {
        Self {
            attributes: collect_attributes(sheet),
            classes: collect_classes(sheet),
            class_details: ClassDetailsView::from_sheet(sheet),
            skills: collect_skills(sheet),
            totals: TotalsView::from_sheet(sheet),
        }
    }

    /// Full rebuild, used after a reset or when no delta is available.
    pub fn rebuild_from_sheet(&mut self, sheet: &CharacterSheet) {
        *self = Self::from_sheet(sheet);
    }

    pub fn refresh_attributes(&mut self, sheet: &CharacterSheet) {
        self.attributes = collect_attributes(sheet);
    }

    pub fn refresh_classes(&mut self, sheet: &CharacterSheet) {
        self.classes = collect_classes(sheet);
        self.class_details = ClassDetailsView::from_sheet(sheet);
    }

    pub fn refresh_skills(&mut self, sheet: &CharacterSheet) {
        self.skills = collect_skills(sheet);
    }

    pub fn refresh_totals(&mut self, sheet: &CharacterSheet) {
        self.totals = TotalsView::from_sheet(sheet);
    }

    pub fn selected_class(&self) -> Option<&ClassView> {
        self.classes.iter().find(|class| class.selected)
    }

    pub fn eligible_count(&self) -> usize {
        self.classes.iter().filter(|class| class.eligible).count()
    }
}

fn collect_attributes(sheet: &CharacterSheet) -> Vec<AttributeView> {
    sheet_core::Attribute::ALL
        .iter()
        .map(|&attribute| AttributeView::from_sheet(sheet, attribute))
        .collect()
}

fn collect_classes(sheet: &CharacterSheet) -> Vec<ClassView> {
    let selected = sheet.selected_class().map(|(id, _)| id);
    sheet
        .catalog()
        .classes()
        .map(|(id, class)| ClassView {
            id,
            name: class.name.clone(),
            eligible: class.requirements.is_met_by(&sheet.state().attributes),
            selected: selected == Some(id),
        })
        .collect()
}

fn collect_skills(sheet: &CharacterSheet) -> Vec<SkillView> {
    sheet
        .catalog()
        .skills()
        .map(|(id, skill)| {
            let points = sheet.allocated_points(id).unwrap_or_default();
            let modifier = sheet.attribute_modifier(skill.attribute);
            SkillView {
                id,
                name: skill.name.clone(),
                attribute: skill.attribute,
                points,
                modifier,
                total: points + modifier,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_core::Attribute;

    #[test]
    fn fresh_sheet_view() {
        let sheet = CharacterSheet::builtin();
        let view = SheetViewModel::from_sheet(&sheet);

        assert_eq!(view.attributes.len(), Attribute::ALL.len());
        assert!(view.attributes.iter().all(|row| row.value == 0 && row.modifier == -5));
        assert_eq!(view.classes.len(), sheet.catalog().class_count());
        assert_eq!(view.eligible_count(), 0);
        assert!(view.class_details.is_none());
        assert_eq!(view.skills.len(), sheet.catalog().skill_count());
        assert!(view.skills.iter().all(|row| row.points == 0 && row.total == -5));
        assert_eq!(view.totals.attribute_headroom(), 70);
    }

    #[test]
    fn selected_class_details_track_requirements() {
        let mut sheet = CharacterSheet::builtin();
        let barbarian = sheet.catalog().class_id("Barbarian").expect("builtin class");
        sheet.select_class(barbarian).expect("select");
        for _ in 0..14 {
            sheet
                .increment_attribute(Attribute::Strength)
                .expect("under cap");
        }

        let view = SheetViewModel::from_sheet(&sheet);
        let details = view.class_details.as_ref().expect("selected class");
        assert_eq!(details.name, "Barbarian");
        assert!(!details.eligible);

        let strength = details
            .requirements
            .iter()
            .find(|req| req.attribute == Attribute::Strength)
            .expect("strength requirement");
        assert!(strength.is_met());
        assert_eq!(strength.current, 14);
        assert_eq!(
            view.selected_class().map(|class| class.id),
            Some(barbarian)
        );
    }
}
