use bitflags::bitflags;

use super::SheetState;

bitflags! {
    /// Sections of the sheet touched by a command.
    ///
    /// Computed by diffing the state before and after a transition, so a
    /// no-op command (for example decrementing an attribute already at zero)
    /// yields an empty delta.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SheetDelta: u8 {
        /// An attribute value changed (and with it the total and modifiers).
        const ATTRIBUTES   = 1 << 0;
        /// The unspent skill point pool changed.
        const SKILL_POINTS = 1 << 1;
        /// At least one skill allocation changed.
        const SKILLS       = 1 << 2;
        /// The expanded class changed.
        const SELECTION    = 1 << 3;
    }
}

impl SheetDelta {
    pub fn from_states(before: &SheetState, after: &SheetState) -> Self {
        let mut delta = Self::empty();
        delta.set(Self::ATTRIBUTES, before.attributes != after.attributes);
        delta.set(
            Self::SKILL_POINTS,
            before.available_skill_points != after.available_skill_points,
        );
        delta.set(Self::SKILLS, before.skill_points != after.skill_points);
        delta.set(Self::SELECTION, before.selected_class != after.selected_class);
        delta
    }

    /// True if eligibility flags or skill totals may have changed.
    pub fn affects_derived(&self) -> bool {
        self.contains(Self::ATTRIBUTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attribute;
    use crate::catalog::{Catalog, ClassId};
    use crate::config::SheetConfig;

    #[test]
    fn identical_states_produce_empty_delta() {
        let state = SheetState::new(&Catalog::builtin(), &SheetConfig::default());
        assert!(SheetDelta::from_states(&state, &state.clone()).is_empty());
    }

    #[test]
    fn records_each_changed_section() {
        let before = SheetState::new(&Catalog::builtin(), &SheetConfig::default());
        let mut after = before.clone();
        after.attributes.set(Attribute::Wisdom, 1);
        after.selected_class = Some(ClassId(0));

        let delta = SheetDelta::from_states(&before, &after);
        assert_eq!(delta, SheetDelta::ATTRIBUTES | SheetDelta::SELECTION);
        assert!(delta.affects_derived());
    }
}
