//! End-to-end behavior of a character sheet driven through its public API.

use sheet_core::{
    Attribute, Catalog, CharacterSheet, ClassDefinition, ErrorSeverity, ExecuteError,
    Requirements, SheetConfig, SheetDelta, SheetError, SkillDefinition, SkillId, modifier,
};

fn raise(sheet: &mut CharacterSheet, attribute: Attribute, times: usize) {
    for _ in 0..times {
        sheet
            .increment_attribute(attribute)
            .expect("attribute increment within cap");
    }
}

fn skill(sheet: &CharacterSheet, name: &str) -> SkillId {
    sheet.catalog().skill_id(name).expect("skill in catalog")
}

#[test]
fn attributes_start_at_zero_with_minus_five_modifier() {
    let sheet = CharacterSheet::builtin();
    for attribute in Attribute::ALL {
        assert_eq!(sheet.attribute(attribute), 0);
        assert_eq!(sheet.attribute_modifier(attribute), -5);
    }
    assert_eq!(sheet.attribute_total(), 0);
    assert_eq!(modifier(0), -5);
}

#[test]
fn incrementing_twice_moves_modifier_to_minus_four() {
    let mut sheet = CharacterSheet::builtin();
    raise(&mut sheet, Attribute::Strength, 2);

    assert_eq!(sheet.attribute(Attribute::Strength), 2);
    assert_eq!(sheet.attribute_modifier(Attribute::Strength), -4);
    for attribute in Attribute::ALL.into_iter().skip(1) {
        assert_eq!(sheet.attribute(attribute), 0, "{attribute} untouched");
    }
}

#[test]
fn increment_then_decrement_restores_zero() {
    let mut sheet = CharacterSheet::builtin();
    raise(&mut sheet, Attribute::Strength, 1);
    let outcome = sheet.decrement_attribute(Attribute::Strength);
    assert_eq!(outcome.map(|o| o.delta), Ok(SheetDelta::ATTRIBUTES));
    assert_eq!(sheet.attribute(Attribute::Strength), 0);
}

#[test]
fn decrement_at_zero_is_a_silent_no_op() {
    let mut sheet = CharacterSheet::builtin();
    let outcome = sheet.decrement_attribute(Attribute::Strength);
    assert_eq!(outcome.map(|o| o.delta), Ok(SheetDelta::empty()));
    assert_eq!(sheet.attribute(Attribute::Strength), 0);
}

#[test]
fn seventy_first_increment_hits_the_cap() {
    let mut sheet = CharacterSheet::builtin();
    raise(&mut sheet, Attribute::Strength, 70);
    assert_eq!(sheet.attribute_total(), 70);

    let err = sheet
        .increment_attribute(Attribute::Strength)
        .expect_err("71st increment is rejected");
    assert_eq!(
        err.notice().as_deref(),
        Some("Total attribute points cannot exceed 70")
    );
    assert_eq!(err.severity(), ErrorSeverity::Recoverable);
    assert_eq!(sheet.attribute_total(), 70);
    assert_eq!(sheet.attribute(Attribute::Strength), 70);

    // The cap is global: other attributes are blocked too.
    assert!(sheet.increment_attribute(Attribute::Wisdom).is_err());
    assert_eq!(sheet.attribute(Attribute::Wisdom), 0);
}

#[test]
fn cap_frees_up_after_a_decrement() {
    let mut sheet = CharacterSheet::builtin();
    raise(&mut sheet, Attribute::Constitution, 70);
    sheet
        .decrement_attribute(Attribute::Constitution)
        .expect("decrement always succeeds");
    assert!(sheet.increment_attribute(Attribute::Dexterity).is_ok());
    assert_eq!(sheet.attribute_total(), 70);
}

#[test]
fn no_skill_points_at_zero_intelligence() {
    let sheet = CharacterSheet::builtin();
    assert_eq!(sheet.available_skill_points(), 0);
}

#[test]
fn skill_points_track_intelligence_steps() {
    let mut sheet = CharacterSheet::builtin();
    for i in 1..=6 {
        raise(&mut sheet, Attribute::Intelligence, 1);
        let expected = (10 + 4 * modifier(i)).max(0);
        assert_eq!(sheet.available_skill_points(), expected, "intelligence {i}");
    }
    assert_eq!(sheet.available_skill_points(), 2);

    for _ in 0..5 {
        sheet
            .decrement_attribute(Attribute::Intelligence)
            .expect("decrement always succeeds");
    }
    assert_eq!(sheet.available_skill_points(), 0);
}

#[test]
fn allocating_without_points_shows_notice() {
    let mut sheet = CharacterSheet::builtin();
    let acrobatics = skill(&sheet, "Acrobatics");

    let err = sheet
        .increment_skill(acrobatics)
        .expect_err("no points to spend");
    assert_eq!(
        err.notice().as_deref(),
        Some("No skill points available to allocate")
    );
    assert_eq!(sheet.allocated_points(acrobatics), Some(0));
    assert_eq!(sheet.available_skill_points(), 0);
}

#[test]
fn allocating_spends_one_point_on_one_skill() {
    let mut sheet = CharacterSheet::builtin();
    raise(&mut sheet, Attribute::Intelligence, 10);
    assert_eq!(sheet.available_skill_points(), 10);

    let acrobatics = skill(&sheet, "Acrobatics");
    let outcome = sheet.increment_skill(acrobatics);
    assert_eq!(
        outcome.map(|o| o.delta),
        Ok(SheetDelta::SKILLS | SheetDelta::SKILL_POINTS)
    );
    assert_eq!(sheet.allocated_points(acrobatics), Some(1));
    assert_eq!(sheet.available_skill_points(), 9);
    for (id, _) in sheet.catalog().skills().filter(|(id, _)| *id != acrobatics) {
        assert_eq!(sheet.allocated_points(id), Some(0));
    }

    sheet
        .decrement_skill(acrobatics)
        .expect("refund always succeeds");
    assert_eq!(sheet.allocated_points(acrobatics), Some(0));
    assert_eq!(sheet.available_skill_points(), 10);
}

#[test]
fn pool_runs_dry_after_spending_every_point() {
    let mut sheet = CharacterSheet::builtin();
    raise(&mut sheet, Attribute::Intelligence, 6);
    let arcana = skill(&sheet, "Arcana");

    sheet.increment_skill(arcana).expect("first point");
    sheet.increment_skill(arcana).expect("second point");
    assert!(sheet.increment_skill(arcana).is_err());
    assert_eq!(sheet.allocated_points(arcana), Some(2));
    assert_eq!(sheet.spent_skill_points(), 2);
}

#[test]
fn lowering_intelligence_does_not_reclaim_spent_points() {
    let mut sheet = CharacterSheet::builtin();
    raise(&mut sheet, Attribute::Intelligence, 10);
    let history = skill(&sheet, "History");
    for _ in 0..4 {
        sheet.increment_skill(history).expect("points available");
    }

    sheet
        .decrement_attribute(Attribute::Intelligence)
        .expect("decrement always succeeds");
    assert_eq!(sheet.available_skill_points(), 6);
    assert_eq!(sheet.allocated_points(history), Some(4));

    for _ in 0..9 {
        sheet
            .decrement_attribute(Attribute::Intelligence)
            .expect("decrement always succeeds");
    }
    assert_eq!(sheet.available_skill_points(), 0);
    assert_eq!(sheet.allocated_points(history), Some(4));
}

#[test]
fn intelligence_change_regrants_full_pool_ignoring_spent_points() {
    let mut sheet = CharacterSheet::builtin();
    raise(&mut sheet, Attribute::Intelligence, 10);
    assert_eq!(sheet.available_skill_points(), 10);

    let arcana = skill(&sheet, "Arcana");
    for _ in 0..4 {
        sheet.increment_skill(arcana).expect("points available");
    }
    assert_eq!(sheet.available_skill_points(), 6);

    // Modifier stays 0 at INT 11, so the grant is 10 again.
    let outcome = sheet
        .increment_attribute(Attribute::Intelligence)
        .expect("under cap");
    assert_eq!(sheet.available_skill_points(), 10);
    assert_eq!(sheet.spent_skill_points(), 4);
    assert_eq!(sheet.allocated_points(arcana), Some(4));
    assert!(outcome.delta.contains(SheetDelta::SKILL_POINTS));
}

#[test]
fn skill_total_combines_points_and_linked_modifier() {
    let mut sheet = CharacterSheet::builtin();
    let stealth = skill(&sheet, "Stealth");
    assert_eq!(sheet.skill_total(stealth), Some(-5));

    raise(&mut sheet, Attribute::Dexterity, 14);
    raise(&mut sheet, Attribute::Intelligence, 10);
    sheet.increment_skill(stealth).expect("points available");
    assert_eq!(sheet.skill_total(stealth), Some(1 + 2));
}

#[test]
fn selecting_a_class_toggles_its_details() {
    let mut sheet = CharacterSheet::builtin();
    let (barbarian, _) = sheet.catalog().classes().next().expect("at least one class");

    sheet.select_class(barbarian).expect("known class");
    let (selected, definition) = sheet.selected_class().expect("class expanded");
    assert_eq!(selected, barbarian);
    assert_eq!(definition.name, "Barbarian");
    let requirements: Vec<_> = definition.requirements.iter().collect();
    assert_eq!(
        requirements,
        vec![
            (Attribute::Strength, 14),
            (Attribute::Dexterity, 9),
            (Attribute::Constitution, 9),
            (Attribute::Intelligence, 9),
            (Attribute::Wisdom, 9),
            (Attribute::Charisma, 9),
        ]
    );

    sheet.select_class(barbarian).expect("known class");
    assert!(sheet.selected_class().is_none());
}

#[test]
fn selecting_another_class_replaces_selection() {
    let mut sheet = CharacterSheet::builtin();
    let wizard = sheet.catalog().class_id("Wizard").expect("wizard");
    let bard = sheet.catalog().class_id("Bard").expect("bard");

    sheet.select_class(wizard).expect("known class");
    sheet.select_class(bard).expect("known class");
    assert_eq!(sheet.selected_class().map(|(id, _)| id), Some(bard));
}

#[test]
fn eligibility_requires_every_threshold() {
    let mut sheet = CharacterSheet::builtin();
    let wizard = sheet.catalog().class_id("Wizard").expect("wizard");
    assert_eq!(sheet.is_eligible(wizard), Some(false));

    for attribute in Attribute::ALL {
        raise(&mut sheet, attribute, 9);
    }
    assert_eq!(sheet.is_eligible(wizard), Some(false));
    assert_eq!(sheet.eligible_classes().count(), 0);

    raise(&mut sheet, Attribute::Intelligence, 5);
    assert_eq!(sheet.is_eligible(wizard), Some(true));
    let eligible: Vec<_> = sheet.eligible_classes().map(|(_, c)| c.name.as_str()).collect();
    assert_eq!(eligible, vec!["Wizard"]);
}

#[test]
fn class_without_requirements_is_always_eligible() {
    let catalog = Catalog::new(
        vec![ClassDefinition::new("Commoner", Requirements::new())],
        vec![SkillDefinition::new("Farming", Attribute::Constitution)],
    )
    .expect("valid catalog");
    let sheet = CharacterSheet::new(catalog, SheetConfig::default());
    let commoner = sheet.catalog().class_id("Commoner").expect("commoner");
    assert_eq!(sheet.is_eligible(commoner), Some(true));
}

#[test]
fn unknown_skill_is_rejected_without_notice() {
    let mut sheet = CharacterSheet::builtin();
    raise(&mut sheet, Attribute::Intelligence, 10);
    let err = sheet.increment_skill(SkillId(500)).expect_err("unknown skill");
    assert!(matches!(err, ExecuteError::Skill(_)));
    assert_eq!(err.severity(), ErrorSeverity::Validation);
    assert_eq!(err.notice(), None);
    assert_eq!(sheet.available_skill_points(), 10);
}

#[test]
fn sheets_are_independent() {
    let mut first = CharacterSheet::builtin();
    let second = CharacterSheet::builtin();
    raise(&mut first, Attribute::Wisdom, 3);
    assert_eq!(first.attribute(Attribute::Wisdom), 3);
    assert_eq!(second.attribute(Attribute::Wisdom), 0);
}

#[test]
fn reset_returns_to_initial_state() {
    let mut sheet = CharacterSheet::builtin();
    raise(&mut sheet, Attribute::Intelligence, 12);
    let arcana = skill(&sheet, "Arcana");
    sheet.increment_skill(arcana).expect("points available");

    sheet.reset();
    assert_eq!(sheet.attribute_total(), 0);
    assert_eq!(sheet.allocated_points(arcana), Some(0));
    assert_eq!(sheet.available_skill_points(), 0);
}

#[test]
fn custom_cap_is_reported_in_notice() {
    let mut sheet = CharacterSheet::new(
        Catalog::builtin(),
        SheetConfig::default().with_attribute_cap(2),
    );
    raise(&mut sheet, Attribute::Charisma, 2);
    let err = sheet
        .increment_attribute(Attribute::Charisma)
        .expect_err("cap reached");
    assert_eq!(
        err.notice().as_deref(),
        Some("Total attribute points cannot exceed 2")
    );
}
