//! Frontend-agnostic sheet session.
//!
//! A [`SheetSession`] owns the sheet together with everything a UI needs to
//! present it: the view model, the message log and a command counter.
//! Frontends only translate input into [`SheetCommand`]s and render.

use sheet_core::{CharacterSheet, SheetCommand, SheetDelta, SheetError};

use crate::config::{FrontendConfig, MessageConfig};
use crate::event::{CommandEvent, EventConsumer, EventImpact};
use crate::message::{MessageLevel, MessageLog};
use crate::services::{UpdateScope, ViewModelUpdater};
use crate::view_model::SheetViewModel;

pub struct SheetSession {
    sheet: CharacterSheet,
    view_model: SheetViewModel,
    messages: MessageLog,
    config: MessageConfig,
    sequence: u64,
    last_scope: UpdateScope,
}

impl SheetSession {
    pub fn new(sheet: CharacterSheet, config: &FrontendConfig) -> Self {
        let view_model = SheetViewModel::from_sheet(&sheet);
        Self {
            sheet,
            view_model,
            messages: MessageLog::new(config.messages.capacity),
            config: config.messages.clone(),
            sequence: 0,
            last_scope: UpdateScope::ALL,
        }
    }

    pub fn sheet(&self) -> &CharacterSheet {
        &self.sheet
    }

    pub fn view_model(&self) -> &SheetViewModel {
        &self.view_model
    }

    /// Sections refreshed by the most recent command.
    pub fn last_scope(&self) -> UpdateScope {
        self.last_scope
    }

    /// Number of commands dispatched so far.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn into_sheet(self) -> CharacterSheet {
        self.sheet
    }

    /// Executes a command and records its effect.
    pub fn dispatch(&mut self, command: SheetCommand) -> EventImpact {
        self.sequence += 1;
        let result = self.sheet.execute(command);
        let event = CommandEvent::from_result(&command, &result);
        self.on_event(&event)
    }

    /// Returns the sheet to its starting state.
    pub fn reset(&mut self) -> EventImpact {
        self.sequence += 1;
        self.sheet.reset();
        tracing::info!("sheet reset");
        self.on_event(&CommandEvent::Reset)
    }

    fn push(&mut self, text: impl Into<String>, level: MessageLevel) {
        self.messages.record(text, level, self.sequence);
    }

    fn record_selection(&mut self) {
        if !self.config.show_selection {
            return;
        }
        let text = match self.sheet.selected_class() {
            Some((_, class)) => format!("Selected {}", class.name),
            None => "Class selection cleared".to_string(),
        };
        self.push(text, MessageLevel::Info);
    }
}

impl EventConsumer for SheetSession {
    fn on_event(&mut self, event: &CommandEvent<'_>) -> EventImpact {
        match event {
            CommandEvent::Executed { outcome, .. } => {
                if outcome.delta.contains(SheetDelta::SELECTION) {
                    self.record_selection();
                }
            }
            CommandEvent::Rejected { error, .. } => match error.notice() {
                Some(notice) => self.push(notice, MessageLevel::Warning),
                None => {
                    tracing::error!(
                        code = error.error_code(),
                        phase = error.phase().as_str(),
                        "unexpected command failure: {error}"
                    );
                    self.push(error.to_string(), MessageLevel::Error);
                }
            },
            CommandEvent::Reset => self.push("Sheet reset", MessageLevel::Info),
        }

        self.last_scope = ViewModelUpdater::update(&mut self.view_model, event, &self.sheet);

        // Rejections still add a message worth drawing.
        match event {
            CommandEvent::Executed { .. } if self.last_scope.is_empty() => EventImpact::none(),
            _ => EventImpact::redraw(),
        }
    }

    fn message_log(&self) -> &MessageLog {
        &self.messages
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_core::{Attribute, ClassId, SkillId};

    fn session() -> SheetSession {
        SheetSession::new(CharacterSheet::builtin(), &FrontendConfig::default())
    }

    #[test]
    fn cap_rejection_becomes_a_warning() {
        let mut session = session();
        for _ in 0..70 {
            session.dispatch(SheetCommand::increment_attribute(Attribute::Constitution));
        }
        assert!(session.message_log().is_empty());

        let impact = session.dispatch(SheetCommand::increment_attribute(Attribute::Wisdom));
        assert!(impact.requires_redraw);

        let latest = session.message_log().latest().expect("warning pushed");
        assert_eq!(latest.level, MessageLevel::Warning);
        assert_eq!(latest.text, "Total attribute points cannot exceed 70");
        assert_eq!(latest.sequence, 71);
        assert_eq!(latest.repeats, 1);
        assert_eq!(session.view_model().totals.attribute_total, 70);
    }

    #[test]
    fn holding_increment_at_the_cap_keeps_one_notice() {
        let mut session = session();
        for _ in 0..70 {
            session.dispatch(SheetCommand::increment_attribute(Attribute::Dexterity));
        }
        for _ in 0..5 {
            session.dispatch(SheetCommand::increment_attribute(Attribute::Dexterity));
        }

        assert_eq!(session.message_log().len(), 1);
        let latest = session.message_log().latest().expect("warning pushed");
        assert_eq!(latest.repeats, 5);
        assert_eq!(latest.sequence, 75);

        session.dispatch(SheetCommand::select_class(ClassId(0)));
        session.dispatch(SheetCommand::increment_attribute(Attribute::Dexterity));
        assert_eq!(session.message_log().len(), 3);
        assert_eq!(session.message_log().latest().map(|entry| entry.repeats), Some(1));
    }

    #[test]
    fn empty_pool_rejection_becomes_a_warning() {
        let mut session = session();
        let skill = session.sheet().catalog().skill_id("Stealth").expect("builtin skill");
        session.dispatch(SheetCommand::increment_skill(skill));

        let latest = session.message_log().latest().expect("warning pushed");
        assert_eq!(latest.level, MessageLevel::Warning);
        assert_eq!(latest.text, "No skill points available to allocate");
    }

    #[test]
    fn unknown_ids_are_reported_as_errors() {
        let mut session = session();
        session.dispatch(SheetCommand::increment_skill(SkillId(999)));
        let latest = session.message_log().latest().expect("error pushed");
        assert_eq!(latest.level, MessageLevel::Error);

        session.dispatch(SheetCommand::select_class(ClassId(999)));
        assert_eq!(session.message_log().len(), 2);
    }

    #[test]
    fn no_op_does_not_request_redraw() {
        let mut session = session();
        let impact = session.dispatch(SheetCommand::decrement_attribute(Attribute::Strength));
        assert!(!impact.requires_redraw);
        assert!(session.last_scope().is_empty());
    }

    #[test]
    fn selection_toggle_is_logged() {
        let mut session = session();
        let wizard = session.sheet().catalog().class_id("Wizard").expect("builtin class");

        session.dispatch(SheetCommand::select_class(wizard));
        assert_eq!(
            session.message_log().latest().map(|entry| entry.text.as_str()),
            Some("Selected Wizard")
        );
        assert_eq!(
            session.view_model().class_details.as_ref().map(|d| d.id),
            Some(wizard)
        );

        session.dispatch(SheetCommand::select_class(wizard));
        assert_eq!(
            session.message_log().latest().map(|entry| entry.text.as_str()),
            Some("Class selection cleared")
        );
        assert!(session.view_model().class_details.is_none());
    }

    #[test]
    fn selection_messages_can_be_silenced() {
        let mut config = FrontendConfig::default();
        config.messages.show_selection = false;
        let mut session = SheetSession::new(CharacterSheet::builtin(), &config);

        session.dispatch(SheetCommand::select_class(ClassId(0)));
        assert!(session.message_log().is_empty());
        assert!(session.view_model().selected_class().is_some());
    }

    #[test]
    fn reset_rebuilds_the_view() {
        let mut session = session();
        session.dispatch(SheetCommand::increment_attribute(Attribute::Intelligence));
        session.dispatch(SheetCommand::select_class(ClassId(1)));

        session.reset();
        assert_eq!(session.last_scope(), UpdateScope::ALL);
        assert_eq!(
            session.view_model(),
            &SheetViewModel::from_sheet(&CharacterSheet::builtin())
        );
        assert_eq!(
            session.message_log().latest().map(|entry| entry.text.as_str()),
            Some("Sheet reset")
        );
    }
}
