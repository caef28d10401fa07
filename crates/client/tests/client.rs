use std::fs;

use anyhow::Result;
use charsheet_client::{Client, Frontend};
use client_frontend_core::{EventConsumer, MessageLevel, SheetSession};
use sheet_core::{Attribute, SheetCommand};

/// Frontend replaying a fixed command script.
struct Scripted(Vec<SheetCommand>);

impl Frontend for Scripted {
    fn run(&mut self, session: &mut SheetSession) -> Result<()> {
        for command in self.0.drain(..) {
            session.dispatch(command);
        }
        Ok(())
    }
}

#[test]
fn build_requires_a_frontend() {
    assert!(Client::builder().build().is_err());
}

#[test]
fn run_returns_the_edited_sheet() {
    let client = Client::builder()
        .frontend(Scripted(vec![
            SheetCommand::increment_attribute(Attribute::Intelligence),
            SheetCommand::increment_attribute(Attribute::Intelligence),
        ]))
        .build()
        .expect("builtin content");

    let sheet = client.run().expect("scripted run");
    assert_eq!(sheet.attribute(Attribute::Intelligence), 2);
}

#[test]
fn content_dir_overrides_rules() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("config.toml"), "attribute_cap = 1\n").expect("write config");

    let commands = vec![
        SheetCommand::increment_attribute(Attribute::Wisdom),
        SheetCommand::increment_attribute(Attribute::Wisdom),
    ];

    let client = Client::builder()
        .content_dir(dir.path())
        .frontend(Scripted(commands))
        .build()
        .expect("valid content");
    assert_eq!(client.session().sheet().config().attribute_cap, 1);

    let mut session = SheetSession::new(
        client.session().sheet().clone(),
        &Default::default(),
    );
    session.dispatch(SheetCommand::increment_attribute(Attribute::Wisdom));
    session.dispatch(SheetCommand::increment_attribute(Attribute::Wisdom));
    let notice = session.message_log().latest().expect("cap notice");
    assert_eq!(notice.level, MessageLevel::Warning);
    assert_eq!(notice.text, "Total attribute points cannot exceed 1");

    let sheet = client.run().expect("scripted run");
    assert_eq!(sheet.attribute(Attribute::Wisdom), 1);
}

#[test]
fn malformed_content_fails_to_build() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("catalog.ron"), "(classes: [").expect("write catalog");

    let result = Client::builder()
        .content_dir(dir.path())
        .frontend(Scripted(Vec::new()))
        .build();
    assert!(result.is_err());
}
