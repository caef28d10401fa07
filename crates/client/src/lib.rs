//! Top-level client composing sheet content and a frontend.
//!
//! ```text
//! Client
//!   ├─→ SheetSession (sheet + view model + message log)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The client owns the session and lends it to the frontend, so the finished
//! sheet is still available after the UI exits.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use client_frontend_core::SheetSession;
use sheet_core::CharacterSheet;

/// Environment variable naming the content directory.
pub const CONTENT_DIR_ENV: &str = "CHARSHEET_CONTENT_DIR";

/// Top-level client container.
pub struct Client {
    session: SheetSession,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn session(&self) -> &SheetSession {
        &self.session
    }

    /// Hands control to the frontend until the user quits.
    ///
    /// Returns the sheet as the user left it.
    pub fn run(mut self) -> Result<CharacterSheet> {
        self.frontend.run(&mut self.session)?;

        let sheet = self.session.into_sheet();
        tracing::info!(
            attribute_total = sheet.attribute_total(),
            spent_skill_points = sheet.spent_skill_points(),
            class = sheet.selected_class().map(|(_, class)| class.name.as_str()),
            "final sheet"
        );
        Ok(sheet)
    }
}
