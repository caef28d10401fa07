//! Builder assembling a [`Client`] from content and a frontend.
use std::path::PathBuf;

use anyhow::{Result, bail};
use client_frontend_core::{FrontendConfig, SheetSession};
use sheet_content::ContentFactory;
use sheet_core::CharacterSheet;

use crate::{Client, Frontend};

#[derive(Default)]
pub struct ClientBuilder {
    content_dir: Option<PathBuf>,
    frontend_config: FrontendConfig,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding `config.toml` and `catalog.ron`.
    ///
    /// Without one the built-in catalog and default rules are used.
    pub fn content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_dir = Some(dir.into());
        self
    }

    pub fn frontend_config(mut self, config: FrontendConfig) -> Self {
        self.frontend_config = config;
        self
    }

    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Loads the sheet content without building a client.
    pub fn load_sheet(&self) -> Result<CharacterSheet> {
        match &self.content_dir {
            Some(dir) => {
                tracing::info!("Loading content from {}", dir.display());
                ContentFactory::new(dir).build_sheet()
            }
            None => {
                tracing::info!("Using built-in content");
                Ok(CharacterSheet::builtin())
            }
        }
    }

    pub fn build(self) -> Result<Client> {
        let sheet = self.load_sheet()?;
        let Some(frontend) = self.frontend else {
            bail!("Client requires a frontend");
        };

        tracing::debug!(
            classes = sheet.catalog().class_count(),
            skills = sheet.catalog().skill_count(),
            cap = sheet.config().attribute_cap,
            "sheet content ready"
        );

        Ok(Client {
            session: SheetSession::new(sheet, &self.frontend_config),
            frontend,
        })
    }
}
