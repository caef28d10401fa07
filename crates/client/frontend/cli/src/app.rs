//! Glue code tying the sheet session and terminal UI together.
use anyhow::Result;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;
use client_frontend_core::{Frontend, SheetSession};

/// Terminal frontend.
pub struct CliFrontend {
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(cli_config: CliConfig) -> Self {
        Self { cli_config }
    }
}

impl Frontend for CliFrontend {
    fn run(&mut self, session: &mut SheetSession) -> Result<()> {
        tracing::info!("CLI frontend starting");

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        EventLoop::new(self.cli_config.clone()).run(&mut terminal, session)?;

        terminal::restore()?;
        tracing::info!(commands = session.sequence(), "CLI frontend exiting");
        Ok(())
    }
}
