//! Pumps user input and rendering for the CLI client.
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::config::CliConfig;
use crate::input::{InputHandler, KeyAction};
use crate::presentation::{
    terminal::Tui,
    ui::{self, RenderContext},
};
use crate::state::AppState;
use client_frontend_core::{EventConsumer, EventImpact, MessageLevel, SheetSession};

const POLL_INTERVAL_MS: u64 = 250;

/// Whether the loop should keep going after handling an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct EventLoop {
    input: InputHandler,
    app_state: AppState,
    cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(cli_config: CliConfig) -> Self {
        Self {
            input: InputHandler::new(),
            app_state: AppState::new(),
            cli_config,
        }
    }

    /// Runs until the user quits.
    pub fn run(mut self, terminal: &mut Tui, session: &mut SheetSession) -> Result<()> {
        self.render(terminal, session)?;

        loop {
            if !event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let (flow, impact) = self.handle_key_press(key, session);
                    if impact.requires_redraw {
                        self.render(terminal, session)?;
                    }
                    if flow == Flow::Quit {
                        break;
                    }
                }
                Event::Resize(_, _) => self.render(terminal, session)?,
                _ => {}
            }
        }

        Ok(())
    }

    fn handle_key_press(
        &mut self,
        key: KeyEvent,
        session: &mut SheetSession,
    ) -> (Flow, EventImpact) {
        let action = self.input.handle_key(key);
        tracing::trace!(?key, ?action, "key press");

        let command = match action {
            KeyAction::Quit => {
                let sequence = session.sequence();
                session
                    .message_log_mut()
                    .record("Quitting...", MessageLevel::Info, sequence);
                return (Flow::Quit, EventImpact::redraw());
            }
            KeyAction::FocusNext => {
                self.app_state.focus_next();
                return (Flow::Continue, EventImpact::redraw());
            }
            KeyAction::FocusPrevious => {
                self.app_state.focus_previous();
                return (Flow::Continue, EventImpact::redraw());
            }
            KeyAction::CursorUp => {
                self.app_state.cursor_up(session.view_model());
                return (Flow::Continue, EventImpact::redraw());
            }
            KeyAction::CursorDown => {
                self.app_state.cursor_down(session.view_model());
                return (Flow::Continue, EventImpact::redraw());
            }
            KeyAction::Reset => {
                let impact = session.reset();
                self.app_state.clamp(session.view_model());
                return (Flow::Continue, impact);
            }
            KeyAction::Increase => self.app_state.increase_command(session.view_model()),
            KeyAction::Decrease => self.app_state.decrease_command(session.view_model()),
            KeyAction::Toggle => self.app_state.toggle_command(session.view_model()),
            KeyAction::None => None,
        };

        let impact = match command {
            Some(command) => session.dispatch(command),
            None => EventImpact::none(),
        };
        (Flow::Continue, impact)
    }

    fn render(&self, terminal: &mut Tui, session: &SheetSession) -> Result<()> {
        let ctx = RenderContext {
            view_model: session.view_model(),
            messages: session.message_log(),
            app_state: &self.app_state,
            notices: self.cli_config.notices,
        };
        ui::render_with_view_model(terminal, &ctx)
    }
}
