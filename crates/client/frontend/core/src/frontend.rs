//! Trait describing a runnable client front-end.
use anyhow::Result;

use crate::session::SheetSession;

/// Frontend abstraction for UI layers.
///
/// Frontends drive a [`SheetSession`]: they translate user input into sheet
/// commands and render the session's view model and message log. They do not
/// own the session, which lets the caller inspect the finished sheet after
/// the frontend returns.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
pub trait Frontend {
    /// Run the frontend event loop.
    ///
    /// Blocks until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    fn run(&mut self, session: &mut SheetSession) -> Result<()>;
}
