//! Cross-frontend primitives for presenting a character sheet.
//!
//! Houses message logging, command event handling, and view-model types that
//! both the CLI and future graphical clients can reuse.
pub mod config;
pub mod event;
pub mod frontend;
pub mod message;
pub mod services;
pub mod session;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use event::{CommandEvent, EventConsumer, EventImpact};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use services::{UpdateScope, ViewModelUpdater};
pub use session::SheetSession;
pub use view_model::SheetViewModel;
