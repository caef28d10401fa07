//! Terminal UI frontend for the character sheet builder.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives a `SheetSession` to drive
//! - Does NOT own the sheet
//! - Maps key presses to sheet commands and renders the session's view model

mod app;
mod config;
mod event;
mod input;
pub mod logging;
mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, NoticePanel};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
