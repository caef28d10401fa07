//! Services that keep presentation state in sync with the sheet.
pub mod updater;

pub use updater::{UpdateScope, ViewModelUpdater};
