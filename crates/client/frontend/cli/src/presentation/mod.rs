//! Terminal rendering: setup/teardown, theme, layout and panel widgets.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
