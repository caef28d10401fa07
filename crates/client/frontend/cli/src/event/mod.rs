//! Input pumping and redraw scheduling.
mod r#loop;

pub use r#loop::EventLoop;
