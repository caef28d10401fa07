//! Read-only environment handed to every transition.

use crate::catalog::Catalog;
use crate::config::SheetConfig;

/// Reference data and rule constants a transition may consult.
///
/// Neither is ever mutated by the engine, so the environment is a pair of
/// shared borrows and cheap to copy.
#[derive(Clone, Copy, Debug)]
pub struct SheetEnv<'a> {
    pub catalog: &'a Catalog,
    pub config: &'a SheetConfig,
}

impl<'a> SheetEnv<'a> {
    pub const fn new(catalog: &'a Catalog, config: &'a SheetConfig) -> Self {
        Self { catalog, config }
    }
}
