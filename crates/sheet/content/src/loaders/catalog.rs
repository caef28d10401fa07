//! Class and skill catalog loader.

use std::path::Path;

use sheet_core::Catalog;

use crate::loaders::{LoadResult, read_file};

/// Loader for class/skill catalogs from RON files.
///
/// File format:
/// ```ron
/// (
///     classes: [
///         (name: "Barbarian", requirements: { Strength: 14, Dexterity: 9 }),
///     ],
///     skills: [
///         (name: "Athletics", attribute: Strength),
///     ],
/// )
/// ```
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load catalog RON at {:?}: {}", path, e))
    }

    /// Parses and validates a catalog.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let catalog: Catalog = ron::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }
}
