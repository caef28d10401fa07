//! Content factory for building sheets from a data directory.

use std::path::{Path, PathBuf};

use sheet_core::{Catalog, CharacterSheet, SheetConfig};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult};

/// Content factory that loads sheet content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── catalog.ron
/// ```
///
/// Either file may be absent; the built-in catalog and default rules are used
/// in its place.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const CATALOG_FILE: &'static str = "catalog.ron";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load rule configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<SheetConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(
                "No {} in {}, using defaults",
                Self::CONFIG_FILE,
                self.data_dir.display()
            );
            return Ok(SheetConfig::default());
        }
        let config = ConfigLoader::load(&path)?;
        tracing::info!(?config, "Loaded rule config from {}", path.display());
        Ok(config)
    }

    /// Load the class/skill catalog from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let path = self.data_dir.join(Self::CATALOG_FILE);
        if !path.exists() {
            tracing::debug!(
                "No {} in {}, using built-in catalog",
                Self::CATALOG_FILE,
                self.data_dir.display()
            );
            return Ok(Catalog::builtin());
        }
        let catalog = CatalogLoader::load(&path)?;
        tracing::info!(
            classes = catalog.class_count(),
            skills = catalog.skill_count(),
            "Loaded catalog from {}",
            path.display()
        );
        Ok(catalog)
    }

    /// Builds a fresh sheet from the directory's content.
    pub fn build_sheet(&self) -> LoadResult<CharacterSheet> {
        let config = self.load_config()?;
        let catalog = self.load_catalog()?;
        Ok(CharacterSheet::new(catalog, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn empty_directory_falls_back_to_builtins() {
        let dir = tempfile::tempdir().expect("temp dir");
        let sheet = ContentFactory::new(dir.path())
            .build_sheet()
            .expect("defaults always load");
        assert_eq!(sheet.catalog(), &Catalog::builtin());
        assert_eq!(sheet.config(), &SheetConfig::default());
    }

    #[test]
    fn reads_both_files_when_present() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("config.toml"), "attribute_cap = 12\n").expect("write config");
        fs::write(
            dir.path().join("catalog.ron"),
            r#"(classes: [(name: "Monk", requirements: { Wisdom: 6 })],
                skills: [(name: "Meditation", attribute: Wisdom)])"#,
        )
        .expect("write catalog");

        let sheet = ContentFactory::new(dir.path())
            .build_sheet()
            .expect("valid content");
        assert_eq!(sheet.config().attribute_cap, 12);
        assert_eq!(sheet.catalog().class_count(), 1);
        assert!(sheet.catalog().skill_id("meditation").is_some());
    }

    #[test]
    fn shipped_data_matches_builtins() {
        let factory = ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));
        assert_eq!(factory.load_catalog().expect("shipped catalog"), Catalog::builtin());
        assert_eq!(factory.load_config().expect("shipped config"), SheetConfig::default());
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("catalog.ron"), "(skills: [").expect("write catalog");
        assert!(ContentFactory::new(dir.path()).load_catalog().is_err());
    }
}
