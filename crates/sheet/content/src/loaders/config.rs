//! Rule configuration loader.

use std::path::Path;

use sheet_core::SheetConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for rule configuration from TOML files.
///
/// Missing keys fall back to [`SheetConfig::default`]; values outside
/// the ranges checked by [`SheetConfig::validate`] are rejected.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<SheetConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<SheetConfig> {
        let config: SheetConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("attribute_cap = 80\n").expect("valid TOML");
        assert_eq!(config.attribute_cap, 80);
        assert_eq!(
            config.base_skill_points,
            SheetConfig::DEFAULT_BASE_SKILL_POINTS
        );
        assert_eq!(
            config.skill_points_per_modifier,
            SheetConfig::DEFAULT_SKILL_POINTS_PER_MODIFIER
        );
    }

    #[test]
    fn rejects_negative_cap() {
        assert!(ConfigLoader::parse("attribute_cap = -1\n").is_err());
    }

    #[test]
    fn rejects_skill_point_settings_that_would_overflow() {
        let err = ConfigLoader::parse("skill_points_per_modifier = 2147483647\n")
            .expect_err("rate out of range");
        assert!(err.to_string().contains("skill_points_per_modifier"));

        assert!(ConfigLoader::parse("base_skill_points = -3\n").is_err());
        assert!(ConfigLoader::parse("base_skill_points = 1000\n").is_ok());
    }

    #[test]
    fn empty_file_is_the_default_config() {
        let config = ConfigLoader::parse("").expect("empty TOML is valid");
        assert_eq!(config, SheetConfig::default());
    }
}
