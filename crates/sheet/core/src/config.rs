/// Rule constants and tunable parameters for a character sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetConfig {
    /// Maximum sum of all attribute values.
    pub attribute_cap: i32,
    /// Skill points granted at an Intelligence modifier of zero.
    pub base_skill_points: i32,
    /// Skill points gained (or lost) per point of Intelligence modifier.
    pub skill_points_per_modifier: i32,
}

impl SheetConfig {
    pub const DEFAULT_ATTRIBUTE_CAP: i32 = 70;
    pub const DEFAULT_BASE_SKILL_POINTS: i32 = 10;
    pub const DEFAULT_SKILL_POINTS_PER_MODIFIER: i32 = 4;

    pub const MAX_ATTRIBUTE_CAP: i32 = 10_000;
    pub const MAX_SKILL_POINT_SETTING: i32 = 1_000;

    pub const fn new() -> Self {
        Self {
            attribute_cap: Self::DEFAULT_ATTRIBUTE_CAP,
            base_skill_points: Self::DEFAULT_BASE_SKILL_POINTS,
            skill_points_per_modifier: Self::DEFAULT_SKILL_POINTS_PER_MODIFIER,
        }
    }

    /// Checks every field against its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("attribute_cap", self.attribute_cap, Self::MAX_ATTRIBUTE_CAP)?;
        check_range(
            "base_skill_points",
            self.base_skill_points,
            Self::MAX_SKILL_POINT_SETTING,
        )?;
        check_range(
            "skill_points_per_modifier",
            self.skill_points_per_modifier,
            Self::MAX_SKILL_POINT_SETTING,
        )
    }

    #[must_use]
    pub const fn with_attribute_cap(mut self, attribute_cap: i32) -> Self {
        self.attribute_cap = attribute_cap;
        self
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`SheetConfig`] field outside its accepted range.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{field} must be between 0 and {max} (got {value})")]
pub struct ConfigError {
    pub field: &'static str,
    pub value: i32,
    pub max: i32,
}

fn check_range(field: &'static str, value: i32, max: i32) -> Result<(), ConfigError> {
    if (0..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError { field, value, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SheetConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let negative_cap = SheetConfig::default().with_attribute_cap(-1);
        assert_eq!(
            negative_cap.validate().map_err(|e| e.field),
            Err("attribute_cap")
        );

        let huge_rate = SheetConfig {
            skill_points_per_modifier: i32::MAX,
            ..SheetConfig::default()
        };
        let err = huge_rate.validate().expect_err("out of range");
        assert_eq!(err.field, "skill_points_per_modifier");
        assert_eq!(err.value, i32::MAX);
    }
}
