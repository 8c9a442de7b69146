//! Dispenser configuration
//!
//! Every value has a default matching the classic dispenser, so a config
//! file only needs the fields it wants to change.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Window dimensions in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Size of a candy and the vertical gap between stacked candies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandyConfig {
    pub width: f32,
    pub height: f32,
    pub gap: f32,
}

impl Default for CandyConfig {
    fn default() -> Self {
        Self {
            width: 90.0,
            height: 35.0,
            gap: 3.0,
        }
    }
}

/// Spring geometry and physics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Drawn width of the coil; the dispenser frame is four times this
    pub width: f32,
    /// Resting length, also the height of the dispenser frame
    pub max_extension: f32,
    /// Hard stop the spring cannot be compressed past
    pub min_extension: f32,
    pub spring_constant: f32,
    /// Force one candy applies to the spring
    pub candy_force: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            max_extension: 300.0,
            min_extension: 25.0,
            spring_constant: 0.8,
            candy_force: 10.0,
        }
    }
}

impl SpringConfig {
    /// Distance the spring moves per candy (Hooke's law: x = F / k)
    pub fn step(&self) -> f32 {
        self.candy_force / self.spring_constant
    }
}

/// Full dispenser configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispenserConfig {
    pub window: WindowConfig,
    pub candy: CandyConfig,
    pub spring: SpringConfig,
}

impl DispenserConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Reject values the scene or spring cannot work with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid("window", "width and height must be non-zero"));
        }
        positive("candy.width", self.candy.width)?;
        positive("candy.height", self.candy.height)?;
        if self.candy.gap.is_nan() || self.candy.gap < 0.0 {
            return Err(invalid("candy.gap", "must not be negative"));
        }

        let spring = &self.spring;
        positive("spring.width", spring.width)?;
        positive("spring.max_extension", spring.max_extension)?;
        positive("spring.spring_constant", spring.spring_constant)?;
        positive("spring.candy_force", spring.candy_force)?;
        if spring.min_extension.is_nan() || spring.min_extension < 0.0 {
            return Err(invalid("spring.min_extension", "must not be negative"));
        }
        if spring.min_extension >= spring.max_extension {
            return Err(invalid(
                "spring.min_extension",
                "must be below spring.max_extension",
            ));
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> ConfigResult<()> {
    // NaN fails this comparison too
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be a positive number"))
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DispenserConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.candy.width, 90.0);
        assert_eq!(config.spring.step(), 12.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = DispenserConfig::from_toml_str(
            r#"
            [spring]
            candy_force = 20.0
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.spring.candy_force, 20.0);
        assert_eq!(config.spring.spring_constant, 0.8);
        assert_eq!(config.spring.step(), 25.0);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = DispenserConfig::from_toml_str("").expect("empty config should parse");
        assert_eq!(config, DispenserConfig::default());
    }

    #[test]
    fn test_min_above_max_rejected() {
        let err = DispenserConfig::from_toml_str(
            r#"
            [spring]
            min_extension = 400.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "spring.min_extension",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_spring_constant_rejected() {
        let mut config = DispenserConfig::default();
        config.spring.spring_constant = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = DispenserConfig::from_toml_str("[window\nwidth = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_serialization() {
        let mut config = DispenserConfig::default();
        config.window.width = 800;
        let toml_str = config.to_toml_string().expect("Failed to serialize");
        let parsed = DispenserConfig::from_toml_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dispenser.toml");
        std::fs::write(&path, "[candy]\ngap = 5.0\n").expect("write config");

        let config = DispenserConfig::load(&path).expect("load config");
        assert_eq!(config.candy.gap, 5.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = DispenserConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
