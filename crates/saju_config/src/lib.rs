//! Engine configuration loaded from TOML.
//!
//! ```toml
//! calendar_path = "data/manselyeog_1900.csv"
//! solar_terms_path = "data/solar_terms_1900_2050.json"
//! # optional; built-in traditional tables when absent
//! ten_gods_path = "data/sipshin.json"
//! life_stages_path = "data/unseong.json"
//! reference_year = 2026
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Default "current year" for yearly projections.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2026;

/// Supported reference-year range.
pub const MIN_REFERENCE_YEAR: i32 = 1;
pub const MAX_REFERENCE_YEAR: i32 = 9999;

/// Errors from loading or validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("config parse error: {0}")]
    Parse(String),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

fn default_reference_year() -> i32 {
    DEFAULT_REFERENCE_YEAR
}

/// Data paths and the reference year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SajuConfig {
    pub calendar_path: PathBuf,
    pub solar_terms_path: PathBuf,
    #[serde(default)]
    pub ten_gods_path: Option<PathBuf>,
    #[serde(default)]
    pub life_stages_path: Option<PathBuf>,
    #[serde(default = "default_reference_year")]
    pub reference_year: i32,
}

impl SajuConfig {
    /// Config with the two required tables and defaults elsewhere.
    pub fn with_paths(calendar_path: PathBuf, solar_terms_path: PathBuf) -> Self {
        Self {
            calendar_path,
            solar_terms_path,
            ten_gods_path: None,
            life_stages_path: None,
            reference_year: DEFAULT_REFERENCE_YEAR,
        }
    }

    /// Parse and validate TOML content.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    ///
    /// Relative data paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        debug!(path = %path.display(), reference_year = config.reference_year, "loaded config");
        Ok(config)
    }

    /// Prefix every relative data path with `base`.
    pub fn resolve_relative_to(&mut self, base: &Path) {
        let fix = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        fix(&mut self.calendar_path);
        fix(&mut self.solar_terms_path);
        if let Some(p) = self.ten_gods_path.as_mut() {
            fix(p);
        }
        if let Some(p) = self.life_stages_path.as_mut() {
            fix(p);
        }
    }

    /// Reject empty paths and unsupported reference years.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calendar_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("calendar_path must not be empty"));
        }
        if self.solar_terms_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("solar_terms_path must not be empty"));
        }
        if self
            .ten_gods_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(ConfigError::Invalid("ten_gods_path must not be empty"));
        }
        if self
            .life_stages_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(ConfigError::Invalid("life_stages_path must not be empty"));
        }
        validate_reference_year(self.reference_year)
    }
}

/// Reject reference years outside [`MIN_REFERENCE_YEAR`]..=[`MAX_REFERENCE_YEAR`].
pub fn validate_reference_year(year: i32) -> Result<(), ConfigError> {
    if !(MIN_REFERENCE_YEAR..=MAX_REFERENCE_YEAR).contains(&year) {
        return Err(ConfigError::Invalid(
            "reference_year must be between 1 and 9999",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn minimal_config_uses_defaults() {
        let c = SajuConfig::parse(
            r#"
calendar_path = "cal.csv"
solar_terms_path = "terms.json"
"#,
        )
        .unwrap();
        assert_eq!(c.reference_year, DEFAULT_REFERENCE_YEAR);
        assert_eq!(c.ten_gods_path, None);
        assert_eq!(c, SajuConfig::with_paths("cal.csv".into(), "terms.json".into()));
    }

    #[test]
    fn full_config() {
        let c = SajuConfig::parse(
            r#"
calendar_path = "cal.csv"
solar_terms_path = "terms.json"
ten_gods_path = "sipshin.json"
life_stages_path = "unseong.json"
reference_year = 2025
"#,
        )
        .unwrap();
        assert_eq!(c.reference_year, 2025);
        assert_eq!(c.life_stages_path, Some(PathBuf::from("unseong.json")));
    }

    #[test]
    fn rejects_empty_path_and_bad_year() {
        let err = SajuConfig::parse("calendar_path = \"\"\nsolar_terms_path = \"t.json\"\n").unwrap_err();
        assert_eq!(err, ConfigError::Invalid("calendar_path must not be empty"));
        let err = SajuConfig::parse(
            "calendar_path = \"c\"\nsolar_terms_path = \"t\"\nreference_year = 0\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_and_missing_fields() {
        assert!(matches!(
            SajuConfig::parse("calendar_path = \"c\"\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SajuConfig::parse("calendar_path = \"c\"\nsolar_terms_path = \"t\"\ncolour = 1\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saju.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "calendar_path = \"cal.csv\"").unwrap();
        writeln!(f, "solar_terms_path = \"/abs/terms.json\"").unwrap();
        drop(f);
        let c = SajuConfig::load(&path).unwrap();
        assert_eq!(c.calendar_path, dir.path().join("cal.csv"));
        assert_eq!(c.solar_terms_path, PathBuf::from("/abs/terms.json"));
    }
}
