use anyhow::{Context, Result};
use biodata_types::{BiodataPatch, BiodataRecord, ViewName};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML configuration.
///
/// ```toml
/// start_view = "profile"
///
/// [seed]
/// name = "Asha"
/// age = 15
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// View name or route path the TUI opens on
    #[serde(default)]
    pub start_view: Option<String>,

    /// Field overrides merged onto the built-in seed record
    #[serde(default)]
    pub seed: BiodataPatch,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `path` if given, otherwise the defaults
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Built-in seed with the configured overrides applied
    pub fn seed_record(&self) -> BiodataRecord {
        let mut record = BiodataRecord::seed();
        record.merge(self.seed.clone());
        record
    }

    pub fn start_view(&self) -> Result<Option<ViewName>> {
        self.start_view
            .as_deref()
            .map(|name| name.parse::<ViewName>())
            .transpose()
            .context("Invalid start_view in config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_seed() {
        let config = Config::parse("").unwrap();

        assert_eq!(config.seed_record(), BiodataRecord::seed());
        assert_eq!(config.start_view().unwrap(), None);
    }

    #[test]
    fn test_seed_overrides_merge() {
        let config = Config::parse(
            r#"
start_view = "/profile"

[seed]
name = "Asha"
profilePic = ""
"#,
        )
        .unwrap();

        let record = config.seed_record();
        assert_eq!(record.name, "Asha");
        assert_eq!(record.profile_pic, "");
        assert_eq!(record.roll, "2315022");
        assert_eq!(config.start_view().unwrap(), Some(ViewName::Profile));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(Config::parse("theme = \"dark\"").is_err());
        assert!(Config::parse("[seed]\nnickname = \"x\"").is_err());
    }

    #[test]
    fn test_bad_start_view() {
        let config = Config::parse("start_view = \"settings\"").unwrap();
        assert!(config.start_view().is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
