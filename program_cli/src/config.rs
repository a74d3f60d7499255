//! CLI configuration

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use program_rules::TriggerType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration, read from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Trigger used by `report` when none is given, as a trigger key
    pub default_trigger: Option<TriggerType>,

    /// Default output format
    pub output: Option<OutputFormat>,

    /// Log filter directive (e.g. "info", "program_core=debug")
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Load configuration from file. Returns `None` when the file does not
    /// exist, so the caller can report it once logging is up.
    pub fn load(path: &Path) -> CliResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents).map(Some)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(contents: &str) -> CliResult<Self> {
        toml::from_str(contents).map_err(|e| CliError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.default_trigger.is_none());
        assert!(config.output.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let config = CliConfig::load(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "output = \"json\"\n").unwrap();

        let config = CliConfig::load(&path).unwrap().unwrap();
        assert_eq!(config.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_parse_config() {
        let config = CliConfig::from_toml(
            r#"
            default_trigger = "boundary"
            output = "json"
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_trigger, Some(TriggerType::Boundary));
        assert_eq!(config.output, Some(OutputFormat::Json));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_unknown_trigger_key_rejected() {
        let err = CliConfig::from_toml(r#"default_trigger = "Boundary Set""#).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(CliConfig::from_toml("colour = true").is_err());
    }
}
