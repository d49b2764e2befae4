//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use ontex_classifier::ClassifierConfig;
use ontex_loader::LoaderConfig;
use ontex_query::QueryConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Document opened when no `--file` is given and none is found in the
    /// working directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ontology: Option<PathBuf>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Document loader settings
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Dominant-type priority and bucket tables
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Query vocabulary
    #[serde(default)]
    pub query: QueryConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Directory holding the configuration file and REPL history.
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".ontex"))
    }

    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Load configuration from the default location, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the embedded engine configurations.
    pub fn validate(&self) -> Result<()> {
        self.loader
            .validate()
            .map_err(|e| CliError::Config(format!("[loader] {}", e)))?;
        self.classifier
            .validate()
            .map_err(|e| CliError::Config(format!("[classifier] {}", e)))?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.ontology.is_none());
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.settings.history_size, 1000);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
ontology = "/srv/data/menu.owl"

[settings]
format = "json"

[loader]
domain_namespace = "http://example.org/bistro#"

[[classifier.buckets]]
name = "Wines"
types = ["Wine"]
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.ontology, Some(PathBuf::from("/srv/data/menu.owl")));
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
        assert_eq!(config.loader.domain_namespace, "http://example.org/bistro#");
        assert_eq!(config.classifier.buckets.len(), 1);
        assert_eq!(config.classifier.priority.len(), 15);
        assert_eq!(config.query.chef_property, "preparedBy");
    }

    #[test]
    fn test_invalid_classifier_section_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[classifier]\nother_bucket = \"\"").unwrap();

        let result = Config::load_from(file.path());
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_malformed_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[settings\ncolor = maybe").unwrap();

        assert!(matches!(Config::load_from(file.path()), Err(CliError::Toml(_))));
    }
}
