//! Configuration for the Loader

use ontex_domain::vocab::DEFAULT_DOMAIN_NS;
use serde::{Deserialize, Serialize};

/// Configuration for the Loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Namespace whose elements are read as individual assertions
    pub domain_namespace: String,

    /// Largest document accepted, in bytes
    pub max_document_bytes: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            domain_namespace: DEFAULT_DOMAIN_NS.to_string(),
            max_document_bytes: 64 * 1024 * 1024,
        }
    }
}

impl LoaderConfig {
    /// Default configuration reading assertions from `namespace`
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            domain_namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.domain_namespace.trim().is_empty() {
            return Err("domain_namespace must not be empty".to_string());
        }
        if self.max_document_bytes == 0 {
            return Err("max_document_bytes must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LoaderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.domain_namespace, "http://maison-elite.org/ontology#");
    }

    #[test]
    fn test_empty_namespace_rejected() {
        let config = LoaderConfig::with_namespace("  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_size_limit_rejected() {
        let mut config = LoaderConfig::default();
        config.max_document_bytes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = LoaderConfig::from_toml(r#"domain_namespace = "http://example.org/menu#""#).unwrap();
        assert_eq!(config.domain_namespace, "http://example.org/menu#");
        assert_eq!(config.max_document_bytes, LoaderConfig::default().max_document_bytes);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = LoaderConfig::with_namespace("http://example.org/x/");
        let parsed = LoaderConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }
}
