//! Classifier configuration

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One named bucket and the dominant types it collects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketRule {
    /// Bucket name
    pub name: String,

    /// Dominant types mapped to this bucket
    #[serde(default)]
    pub types: Vec<String>,
}

impl BucketRule {
    /// Create a bucket rule
    pub fn new<I, S>(name: impl Into<String>, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            types: types.into_iter().map(Into::into).collect(),
        }
    }
}

/// Priority and bucket tables for the Classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Types in descending precedence; the first one an individual declares
    /// becomes its dominant type
    pub priority: Vec<String>,

    /// Buckets in presentation order
    pub buckets: Vec<BucketRule>,

    /// Bucket for dominant types no rule mentions
    pub other_bucket: String,

    /// Dominant type of an individual that declares no types
    pub fallback_type: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::restaurant()
    }
}

impl ClassifierConfig {
    /// The fine-dining restaurant vocabulary
    pub fn restaurant() -> Self {
        let priority = [
            "Restaurant",
            "HeadChef",
            "SousChef",
            "PastryChef",
            "VIPCustomer",
            "RegularCustomer",
            "Starter",
            "MainCourse",
            "Dessert",
            "DegustationMenu",
            "ALaCarteMenu",
            "SeasonalMenu",
            "Reservation",
            "Ingredient",
            "Award",
        ];

        Self {
            priority: priority.iter().map(|s| s.to_string()).collect(),
            buckets: vec![
                BucketRule::new("Restaurant", ["Restaurant"]),
                BucketRule::new("Dishes", ["Starter", "MainCourse", "Dessert"]),
                BucketRule::new("Chefs", ["HeadChef", "SousChef", "PastryChef"]),
                BucketRule::new("Menus", ["DegustationMenu", "ALaCarteMenu", "SeasonalMenu"]),
                BucketRule::new("Customers", ["VIPCustomer", "RegularCustomer"]),
                BucketRule::new("Reservations", ["Reservation"]),
                BucketRule::new("Ingredients", ["Ingredient"]),
                BucketRule::new("Awards", ["Award"]),
            ],
            other_bucket: "Other".to_string(),
            fallback_type: "Other".to_string(),
        }
    }

    /// No priorities and no buckets
    ///
    /// Every individual's dominant type is its first declared type and every
    /// individual lands in the other bucket. Suits documents from unknown
    /// vocabularies.
    pub fn generic() -> Self {
        Self {
            priority: Vec::new(),
            buckets: Vec::new(),
            other_bucket: "Other".to_string(),
            fallback_type: "Other".to_string(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.other_bucket.trim().is_empty() {
            return Err("other_bucket must not be empty".to_string());
        }
        if self.fallback_type.trim().is_empty() {
            return Err("fallback_type must not be empty".to_string());
        }

        let mut seen = HashSet::new();
        for entry in &self.priority {
            if entry.trim().is_empty() {
                return Err("priority entries must not be empty".to_string());
            }
            if !seen.insert(entry.as_str()) {
                return Err(format!("duplicate priority entry `{}`", entry));
            }
        }

        let mut bucket_names = HashSet::new();
        let mut mapped = HashSet::new();
        for rule in &self.buckets {
            if rule.name.trim().is_empty() {
                return Err("bucket names must not be empty".to_string());
            }
            if rule.name == self.other_bucket {
                return Err(format!(
                    "bucket `{}` has the same name as other_bucket",
                    rule.name
                ));
            }
            if !bucket_names.insert(rule.name.as_str()) {
                return Err(format!("duplicate bucket `{}`", rule.name));
            }
            for type_name in &rule.types {
                if !mapped.insert(type_name.as_str()) {
                    return Err(format!("type `{}` is mapped to more than one bucket", type_name));
                }
            }
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
    fn test_default_config_is_restaurant() {
        let config = ClassifierConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.priority.len(), 15);
        assert_eq!(config.priority[0], "Restaurant");
        assert_eq!(config.buckets.len(), 8);
        assert_eq!(config.other_bucket, "Other");
    }

    #[test]
    fn test_generic_config() {
        let config = ClassifierConfig::generic();
        assert!(config.validate().is_ok());
        assert!(config.priority.is_empty());
        assert!(config.buckets.is_empty());
    }

    #[test]
    fn test_duplicate_priority_rejected() {
        let mut config = ClassifierConfig::default();
        config.priority.push("Dessert".to_string());
        assert!(config.validate().unwrap_err().contains("Dessert"));
    }

    #[test]
    fn test_type_in_two_buckets_rejected() {
        let mut config = ClassifierConfig::default();
        config.buckets.push(BucketRule::new("Sweets", ["Dessert"]));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_names_rejected() {
        let mut config = ClassifierConfig::default();
        config.buckets.push(BucketRule::new(" ", Vec::<String>::new()));
        assert!(config.validate().is_err());

        let mut config = ClassifierConfig::default();
        config.other_bucket = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bucket_named_like_other_rejected() {
        let mut config = ClassifierConfig::generic();
        config.buckets.push(BucketRule::new("Other", ["Thing"]));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClassifierConfig::default();
        let toml_str = config.to_toml().unwrap();
        assert_eq!(ClassifierConfig::from_toml(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ClassifierConfig::from_toml(
            r#"
            priority = ["Wine", "Cheese"]

            [[buckets]]
            name = "Cellar"
            types = ["Wine"]
            "#,
        )
        .unwrap();

        assert_eq!(config.priority, vec!["Wine", "Cheese"]);
        assert_eq!(config.buckets, vec![BucketRule::new("Cellar", ["Wine"])]);
        assert_eq!(config.other_bucket, "Other");
        assert!(config.validate().is_ok());
    }
}
