//! Vocabulary consulted by the query engine

use serde::{Deserialize, Serialize};

/// Type and property names the query operators refer to
///
/// Type names are compared ignoring ASCII case; property names exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Types `dish:` and `chef:` apply to
    pub dish_types: Vec<String>,
    /// Type `confirmed`, `pending` and `party:` apply to
    pub reservation_type: String,
    /// Type `seasonal` and `ingredient:` apply to
    pub ingredient_type: String,
    /// Type `award:` applies to
    pub award_type: String,
    /// Type `vip` looks for
    pub vip_type: String,

    /// Reference from a dish to the chef who prepares it
    pub chef_property: String,
    /// Numeric price
    pub price_property: String,
    /// Numeric rating
    pub rating_property: String,
    /// Boolean vegan flag
    pub vegan_property: String,
    /// Boolean reservation confirmation
    pub confirmed_property: String,
    /// Boolean seasonality flag
    pub seasonal_property: String,
    /// Integer number of guests
    pub party_size_property: String,
    /// Integer visit count
    pub visits_property: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            dish_types: vec![
                "Starter".to_string(),
                "MainCourse".to_string(),
                "Dessert".to_string(),
            ],
            reservation_type: "Reservation".to_string(),
            ingredient_type: "Ingredient".to_string(),
            award_type: "Award".to_string(),
            vip_type: "VIPCustomer".to_string(),
            chef_property: "preparedBy".to_string(),
            price_property: "price".to_string(),
            rating_property: "rating".to_string(),
            vegan_property: "isVegan".to_string(),
            confirmed_property: "confirmed".to_string(),
            seasonal_property: "seasonal".to_string(),
            party_size_property: "partySize".to_string(),
            visits_property: "totalVisits".to_string(),
        }
    }
}

impl QueryConfig {
    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
