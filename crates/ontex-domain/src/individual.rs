//! Individuals and their property assertions

use crate::table::Named;
use crate::vocab::NAME_PROPERTY;

/// A single `(property, value)` fact attached to an individual
///
/// The value is either a literal (data-property assertion) or the local name
/// of another individual (object-property assertion). References are weak:
/// nothing guarantees the named individual exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assertion {
    /// Local name of the asserted property
    pub property: String,

    /// Trimmed literal or referenced individual's local name (never empty)
    pub value: String,
}

impl Assertion {
    /// Create an assertion
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// A concrete instance entity
///
/// Assertions are an ordered list rather than a map: the same property may
/// occur several times (one-to-many relations), and order is document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    /// Local name (identity within the individual table)
    pub name: String,

    /// Full URI as written in the document
    pub uri: String,

    /// Declared domain types, in document order
    pub types: Vec<String>,

    /// Property assertions, in document order
    pub assertions: Vec<Assertion>,
}

impl Individual {
    /// Create an individual with no types or assertions
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            types: Vec::new(),
            assertions: Vec::new(),
        }
    }

    /// Add a declared type
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.types.push(type_name.into());
        self
    }

    /// Add an assertion
    pub fn with_assertion(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.assertions.push(Assertion::new(property, value));
        self
    }

    /// First declared type, if any
    pub fn first_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    /// Whether the individual declares the given type (exact match)
    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t == type_name)
    }

    /// Whether the individual declares the given type, ignoring ASCII case
    pub fn has_type_ignore_case(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t.eq_ignore_ascii_case(type_name))
    }

    /// All values asserted for a property, in document order
    pub fn values_of<'a>(&'a self, property: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.assertions
            .iter()
            .filter(move |a| a.property == property)
            .map(|a| a.value.as_str())
    }

    /// First value asserted for a property ("first value wins")
    pub fn first_value(&self, property: &str) -> Option<&str> {
        self.assertions
            .iter()
            .find(|a| a.property == property)
            .map(|a| a.value.as_str())
    }

    /// Human-readable name: the first `name` assertion, else the identifier
    pub fn display_name(&self) -> &str {
        self.first_value(NAME_PROPERTY).unwrap_or(&self.name)
    }

    /// Lower-cased text used for substring search
    ///
    /// Identifier, display name and every assertion value, space separated.
    pub fn search_text(&self) -> String {
        let mut parts = Vec::with_capacity(self.assertions.len() + 2);
        parts.push(self.name.to_lowercase());
        parts.push(self.display_name().to_lowercase());
        parts.extend(self.assertions.iter().map(|a| a.value.to_lowercase()));
        parts.join(" ")
    }
}

impl Named for Individual {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Individual {
        Individual::new("TastingMenu", "http://x.org/o#TastingMenu")
            .with_type("DegustationMenu")
            .with_assertion("name", "Grand Tasting")
            .with_assertion("includes", "Tartare")
            .with_assertion("includes", "Souffle")
            .with_assertion("name", "Ignored Second Name")
    }

    #[test]
    fn test_multi_valued_assertions_keep_order() {
        let ind = menu();
        let dishes: Vec<&str> = ind.values_of("includes").collect();
        assert_eq!(dishes, vec!["Tartare", "Souffle"]);
    }

    #[test]
    fn test_first_value_wins() {
        assert_eq!(menu().first_value("name"), Some("Grand Tasting"));
        assert_eq!(menu().display_name(), "Grand Tasting");
    }

    #[test]
    fn test_display_name_falls_back_to_identifier() {
        let ind = Individual::new("Salt", "http://x.org/o#Salt");
        assert_eq!(ind.display_name(), "Salt");
    }

    #[test]
    fn test_search_text_is_lowercase_and_complete() {
        let text = menu().search_text();
        assert!(text.starts_with("tastingmenu grand tasting"));
        assert!(text.contains("souffle"));
        assert!(text.contains("ignored second name"));
    }

    #[test]
    fn test_type_checks() {
        let ind = menu();
        assert!(ind.has_type("DegustationMenu"));
        assert!(!ind.has_type("degustationmenu"));
        assert!(ind.has_type_ignore_case("degustationmenu"));
        assert_eq!(ind.first_type(), Some("DegustationMenu"));
    }
}
