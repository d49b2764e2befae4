//! Query evaluation

use ontex_domain::{Individual, IndividualLookup, IndividualStore};
use tracing::debug;

use crate::config::QueryConfig;
use crate::query::{Comparison, Query};

/// Evaluates queries against an individual table
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    config: QueryConfig,
}

impl QueryEngine {
    /// Create an engine for the given vocabulary
    pub fn new(config: QueryConfig) -> Self {
        Self { config }
    }

    /// Active vocabulary
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Parse and evaluate a query string
    pub fn evaluate<'a>(&self, input: &str, store: &'a IndividualStore) -> Vec<&'a Individual> {
        self.run(&Query::parse(input), store)
    }

    /// Evaluate a parsed query; matches keep table order
    pub fn run<'a>(&self, query: &Query, store: &'a IndividualStore) -> Vec<&'a Individual> {
        let matches: Vec<&Individual> = store
            .iter()
            .filter(|individual| self.matches(query, individual, store))
            .collect();

        debug!(
            kind = query.kind(),
            query = %query,
            matches = matches.len(),
            "Query evaluated"
        );
        matches
    }

    /// Whether one individual satisfies a query
    ///
    /// `lookup` resolves the chef reference for `chef:` queries.
    pub fn matches<L>(&self, query: &Query, individual: &Individual, lookup: &L) -> bool
    where
        L: IndividualLookup + ?Sized,
    {
        let vocab = &self.config;
        match query {
            Query::Empty | Query::Malformed(_) => false,
            Query::Dish(kw) => self.is_dish(individual) && contains(individual, kw),
            Query::Chef(kw) => {
                self.is_dish(individual)
                    && individual
                        .first_value(&vocab.chef_property)
                        .and_then(|chef| lookup.lookup(chef))
                        .is_some_and(|chef| chef.display_name().to_lowercase().contains(kw.as_str()))
            }
            Query::Price(cmp, limit) => {
                float_value(individual, &vocab.price_property).is_some_and(|v| cmp.holds(v, *limit))
            }
            Query::Rating(limit) => float_value(individual, &vocab.rating_property)
                .is_some_and(|v| Comparison::Above.holds(v, *limit)),
            Query::Vegan => flag_is(individual, &vocab.vegan_property, "false", "true"),
            Query::Confirmed => {
                individual.has_type_ignore_case(&vocab.reservation_type)
                    && flag_is(individual, &vocab.confirmed_property, "false", "true")
            }
            Query::Pending => {
                individual.has_type_ignore_case(&vocab.reservation_type)
                    && flag_is(individual, &vocab.confirmed_property, "true", "false")
            }
            Query::Seasonal => {
                individual.has_type_ignore_case(&vocab.ingredient_type)
                    && flag_is(individual, &vocab.seasonal_property, "false", "true")
            }
            Query::Vip => individual.has_type_ignore_case(&vocab.vip_type),
            Query::Party(limit) => {
                individual.has_type_ignore_case(&vocab.reservation_type)
                    && int_value(individual, &vocab.party_size_property).is_some_and(|v| v > *limit)
            }
            Query::Visits(limit) => {
                int_value(individual, &vocab.visits_property).is_some_and(|v| v > *limit)
            }
            Query::Award(kw) => {
                individual.has_type_ignore_case(&vocab.award_type)
                    && (kw.is_empty() || contains(individual, kw))
            }
            Query::Ingredient(kw) => {
                individual.has_type_ignore_case(&vocab.ingredient_type) && contains(individual, kw)
            }
            Query::Text(text) => contains(individual, text),
        }
    }

    fn is_dish(&self, individual: &Individual) -> bool {
        self.config
            .dish_types
            .iter()
            .any(|t| individual.has_type_ignore_case(t))
    }
}

/// Evaluate a query string with the restaurant vocabulary
pub fn evaluate<'a>(query: &str, store: &'a IndividualStore) -> Vec<&'a Individual> {
    QueryEngine::default().evaluate(query, store)
}

fn contains(individual: &Individual, needle: &str) -> bool {
    individual.search_text().contains(needle)
}

/// Compare a boolean-ish assertion, using `default` when it is absent
fn flag_is(individual: &Individual, property: &str, default: &str, expected: &str) -> bool {
    individual
        .first_value(property)
        .unwrap_or(default)
        .eq_ignore_ascii_case(expected)
}

/// `None` when the assertion is missing or not a number
fn float_value(individual: &Individual, property: &str) -> Option<f64> {
    individual.first_value(property)?.parse().ok()
}

/// Absent counts as 0; `None` only when the value is not an integer
fn int_value(individual: &Individual, property: &str) -> Option<i64> {
    match individual.first_value(property) {
        Some(value) => value.parse().ok(),
        None => Some(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> IndividualStore {
        vec![
            Individual::new("Sofia", "urn:x#Sofia")
                .with_type("HeadChef")
                .with_assertion("name", "Sofia"),
            Individual::new("Karim", "urn:x#Karim").with_type("SousChef"),
            Individual::new("Velvet", "urn:x#Velvet")
                .with_type("Starter")
                .with_assertion("price", "25.00")
                .with_assertion("preparedBy", "Sofia"),
            Individual::new("Res1", "urn:x#Res1").with_type("Reservation"),
            Individual::new("Res2", "urn:x#Res2")
                .with_type("Reservation")
                .with_assertion("confirmed", "TRUE")
                .with_assertion("partySize", "six"),
            Individual::new("Regular", "urn:x#Regular").with_assertion("totalVisits", "21"),
        ]
        .into_iter()
        .collect()
    }

    fn ids<'a>(matches: &[&'a Individual]) -> Vec<&'a str> {
        matches.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_price_comparisons() {
        let store = store();
        assert_eq!(ids(&evaluate("price:<30", &store)), vec!["Velvet"]);
        assert!(evaluate("price:>50", &store).is_empty());
    }

    #[test]
    fn test_pending_defaults_missing_confirmation() {
        let store = store();
        assert_eq!(ids(&evaluate("pending", &store)), vec!["Res1"]);
        assert_eq!(ids(&evaluate("confirmed", &store)), vec!["Res2"]);
    }

    #[test]
    fn test_chef_uses_display_name_of_reference() {
        let store = store();
        assert_eq!(ids(&evaluate("chef:sofia", &store)), vec!["Velvet"]);
        assert!(evaluate("chef:karim", &store).is_empty());
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        assert!(evaluate("", &store()).is_empty());
        assert!(evaluate("  ", &store()).is_empty());
    }

    #[test]
    fn test_unparseable_party_size_excludes_individual() {
        let store = store();
        assert!(evaluate("party:>4", &store).is_empty());
        assert!(evaluate("party:>-1", &store).iter().any(|i| i.name == "Res1"));
        assert!(!evaluate("party:>-1", &store).iter().any(|i| i.name == "Res2"));
    }

    #[test]
    fn test_visits_defaults_to_zero() {
        let store = store();
        assert_eq!(ids(&evaluate("visits:>20", &store)), vec!["Regular"]);
        assert_eq!(evaluate("visits:>-1", &store).len(), store.len());
    }

    #[test]
    fn test_malformed_operand_matches_nothing() {
        assert!(evaluate("price:<cheap", &store()).is_empty());
    }

    #[test]
    fn test_free_text_preserves_table_order() {
        let store = store();
        assert_eq!(ids(&evaluate("res", &store)), vec!["Res1", "Res2"]);
    }

    #[test]
    fn test_custom_vocabulary() {
        let config = QueryConfig {
            reservation_type: "Booking".to_string(),
            ..QueryConfig::default()
        };
        let engine = QueryEngine::new(config);
        assert!(engine.evaluate("pending", &store()).is_empty());
    }
}
