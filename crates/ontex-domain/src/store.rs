//! Individual Store - identifier-keyed, insertion-ordered individual table

use crate::table::NamedTable;
use crate::traits::IndividualLookup;
use crate::{Assertion, Individual};

/// An assertion paired with the individual its value refers to (if any)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedAssertion<'a> {
    /// The assertion as stored
    pub assertion: &'a Assertion,

    /// The referenced individual; `None` for literals and dangling references
    pub target: Option<&'a Individual>,
}

/// An incoming reference: `source` asserts `property` with this individual as value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Referrer<'a> {
    /// The individual holding the assertion
    pub source: &'a Individual,

    /// Property through which it refers
    pub property: &'a str,
}

/// Normalized mapping from individual identifier to its record
///
/// Iteration order is document order. Built once at load time and read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndividualStore {
    table: NamedTable<Individual>,
}

impl IndividualStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an individual; a later individual with the same local name
    /// replaces the earlier one in place
    pub fn insert(&mut self, individual: Individual) -> Option<Individual> {
        self.table.insert(individual)
    }

    /// Get an individual by identifier
    pub fn get(&self, id: &str) -> Option<&Individual> {
        self.table.get(id)
    }

    /// Check whether an identifier is present
    pub fn contains(&self, id: &str) -> bool {
        self.table.contains(id)
    }

    /// Iterate in document order
    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.table.iter()
    }

    /// Identifiers in document order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.table.names()
    }

    /// Number of individuals
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Pair each assertion of `individual` with the individual it names
    pub fn resolve<'a>(&'a self, individual: &'a Individual) -> Vec<ResolvedAssertion<'a>> {
        individual
            .assertions
            .iter()
            .map(|assertion| ResolvedAssertion {
                assertion,
                target: self.get(&assertion.value),
            })
            .collect()
    }

    /// Individuals whose assertions name `id` as a value, in document order
    pub fn referrers<'a>(&'a self, id: &str) -> Vec<Referrer<'a>> {
        self.iter()
            .flat_map(move |source| {
                source
                    .assertions
                    .iter()
                    .filter(move |a| a.value == id)
                    .map(move |a| Referrer {
                        source,
                        property: a.property.as_str(),
                    })
            })
            .collect()
    }
}

impl IndividualLookup for IndividualStore {
    fn lookup(&self, id: &str) -> Option<&Individual> {
        self.get(id)
    }
}

impl FromIterator<Individual> for IndividualStore {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        Self {
            table: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a IndividualStore {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> IndividualStore {
        [
            Individual::new("Sofia", "u#Sofia")
                .with_type("HeadChef")
                .with_assertion("name", "Sofia Marchetti"),
            Individual::new("Tartare", "u#Tartare")
                .with_type("Starter")
                .with_assertion("preparedBy", "Sofia")
                .with_assertion("pairedWith", "GhostWine"),
            Individual::new("Souffle", "u#Souffle")
                .with_type("Dessert")
                .with_assertion("preparedBy", "Sofia"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_lookup_and_order() {
        let store = store();
        assert_eq!(store.len(), 3);
        assert_eq!(store.ids().collect::<Vec<_>>(), vec!["Sofia", "Tartare", "Souffle"]);
        assert!(store.lookup("Sofia").is_some());
        assert!(store.lookup("Nobody").is_none());
    }

    #[test]
    fn test_dangling_reference_resolves_to_none() {
        let store = store();
        let tartare = store.get("Tartare").unwrap();
        let resolved = store.resolve(tartare);

        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].target.map(|i| i.name.as_str()), Some("Sofia"));
        assert_eq!(resolved[1].assertion.value, "GhostWine");
        assert!(resolved[1].target.is_none());
    }

    #[test]
    fn test_referrers_in_document_order() {
        let store = store();
        let refs = store.referrers("Sofia");
        let sources: Vec<&str> = refs.iter().map(|r| r.source.name.as_str()).collect();
        assert_eq!(sources, vec!["Tartare", "Souffle"]);
        assert!(refs.iter().all(|r| r.property == "preparedBy"));
    }

    #[test]
    fn test_duplicate_identifier_replaces_in_place() {
        let mut store = store();
        let replaced = store.insert(Individual::new("Sofia", "other#Sofia"));
        assert!(replaced.is_some());
        assert_eq!(store.len(), 3);
        assert_eq!(store.iter().next().map(|i| i.uri.as_str()), Some("other#Sofia"));
    }
}
