//! Insertion-ordered tables keyed by local name

use std::collections::HashMap;

/// An entity addressed by its local name
pub trait Named {
    /// The local name identifying this entity within its table
    fn name(&self) -> &str;
}

/// A name-unique table that remembers insertion order
///
/// Iteration follows the order in which names were first inserted. Inserting
/// an entity under a name already present replaces the stored entity but
/// keeps its original position, so reloading the same document always yields
/// the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTable<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Named> NamedTable<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert an entity, returning the entity it replaced (if any)
    pub fn insert(&mut self, entry: T) -> Option<T> {
        match self.index.get(entry.name()) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos], entry)),
            None => {
                self.index.insert(entry.name().to_string(), self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }

    /// Look up an entity by local name
    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    /// Check whether a name is present
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name())
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Named> Default for NamedTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Named> FromIterator<T> for NamedTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}

impl<'a, T> IntoIterator for &'a NamedTable<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry(&'static str, u32);

    impl Named for Entry {
        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let table: NamedTable<Entry> =
            [Entry("b", 1), Entry("a", 2), Entry("c", 3)].into_iter().collect();
        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut table = NamedTable::new();
        table.insert(Entry("a", 1));
        table.insert(Entry("b", 2));

        let old = table.insert(Entry("a", 9));
        assert_eq!(old, Some(Entry("a", 1)));
        assert_eq!(table.len(), 2);
        assert_eq!(table.iter().next(), Some(&Entry("a", 9)));
        assert_eq!(table.get("a").map(|e| e.1), Some(9));
    }

    #[test]
    fn test_missing_lookup() {
        let table: NamedTable<Entry> = NamedTable::new();
        assert!(table.get("x").is_none());
        assert!(!table.contains("x"));
        assert!(table.is_empty());
    }
}
