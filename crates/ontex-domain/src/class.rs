//! Ontology classes - the schema layer's named categories

use crate::table::Named;

/// A class declared in the ontology
///
/// A class may name any number of parents through `subClassOf`, so the class
/// graph is a DAG rather than a tree. Parents are kept in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OntologyClass {
    /// Local name (identity within the class table)
    pub name: String,

    /// Full URI as written in the document
    pub uri: String,

    /// Local names of the parent classes, in document order
    pub parents: Vec<String>,
}

impl OntologyClass {
    /// Create a class with no parents
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            parents: Vec::new(),
        }
    }

    /// Add a parent class by local name
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parents.push(parent.into());
        self
    }

    /// A root class declares no parents
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

impl Named for OntologyClass {
    fn name(&self) -> &str {
        &self.name
    }
}
