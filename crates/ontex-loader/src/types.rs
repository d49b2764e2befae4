//! Result types for the Loader

use ontex_domain::{Ontology, OntologyStats};

/// What a successful load produced and what it left out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Entity counts of the loaded tables
    pub stats: OntologyStats,

    /// Class elements without an identifying URI
    pub skipped_classes: usize,

    /// Object-property elements without an identifying URI
    pub skipped_object_properties: usize,

    /// Datatype-property elements without an identifying URI
    pub skipped_data_properties: usize,

    /// Individual elements without an identifying URI
    pub skipped_individuals: usize,

    /// Assertions whose value was empty after trimming
    pub dropped_assertions: usize,

    /// Entities that replaced an earlier entity with the same local name
    pub name_collisions: usize,
}

impl LoadReport {
    /// Total number of skipped entity elements
    pub fn skipped(&self) -> usize {
        self.skipped_classes
            + self.skipped_object_properties
            + self.skipped_data_properties
            + self.skipped_individuals
    }
}

/// A loaded ontology together with its load report
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// The immutable tables
    pub ontology: Ontology,

    /// Counts of what was loaded, skipped and dropped
    pub report: LoadReport,
}
