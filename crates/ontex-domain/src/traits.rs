//! Trait definitions for read access to the loaded ontology
//!
//! Consumers (classifier, query engine, presentation layers) depend on these
//! capabilities rather than on concrete table types.

use crate::Individual;

/// Resolve an individual by local name
///
/// Object-property assertions store the referenced individual's name only;
/// this capability turns such a weak reference into the individual when it
/// exists. A `None` is a dangling reference, not an error.
pub trait IndividualLookup {
    /// Look up an individual by its local name
    fn lookup(&self, id: &str) -> Option<&Individual>;
}
