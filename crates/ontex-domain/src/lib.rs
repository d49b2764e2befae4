//! Ontex Domain Layer
//!
//! Core data model for the ontology explorer. It has no external dependencies
//! and performs no I/O; the loader, classifier and query engine all build on
//! the types defined here.
//!
//! ## Key Concepts
//!
//! - **Class**: a named category; may have several parent classes
//! - **Individual**: an instance with declared types and ordered assertions
//! - **Assertion**: one `(property, value)` fact; values naming another
//!   individual are weak references resolved through [`IndividualLookup`]
//! - **Local name**: the identity of every entity, see [`vocab::local_name`]
//!
//! ## Architecture
//!
//! - Tables are insertion-ordered and name-unique ([`NamedTable`])
//! - Everything is built once at load time and read-only afterwards
//! - The class hierarchy is derived, never stored in the source records

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod class;
pub mod hierarchy;
pub mod individual;
pub mod ontology;
pub mod property;
pub mod store;
pub mod table;
pub mod traits;
pub mod vocab;

// Re-exports for convenience
pub use class::OntologyClass;
pub use hierarchy::{HierarchyIndex, TreeNode};
pub use individual::{Assertion, Individual};
pub use ontology::{Ontology, OntologyStats};
pub use property::{DataPropertyDef, ObjectPropertyDef};
pub use store::{IndividualStore, Referrer, ResolvedAssertion};
pub use table::{Named, NamedTable};
pub use traits::IndividualLookup;
