//! Ontex Loader
//!
//! Reads a constrained OWL/RDF-in-XML document into the immutable tables of
//! an [`Ontology`](ontex_domain::Ontology).
//!
//! # Overview
//!
//! The document uses four namespace roles: OWL for entity declarations, RDF
//! for identity and typing (`rdf:about`, `rdf:type`, `rdf:resource`), RDFS for
//! schema edges (`rdfs:subClassOf`, `rdfs:domain`, `rdfs:range`), and exactly
//! one domain namespace whose element names are the assertion properties.
//!
//! # Architecture
//!
//! ```text
//! file → quick-xml events → element tree → entity records → Ontology
//! ```
//!
//! # Failure semantics
//!
//! - Unreadable file or malformed XML: fatal [`LoadError`], nothing produced
//! - Entity without `rdf:about`, assertion with empty value: skipped, counted
//!   in the [`LoadReport`]
//!
//! # Example Usage
//!
//! ```no_run
//! use ontex_loader::{LoaderConfig, OntologyLoader};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let loader = OntologyLoader::new(LoaderConfig::default())?;
//! let outcome = loader.load_path("maison_elite.owl")?;
//!
//! println!("{} individuals", outcome.ontology.individuals().len());
//! println!("{} skipped", outcome.report.skipped());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod loader;
mod parser;
mod types;
pub mod xml;


pub use config::LoaderConfig;
pub use error::LoadError;
pub use loader::OntologyLoader;
pub use types::{LoadOutcome, LoadReport};
