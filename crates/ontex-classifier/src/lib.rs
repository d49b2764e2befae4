//! Ontex Classifier
//!
//! Resolves a single presentational type per individual and partitions the
//! individual table into named buckets.
//!
//! The Classifier provides:
//! - Dominant-type resolution (first priority entry the individual declares)
//! - Bucket lookup for a dominant type, and reverse lookup from an identifier
//! - Grouping: every individual in exactly one bucket, in a stable order
//!
//! Priority and bucket tables are plain configuration, so the same engine
//! serves any domain vocabulary.
//!
//! # Examples
//!
//! ```no_run
//! use ontex_classifier::{Classifier, ClassifierConfig};
//! # use ontex_domain::IndividualStore;
//!
//! # fn example(store: &IndividualStore) -> ontex_classifier::Result<()> {
//! let classifier = Classifier::new(ClassifierConfig::default())?;
//! for group in classifier.group(store).iter() {
//!     println!("{} ({})", group.name, group.members.len());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod error;

pub use classifier::{dominant_type, Classifier, Group, Grouping};
pub use config::{BucketRule, ClassifierConfig};
pub use error::{ClassifierError, Result};
