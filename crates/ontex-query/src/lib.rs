//! Ontex Query Engine
//!
//! A small prefix-operator filter language over the individual table.
//!
//! # Overview
//!
//! A query string is lower-cased, trimmed and parsed into a typed [`Query`].
//! The first matching prefix fully determines the comparison; anything else
//! is a free-text substring search. Evaluation is a linear scan that keeps
//! table order.
//!
//! | Query | Matches |
//! |---|---|
//! | `dish:<kw>` | dishes whose text contains `kw` |
//! | `chef:<kw>` | dishes prepared by a chef whose name contains `kw` |
//! | `price:<N`, `price:>N` | individuals with a price below / above `N` |
//! | `rating:>N` | individuals rated above `N` |
//! | `vegan` | `isVegan` is true |
//! | `confirmed`, `pending` | reservations by confirmation state |
//! | `seasonal` | seasonal ingredients |
//! | `vip` | VIP customers |
//! | `party:>N` | reservations for more than `N` guests |
//! | `visits:>N` | individuals with more than `N` visits |
//! | `award:<kw>` | awards (all when `kw` is empty) |
//! | `ingredient:<kw>` | ingredients whose text contains `kw` |
//! | anything else | individuals whose text contains it |
//!
//! The empty query matches nothing. A numeric operand that does not parse
//! yields a query that matches nothing; a numeric assertion that does not
//! parse excludes only that individual.
//!
//! # Example Usage
//!
//! ```no_run
//! use ontex_query::QueryEngine;
//! # use ontex_domain::IndividualStore;
//!
//! # fn example(store: &IndividualStore) {
//! let engine = QueryEngine::default();
//! for individual in engine.evaluate("price:<30", store) {
//!     println!("{}", individual.display_name());
//! }
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
pub mod guide;
mod query;

pub use config::QueryConfig;
pub use engine::{evaluate, QueryEngine};
pub use query::{Comparison, Query};
