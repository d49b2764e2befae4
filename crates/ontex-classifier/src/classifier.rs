//! Dominant types, buckets and grouping

use std::collections::HashMap;

use ontex_domain::{Individual, IndividualLookup, IndividualStore};
use tracing::{debug, warn};

use crate::config::ClassifierConfig;
use crate::error::{ClassifierError, Result};

/// Resolve the single type that represents an individual
///
/// Scans `priority` in order and returns the first entry the individual
/// declares; otherwise its first declared type; otherwise `fallback`.
pub fn dominant_type<'a>(
    individual: &'a Individual,
    priority: &'a [String],
    fallback: &'a str,
) -> &'a str {
    priority
        .iter()
        .find(|p| individual.has_type(p))
        .map(String::as_str)
        .or_else(|| individual.first_type())
        .unwrap_or(fallback)
}

/// One bucket of a [`Grouping`]
#[derive(Debug, Clone, PartialEq)]
pub struct Group<'a> {
    /// Bucket name
    pub name: String,

    /// Members sorted by (first declared type, display name)
    pub members: Vec<&'a Individual>,
}

impl<'a> Group<'a> {
    /// Member identifiers in order
    pub fn ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.members.iter().map(|i| i.name.as_str())
    }

    /// Whether the bucket has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// The individual table partitioned into buckets
///
/// Configured buckets appear in configuration order, even when empty; the
/// other bucket is appended last when anything fell into it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grouping<'a> {
    groups: Vec<Group<'a>>,
}

impl<'a> Grouping<'a> {
    /// Bucket by name
    pub fn get(&self, name: &str) -> Option<&Group<'a>> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Buckets in presentation order
    pub fn iter(&self) -> std::slice::Iter<'_, Group<'a>> {
        self.groups.iter()
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no buckets
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Only the bucket called `name`, ignoring ASCII case; empty if absent
    pub fn select(&self, name: &str) -> Grouping<'a> {
        Grouping {
            groups: self
                .groups
                .iter()
                .filter(|g| g.name.eq_ignore_ascii_case(name))
                .cloned()
                .collect(),
        }
    }

    /// Number of grouped individuals across all buckets
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.members.len()).sum()
    }
}

impl<'g, 'a> IntoIterator for &'g Grouping<'a> {
    type Item = &'g Group<'a>;
    type IntoIter = std::slice::Iter<'g, Group<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Assigns individuals to buckets by their dominant type
#[derive(Debug, Clone)]
pub struct Classifier {
    config: ClassifierConfig,
    /// Dominant type → index into `config.buckets`
    bucket_index: HashMap<String, usize>,
}

impl Classifier {
    /// Create a classifier
    ///
    /// # Errors
    /// Returns [`ClassifierError::Config`] if the configuration does not
    /// validate.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate().map_err(ClassifierError::Config)?;

        let bucket_index = index_buckets(&config);
        Ok(Self {
            config,
            bucket_index,
        })
    }

    /// Create a classifier for the restaurant vocabulary
    pub fn default_config() -> Self {
        let config = ClassifierConfig::default();
        let bucket_index = index_buckets(&config);
        Self {
            config,
            bucket_index,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Bucket names in presentation order, the other bucket last
    pub fn bucket_names(&self) -> impl Iterator<Item = &str> {
        self.config
            .buckets
            .iter()
            .map(|b| b.name.as_str())
            .chain(std::iter::once(self.config.other_bucket.as_str()))
    }

    /// Dominant type of an individual under this configuration
    pub fn dominant_type<'a>(&'a self, individual: &'a Individual) -> &'a str {
        dominant_type(individual, &self.config.priority, &self.config.fallback_type)
    }

    /// Bucket a dominant type maps to
    pub fn bucket_for(&self, dominant_type: &str) -> &str {
        match self.bucket_index.get(dominant_type) {
            Some(&index) => &self.config.buckets[index].name,
            None => &self.config.other_bucket,
        }
    }

    /// Bucket an individual belongs to
    pub fn bucket_of(&self, individual: &Individual) -> &str {
        self.bucket_for(self.dominant_type(individual))
    }

    /// Reverse navigation: the bucket holding the individual named `id`
    ///
    /// `None` when `id` does not name an individual, as with a dangling
    /// reference.
    pub fn locate<L>(&self, id: &str, lookup: &L) -> Option<&str>
    where
        L: IndividualLookup + ?Sized,
    {
        lookup.lookup(id).map(|individual| self.bucket_of(individual))
    }

    /// Partition the individual table into buckets
    ///
    /// Every individual lands in exactly one bucket. Within a bucket, members
    /// are ordered by (first declared type or "", display name); ties keep
    /// table order.
    pub fn group<'a>(&self, store: &'a IndividualStore) -> Grouping<'a> {
        let mut buckets: Vec<Vec<&'a Individual>> = vec![Vec::new(); self.config.buckets.len()];
        let mut other = Vec::new();

        for individual in store {
            let dominant = self.dominant_type(individual);
            match self.bucket_index.get(dominant) {
                Some(&index) => buckets[index].push(individual),
                None => other.push(individual),
            }
        }

        let mut groups: Vec<Group<'a>> = self
            .config
            .buckets
            .iter()
            .zip(buckets)
            .map(|(rule, members)| Group {
                name: rule.name.clone(),
                members,
            })
            .collect();
        if !other.is_empty() {
            groups.push(Group {
                name: self.config.other_bucket.clone(),
                members: other,
            });
        }

        for group in &mut groups {
            group.members.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
        }

        debug!(
            buckets = groups.len(),
            individuals = store.len(),
            "Grouped individuals"
        );
        Grouping { groups }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::default_config()
    }
}

/// Dominant type → index of its bucket rule, warning about bucket types the
/// priority list never selects
fn index_buckets(config: &ClassifierConfig) -> HashMap<String, usize> {
    let mut bucket_index = HashMap::new();
    for (index, rule) in config.buckets.iter().enumerate() {
        for type_name in &rule.types {
            if !config.priority.contains(type_name) {
                warn!(
                    bucket = %rule.name,
                    type_name = %type_name,
                    "Bucket type is not in the priority list"
                );
            }
            bucket_index.insert(type_name.clone(), index);
        }
    }
    bucket_index
}

fn sort_key(individual: &Individual) -> (&str, &str) {
    (individual.first_type().unwrap_or(""), individual.display_name())
}
