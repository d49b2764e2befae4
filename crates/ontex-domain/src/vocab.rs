//! Vocabulary constants and URI reduction
//!
//! Every entity in an ontology is addressed by its *local name*: the part of
//! its URI after the last `#`, or after the last `/` when there is no `#`.
//! Two URIs that reduce to the same local name are the same entity.

/// OWL namespace (`owl:Class`, `owl:NamedIndividual`, ...)
pub const OWL_NS: &str = "http://www.w3.org/2002/07/owl#";

/// RDF syntax namespace (`rdf:about`, `rdf:resource`, `rdf:type`)
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// RDF Schema namespace (`rdfs:subClassOf`, `rdfs:domain`, `rdfs:range`)
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// Domain namespace used when none is configured
pub const DEFAULT_DOMAIN_NS: &str = "http://maison-elite.org/ontology#";

/// Marker for an absent property domain or range
pub const UNKNOWN: &str = "—";

/// Assertion property holding an individual's human-readable name
pub const NAME_PROPERTY: &str = "name";

/// Reduce a URI to its local name
///
/// # Examples
///
/// ```
/// use ontex_domain::vocab::local_name;
///
/// assert_eq!(local_name("http://example.org/onto#Chef"), "Chef");
/// assert_eq!(local_name("http://example.org/onto/Chef"), "Chef");
/// assert_eq!(local_name("Chef"), "Chef");
/// ```
pub fn local_name(uri: &str) -> &str {
    match uri.rfind('#') {
        Some(pos) => &uri[pos + 1..],
        None => match uri.rfind('/') {
            Some(pos) => &uri[pos + 1..],
            None => uri,
        },
    }
}

/// Whether a URI belongs to the core OWL vocabulary
///
/// Such types (`owl:NamedIndividual`, `owl:Thing`, ...) never surface as
/// domain types of an individual.
pub fn is_core_owl(uri: &str) -> bool {
    uri.contains(OWL_NS)
}
