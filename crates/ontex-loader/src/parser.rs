//! Extract ontology entities from a parsed document
//!
//! Only direct children of the root element are considered. An element that
//! lacks its identifying `rdf:about` is not an entity and is skipped; nothing
//! here fails once the document itself is well-formed.

use ontex_domain::vocab::{is_core_owl, local_name, OWL_NS, RDFS_NS, RDF_NS, UNKNOWN};
use ontex_domain::{
    DataPropertyDef, Individual, IndividualStore, NamedTable, ObjectPropertyDef, Ontology,
    OntologyClass,
};
use tracing::debug;

use crate::config::LoaderConfig;
use crate::types::LoadReport;
use crate::xml::Element;

/// Build the four tables from a document root
pub(crate) fn build_ontology(root: &Element, config: &LoaderConfig) -> (Ontology, LoadReport) {
    let mut report = LoadReport::default();

    let mut classes = NamedTable::new();
    for element in root.children_named(OWL_NS, "Class") {
        match parse_class(element) {
            Some(class) => {
                if classes.insert(class).is_some() {
                    report.name_collisions += 1;
                }
            }
            None => {
                debug!("Skipping owl:Class without rdf:about");
                report.skipped_classes += 1;
            }
        }
    }

    let mut object_properties = NamedTable::new();
    for element in root.children_named(OWL_NS, "ObjectProperty") {
        match parse_object_property(element) {
            Some(property) => {
                if object_properties.insert(property).is_some() {
                    report.name_collisions += 1;
                }
            }
            None => {
                debug!("Skipping owl:ObjectProperty without rdf:about");
                report.skipped_object_properties += 1;
            }
        }
    }

    let mut data_properties = NamedTable::new();
    for element in root.children_named(OWL_NS, "DatatypeProperty") {
        match parse_data_property(element) {
            Some(property) => {
                if data_properties.insert(property).is_some() {
                    report.name_collisions += 1;
                }
            }
            None => {
                debug!("Skipping owl:DatatypeProperty without rdf:about");
                report.skipped_data_properties += 1;
            }
        }
    }

    let mut individuals = IndividualStore::new();
    for element in root.children_named(OWL_NS, "NamedIndividual") {
        match parse_individual(element, &config.domain_namespace, &mut report) {
            Some(individual) => {
                if individuals.insert(individual).is_some() {
                    report.name_collisions += 1;
                }
            }
            None => {
                debug!("Skipping owl:NamedIndividual without rdf:about");
                report.skipped_individuals += 1;
            }
        }
    }

    let ontology = Ontology::new(classes, object_properties, data_properties, individuals);
    report.stats = ontology.stats();
    (ontology, report)
}

/// `rdf:about` of an element, treating an empty value as absent
fn about(element: &Element) -> Option<&str> {
    non_empty(element.attribute(RDF_NS, "about"))
}

/// `rdf:resource` of an element, treating an empty value as absent
fn resource(element: &Element) -> Option<&str> {
    non_empty(element.attribute(RDF_NS, "resource"))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_class(element: &Element) -> Option<OntologyClass> {
    let uri = about(element)?;
    let mut class = OntologyClass::new(local_name(uri), uri);
    for parent in element.children_named(RDFS_NS, "subClassOf").filter_map(resource) {
        class.parents.push(local_name(parent).to_string());
    }
    Some(class)
}

/// First `rdfs:domain`/`rdfs:range` child's resource, or the unknown marker
fn single_reference(element: &Element, local: &str) -> String {
    element
        .child_named(RDFS_NS, local)
        .and_then(resource)
        .map(|r| local_name(r).to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn parse_object_property(element: &Element) -> Option<ObjectPropertyDef> {
    let uri = about(element)?;
    Some(ObjectPropertyDef {
        name: local_name(uri).to_string(),
        domain: single_reference(element, "domain"),
        range: single_reference(element, "range"),
    })
}

fn parse_data_property(element: &Element) -> Option<DataPropertyDef> {
    let uri = about(element)?;
    Some(DataPropertyDef {
        name: local_name(uri).to_string(),
        domains: element
            .children_named(RDFS_NS, "domain")
            .filter_map(resource)
            .map(|r| local_name(r).to_string())
            .collect(),
        range: single_reference(element, "range"),
    })
}

fn parse_individual(
    element: &Element,
    domain_namespace: &str,
    report: &mut LoadReport,
) -> Option<Individual> {
    let uri = about(element)?;
    let mut individual = Individual::new(local_name(uri), uri);

    individual.types = element
        .children_named(RDF_NS, "type")
        .filter_map(resource)
        .filter(|r| !is_core_owl(r))
        .map(|r| local_name(r).to_string())
        .collect();

    for child in element
        .children
        .iter()
        .filter(|c| c.name.in_namespace(domain_namespace))
    {
        let value = match resource(child) {
            Some(reference) => local_name(reference),
            None => child.text.trim(),
        };
        if value.is_empty() {
            debug!(
                individual = %individual.name,
                property = %child.name.local,
                "Dropping assertion with empty value"
            );
            report.dropped_assertions += 1;
            continue;
        }
        individual = individual.with_assertion(child.name.local.as_str(), value);
    }

    Some(individual)
}
