//! The loaded ontology: four immutable tables plus the derived hierarchy

use crate::hierarchy::HierarchyIndex;
use crate::table::NamedTable;
use crate::traits::IndividualLookup;
use crate::{DataPropertyDef, Individual, IndividualStore, ObjectPropertyDef, OntologyClass};

/// Entity counts for a loaded ontology
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OntologyStats {
    /// Number of classes
    pub classes: usize,

    /// Number of object properties
    pub object_properties: usize,

    /// Number of datatype properties
    pub data_properties: usize,

    /// Number of individuals
    pub individuals: usize,
}

impl OntologyStats {
    /// Object and datatype properties together
    pub fn properties(&self) -> usize {
        self.object_properties + self.data_properties
    }
}

/// A fully loaded ontology
///
/// Constructed once; every accessor is read-only, so the value can be shared
/// freely between the classifier, the query engine and any presentation
/// layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ontology {
    classes: NamedTable<OntologyClass>,
    object_properties: NamedTable<ObjectPropertyDef>,
    data_properties: NamedTable<DataPropertyDef>,
    individuals: IndividualStore,
    hierarchy: HierarchyIndex,
}

impl Ontology {
    /// Assemble an ontology and derive its hierarchy index
    pub fn new(
        classes: NamedTable<OntologyClass>,
        object_properties: NamedTable<ObjectPropertyDef>,
        data_properties: NamedTable<DataPropertyDef>,
        individuals: IndividualStore,
    ) -> Self {
        let hierarchy = HierarchyIndex::from_classes(&classes);
        Self {
            classes,
            object_properties,
            data_properties,
            individuals,
            hierarchy,
        }
    }

    /// Class table
    pub fn classes(&self) -> &NamedTable<OntologyClass> {
        &self.classes
    }

    /// Object-property table
    pub fn object_properties(&self) -> &NamedTable<ObjectPropertyDef> {
        &self.object_properties
    }

    /// Datatype-property table
    pub fn data_properties(&self) -> &NamedTable<DataPropertyDef> {
        &self.data_properties
    }

    /// Individual table
    pub fn individuals(&self) -> &IndividualStore {
        &self.individuals
    }

    /// Derived parent→children index
    pub fn hierarchy(&self) -> &HierarchyIndex {
        &self.hierarchy
    }

    /// Whether `property` is declared as an object property
    pub fn is_object_property(&self, property: &str) -> bool {
        self.object_properties.contains(property)
    }

    /// Entity counts
    pub fn stats(&self) -> OntologyStats {
        OntologyStats {
            classes: self.classes.len(),
            object_properties: self.object_properties.len(),
            data_properties: self.data_properties.len(),
            individuals: self.individuals.len(),
        }
    }
}

impl IndividualLookup for Ontology {
    fn lookup(&self, id: &str) -> Option<&Individual> {
        self.individuals.get(id)
    }
}
