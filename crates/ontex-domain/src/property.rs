//! Property schemas (object and datatype properties)

use crate::table::Named;
use crate::vocab::UNKNOWN;

/// An object property: relates an individual to another individual
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectPropertyDef {
    /// Local name (identity within the object-property table)
    pub name: String,

    /// Domain class, or [`UNKNOWN`] when not declared
    pub domain: String,

    /// Range class, or [`UNKNOWN`] when not declared
    pub range: String,
}

impl ObjectPropertyDef {
    /// Create an object property with unknown domain and range
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: UNKNOWN.to_string(),
            range: UNKNOWN.to_string(),
        }
    }
}

impl Named for ObjectPropertyDef {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A datatype property: relates an individual to a literal value
///
/// Unlike object properties, a datatype property may apply to several classes
/// and keeps every declared domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPropertyDef {
    /// Local name (identity within the data-property table)
    pub name: String,

    /// Domain classes in document order
    pub domains: Vec<String>,

    /// Literal datatype, or [`UNKNOWN`] when not declared
    pub range: String,
}

impl DataPropertyDef {
    /// Create a data property with no domains and unknown range
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domains: Vec::new(),
            range: UNKNOWN.to_string(),
        }
    }

    /// Domains joined for display (`—` when none were declared)
    pub fn domains_label(&self) -> String {
        if self.domains.is_empty() {
            UNKNOWN.to_string()
        } else {
            self.domains.join(", ")
        }
    }
}

impl Named for DataPropertyDef {
    fn name(&self) -> &str {
        &self.name
    }
}
