//! Error types for the Loader

use std::path::PathBuf;
use thiserror::Error;

/// Fatal load failures
///
/// Any of these means no ontology is available. Structurally incomplete
/// entities inside an otherwise readable document are not errors; they are
/// skipped and counted in the [`LoadReport`](crate::LoadReport).
#[derive(Error, Debug)]
pub enum LoadError {
    /// The document could not be opened or read
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The document is not well-formed XML
    #[error("Malformed XML: {0}")]
    Xml(String),

    /// The document exceeds the configured size limit
    #[error("Document {} is {size} bytes (limit: {limit})", path.display())]
    TooLarge {
        /// Path of the rejected document
        path: PathBuf,
        /// Actual size in bytes
        size: u64,
        /// Configured limit in bytes
        limit: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<quick_xml::Error> for LoadError {
    fn from(e: quick_xml::Error) -> Self {
        LoadError::Xml(e.to_string())
    }
}

impl From<quick_xml::encoding::EncodingError> for LoadError {
    fn from(e: quick_xml::encoding::EncodingError) -> Self {
        LoadError::Xml(format!("cannot decode document text: {}", e))
    }
}

impl From<quick_xml::events::attributes::AttrError> for LoadError {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        LoadError::Xml(format!("bad attribute: {}", e))
    }
}
