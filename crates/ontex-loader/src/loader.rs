//! Main Loader implementation

use std::fs;
use std::path::Path;

use tracing::{info, instrument};

use crate::config::LoaderConfig;
use crate::error::LoadError;
use crate::parser::build_ontology;
use crate::types::LoadOutcome;
use crate::xml::parse_document;

/// Reads an ontology document into immutable tables
///
/// Loading is a one-shot, side-effect-free read: either the whole document is
/// turned into an [`Ontology`](ontex_domain::Ontology) or a [`LoadError`] is
/// returned and nothing is produced.
#[derive(Debug, Clone)]
pub struct OntologyLoader {
    config: LoaderConfig,
}

impl OntologyLoader {
    /// Create a loader
    ///
    /// # Errors
    /// Returns [`LoadError::Config`] if the configuration does not validate.
    pub fn new(config: LoaderConfig) -> Result<Self, LoadError> {
        config.validate().map_err(LoadError::Config)?;
        Ok(Self { config })
    }

    /// Create a loader with the default configuration
    pub fn default_config() -> Self {
        Self {
            config: LoaderConfig::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load an ontology from a file
    ///
    /// # Errors
    /// - [`LoadError::Io`] if the file cannot be opened or read
    /// - [`LoadError::TooLarge`] if it exceeds `max_document_bytes`
    /// - [`LoadError::Xml`] if it is not well-formed or cannot be decoded in
    ///   its declared encoding
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<LoadOutcome, LoadError> {
        let path = path.as_ref();
        let io_error = |source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        };

        let size = fs::metadata(path).map_err(io_error)?.len();
        if size > self.config.max_document_bytes {
            return Err(LoadError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit: self.config.max_document_bytes,
            });
        }

        let content = fs::read(path).map_err(io_error)?;
        self.load_bytes(&content)
    }

    /// Load an ontology from an in-memory UTF-8 document
    ///
    /// # Errors
    /// Returns [`LoadError::Xml`] if the document is not well-formed.
    pub fn load_str(&self, content: &str) -> Result<LoadOutcome, LoadError> {
        self.load_bytes(content.as_bytes())
    }

    /// Load an ontology from raw document bytes
    ///
    /// The text encoding is taken from a byte-order mark or the XML
    /// declaration, UTF-8 when neither is present.
    ///
    /// # Errors
    /// Returns [`LoadError::Xml`] if the document is not well-formed or holds
    /// bytes its encoding cannot decode.
    pub fn load_bytes(&self, content: &[u8]) -> Result<LoadOutcome, LoadError> {
        let root = parse_document(content)?;
        let (ontology, report) = build_ontology(&root, &self.config);

        info!(
            classes = report.stats.classes,
            object_properties = report.stats.object_properties,
            data_properties = report.stats.data_properties,
            individuals = report.stats.individuals,
            skipped = report.skipped(),
            dropped_assertions = report.dropped_assertions,
            "Ontology loaded"
        );

        Ok(LoadOutcome { ontology, report })
    }
}

impl Default for OntologyLoader {
    fn default() -> Self {
        Self::default_config()
    }
}
