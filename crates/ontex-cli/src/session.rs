//! A loaded document together with the engines that read it.

use crate::config::Config;
use crate::error::{CliError, Result};
use ontex_classifier::Classifier;
use ontex_domain::Ontology;
use ontex_loader::{LoadOutcome, LoadReport, OntologyLoader};
use ontex_query::QueryEngine;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Documents looked for in the working directory, in order.
pub const DISCOVERY_CANDIDATES: &[&str] = &["maison_elite.owl", "hello1.owl"];

/// Pick the document to open.
///
/// An explicit path wins; otherwise the first candidate present in `dir`;
/// otherwise the configured default.
pub fn discover(explicit: Option<&Path>, dir: &Path, configured: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some(found) = DISCOVERY_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
    {
        debug!(path = %found.display(), "Discovered ontology document");
        return Ok(found);
    }

    configured.map(Path::to_path_buf).ok_or_else(|| {
        CliError::NotFound(format!(
            "no ontology document: pass --file, or place {} in {}",
            DISCOVERY_CANDIDATES.join(" or "),
            dir.display()
        ))
    })
}

/// Everything a command needs: the immutable tables plus the engines.
#[derive(Debug)]
pub struct Session {
    source: PathBuf,
    ontology: Ontology,
    report: LoadReport,
    classifier: Classifier,
    engine: QueryEngine,
}

impl Session {
    /// Load `path` with the loader, classifier and query settings of `config`.
    pub fn open(path: &Path, config: &Config) -> Result<Self> {
        let loader = OntologyLoader::new(config.loader.clone())?;
        let outcome = loader.load_path(path)?;
        let classifier = Classifier::new(config.classifier.clone())?;
        let engine = QueryEngine::new(config.query.clone());
        Ok(Self::from_outcome(path, outcome, classifier, engine))
    }

    /// Assemble a session from an already loaded document.
    pub fn from_outcome(
        source: impl Into<PathBuf>,
        outcome: LoadOutcome,
        classifier: Classifier,
        engine: QueryEngine,
    ) -> Self {
        Self {
            source: source.into(),
            ontology: outcome.ontology,
            report: outcome.report,
            classifier,
            engine,
        }
    }

    /// Path the document was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The loaded tables.
    pub fn ontology(&self) -> &Ontology {
        &self.ontology
    }

    /// What the load skipped and dropped.
    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Dominant-type and bucket assignment.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Query evaluation.
    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }
}
