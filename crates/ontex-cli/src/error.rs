//! Errors surfaced by the `ontex` binary.

use thiserror::Error;

/// Result alias used by every command.
pub type Result<T> = std::result::Result<T, CliError>;

/// Everything a command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unreadable or invalid configuration file
    #[error("Configuration error: {0}")]
    Config(String),

    /// The ontology document could not be loaded
    #[error(transparent)]
    Load(#[from] ontex_loader::LoadError),

    /// Invalid classifier configuration
    #[error(transparent)]
    Classifier(#[from] ontex_classifier::ClassifierError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed REPL line or argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An identifier, bucket or document that does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}
