//! Classifier error types

use thiserror::Error;

/// Errors that can occur while building a classifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for classifier operations
pub type Result<T> = std::result::Result<T, ClassifierError>;
