//! # Composer Errors

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by the composer to its host.
#[derive(Error, Debug)]
pub enum ComposerError {
    /// Create was pressed while the draft does not validate.
    #[error("contract is not ready: {0}")]
    NotReady(ValidationError),

    /// A session script could not be parsed.
    #[error("invalid script: {0}")]
    Script(#[from] serde_yaml::Error),

    /// IO error while reading a script.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
