//! # Error Types
//!
//! Errors raised while loading or checking the configuration that feeds the
//! composer. Field validation of a draft is not an error; see the composer's
//! `ValidationResult`.

use thiserror::Error;

/// Top-level error type for bounty contract configuration.
#[derive(Error, Debug)]
pub enum BountyError {
    /// Rules configuration is structurally valid YAML but semantically unusable.
    #[error("invalid rules: {0}")]
    InvalidRules(String),

    /// A category identifier did not name any known category.
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    /// A collection references something the catalog cannot satisfy.
    #[error("invalid collection {collection}: {reason}")]
    InvalidCollection {
        /// The offending collection identifier.
        collection: String,
        /// Why the collection was rejected.
        reason: String,
    },

    /// YAML parsing failed.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
