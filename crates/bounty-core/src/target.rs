//! # Target Candidates

use serde::{Deserialize, Serialize};

/// A known, identifiable target a contract can be placed on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetCandidate {
    /// Display name of the target.
    pub name: String,
    /// DNA of the target, when the game knows it.
    #[serde(default)]
    pub dna: Option<String>,
}

impl TargetCandidate {
    /// A candidate with a known DNA.
    pub fn new(name: impl Into<String>, dna: Option<String>) -> Self {
        Self {
            name: name.into(),
            dna,
        }
    }

    /// A synthetic candidate for a free-typed name. Never carries DNA.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dna: None,
        }
    }
}
