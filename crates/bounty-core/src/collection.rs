//! # Bounty Collections
//!
//! A collection is a contract board (security, public, ...) and offers an
//! ordered set of categories. The composer asks a [`CategorySource`] for
//! that set once, when it is built.
//!
//! ```yaml
//! collections:
//!   security:
//!     name: bounty-contracts-collection-security
//!     categories: [criminal, other]
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::BountyError;
use crate::identity::CollectionId;

/// Supplies the categories valid for a collection.
pub trait CategorySource {
    /// Ordered categories offered by `collection`, or `None` if the
    /// collection is unknown.
    fn categories(&self, collection: &CollectionId) -> Option<Vec<Category>>;
}

/// Definition of a single collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionPrototype {
    /// Localization key of the collection name.
    pub name: String,
    /// Categories offered, in display order.
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// All known collections, keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionCatalog {
    /// Collections by identifier.
    #[serde(default)]
    pub collections: BTreeMap<CollectionId, CollectionPrototype>,
}

impl CollectionCatalog {
    /// Parse a catalog from YAML and check it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, BountyError> {
        let catalog: Self = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read, parse and check a catalog file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, BountyError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Add or replace a collection.
    pub fn insert(&mut self, id: CollectionId, prototype: CollectionPrototype) {
        self.collections.insert(id, prototype);
    }

    /// Look up a collection.
    pub fn get(&self, id: &CollectionId) -> Option<&CollectionPrototype> {
        self.collections.get(id)
    }

    /// Reject collections that list a category more than once.
    pub fn validate(&self) -> Result<(), BountyError> {
        for (id, proto) in &self.collections {
            let mut seen = HashSet::new();
            for category in &proto.categories {
                if !seen.insert(category) {
                    return Err(BountyError::InvalidCollection {
                        collection: id.to_string(),
                        reason: format!("category {category} listed twice"),
                    });
                }
            }
        }
        Ok(())
    }
}

impl CategorySource for CollectionCatalog {
    fn categories(&self, collection: &CollectionId) -> Option<Vec<Category>> {
        self.get(collection).map(|proto| proto.categories.clone())
    }
}
