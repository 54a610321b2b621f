//! # Contract Rules
//!
//! Limits and defaults shared by the composer and whatever validates the
//! request on the other end. Loaded from YAML; every key is optional and
//! falls back to the stock game values.
//!
//! ```yaml
//! default_reward: 5000
//! max_name_length: 32
//! max_vessel_length: 32
//! max_description_length: 1000
//! categories:
//!   criminal:
//!     name: bounty-contracts-category-criminal
//!     color: "#CF2525"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::BountyError;

/// Reward pre-filled into a fresh composer.
pub const DEFAULT_REWARD: i32 = 5000;
/// Maximum target name length, in characters.
pub const MAX_NAME_LENGTH: usize = 32;
/// Maximum free-typed vessel name length, in characters.
pub const MAX_VESSEL_LENGTH: usize = 32;
/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Display metadata for a category. Only the rendering layer reads it;
/// the composer only checks that an entry exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMeta {
    /// Localization key of the category name.
    pub name: String,
    /// Accent color, as `#RRGGBB`.
    pub color: String,
}

impl CategoryMeta {
    fn stock(category: Category) -> Self {
        let color = match category {
            Category::Criminal => "#CF2525",
            Category::Vacancy => "#2F9E44",
            Category::Construction => "#E8A317",
            Category::Service => "#3B7DD8",
            Category::Other => "#8A8A8A",
        };
        Self {
            name: format!("bounty-contracts-category-{}", category.as_str()),
            color: color.to_string(),
        }
    }
}

/// Rules and configuration for composing bounty contracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BountyRules {
    /// Reward pre-filled into the reward field.
    pub default_reward: i32,
    /// Maximum target name length, in characters.
    pub max_name_length: usize,
    /// Maximum free-typed vessel name length, in characters.
    pub max_vessel_length: usize,
    /// Maximum description length, in characters.
    pub max_description_length: usize,
    /// Display metadata per category. Categories without an entry are not
    /// offered by the composer.
    pub categories: BTreeMap<Category, CategoryMeta>,
}

impl Default for BountyRules {
    fn default() -> Self {
        Self {
            default_reward: DEFAULT_REWARD,
            max_name_length: MAX_NAME_LENGTH,
            max_vessel_length: MAX_VESSEL_LENGTH,
            max_description_length: MAX_DESCRIPTION_LENGTH,
            categories: Category::all()
                .iter()
                .map(|c| (*c, CategoryMeta::stock(*c)))
                .collect(),
        }
    }
}

impl BountyRules {
    /// Parse rules from YAML and check them.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, BountyError> {
        let rules: Self = serde_yaml::from_str(yaml)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Read, parse and check a rules file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, BountyError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Reject rules no draft could ever satisfy.
    pub fn validate(&self) -> Result<(), BountyError> {
        if self.default_reward < 0 {
            return Err(BountyError::InvalidRules(format!(
                "default_reward must not be negative, got {}",
                self.default_reward
            )));
        }
        for (field, value) in [
            ("max_name_length", self.max_name_length),
            ("max_vessel_length", self.max_vessel_length),
            ("max_description_length", self.max_description_length),
        ] {
            if value == 0 {
                return Err(BountyError::InvalidRules(format!("{field} must be positive")));
            }
        }
        Ok(())
    }

    /// Display metadata for `category`, if configured.
    pub fn meta(&self, category: Category) -> Option<&CategoryMeta> {
        self.categories.get(&category)
    }
}
