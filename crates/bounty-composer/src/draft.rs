//! # Composer Draft
//!
//! Raw, possibly half-typed field values. For the target name and the
//! vessel both an index and a free-text value are kept; the matching
//! toggle decides which one is authoritative, never both.

use serde::{Deserialize, Serialize};

use bounty_core::Category;

/// Mutable draft state owned by a single composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposerDraft {
    /// Selected category.
    pub category: Category,
    /// Free-text name entry instead of picking from the known targets.
    pub custom_name: bool,
    /// Free-text vessel entry instead of picking from the known vessels.
    pub custom_vessel: bool,
    /// Index into the known targets.
    pub target_index: usize,
    /// Free-typed target name.
    pub name_text: String,
    /// Index into the known vessels; 0 is the unknown-vessel entry.
    pub vessel_index: usize,
    /// Free-typed vessel name.
    pub vessel_text: String,
    /// Raw reward text, parsed on demand.
    pub reward_text: String,
    /// Description text.
    pub description: String,
}

impl ComposerDraft {
    /// A fresh draft: list selection mode for both fields, first entries
    /// selected, and `default_reward` pre-filled.
    pub fn new(category: Category, default_reward: i32) -> Self {
        Self {
            category,
            custom_name: false,
            custom_vessel: false,
            target_index: 0,
            name_text: String::new(),
            vessel_index: 0,
            vessel_text: String::new(),
            reward_text: default_reward.to_string(),
            description: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_draft() {
        let draft = ComposerDraft::new(Category::Criminal, 500);
        assert_eq!(draft.reward_text, "500");
        assert!(!draft.custom_name);
        assert!(!draft.custom_vessel);
        assert_eq!(draft.target_index, 0);
        assert_eq!(draft.vessel_index, 0);
        assert!(draft.description.is_empty());
    }
}
