//! # Localization
//!
//! The composer never renders text. It picks a message key and the host
//! resolves it through a [`Localizer`]. The one exception is the label of
//! the "unknown vessel" entry, which lives inside the vessel list and is
//! resolved once when the composer is built.

use std::collections::HashMap;

/// Status shown when the draft can be submitted.
pub const MSG_READY: &str = "bounty-contracts-ui-create-ready";
/// Reward is missing, unparseable or negative.
pub const MSG_INVALID_REWARD: &str = "bounty-contracts-ui-create-error-invalid-price";
/// Target name is empty.
pub const MSG_NO_NAME: &str = "bounty-contracts-ui-create-error-no-name";
/// Target name exceeds the configured limit.
pub const MSG_NAME_TOO_LONG: &str = "bounty-contracts-ui-create-error-name-too-long";
/// Free-typed vessel exceeds the configured limit.
pub const MSG_VESSEL_TOO_LONG: &str = "bounty-contracts-ui-create-error-vessel-name-too-long";
/// Description exceeds the configured limit.
pub const MSG_DESCRIPTION_TOO_LONG: &str = "bounty-contracts-ui-create-error-description-too-long";
/// Label of the sentinel vessel entry.
pub const MSG_VESSEL_UNKNOWN: &str = "bounty-contracts-ui-create-vessel-unknown";
/// Placeholder of the description field.
pub const MSG_DESCRIPTION_PLACEHOLDER: &str = "bounty-contracts-ui-create-description-placeholder";

/// Maps message keys to display strings.
pub trait Localizer {
    /// Display string for `key`.
    fn get_string(&self, key: &str) -> String;
}

/// A flat key to text table. Missing keys resolve to the key itself.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// An empty catalog; every lookup echoes its key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock English texts for every composer message.
    pub fn english() -> Self {
        let mut catalog = Self::new();
        for (key, text) in [
            (MSG_READY, "All looks good. Ready to create!"),
            (MSG_INVALID_REWARD, "Reward must be a non-negative number."),
            (MSG_NO_NAME, "Target name can't be empty."),
            (MSG_NAME_TOO_LONG, "Target name is too long."),
            (MSG_VESSEL_TOO_LONG, "Vessel name is too long."),
            (MSG_DESCRIPTION_TOO_LONG, "Description is too long."),
            (MSG_VESSEL_UNKNOWN, "unknown vessel"),
            (MSG_DESCRIPTION_PLACEHOLDER, "Describe the target and the job..."),
            ("bounty-contracts-category-criminal", "Criminal"),
            ("bounty-contracts-category-vacancy", "Vacancy"),
            ("bounty-contracts-category-construction", "Construction"),
            ("bounty-contracts-category-service", "Service"),
            ("bounty-contracts-category-other", "Other"),
        ] {
            catalog.insert(key, text);
        }
        catalog
    }

    /// Add or replace a message.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.messages.insert(key.into(), text.into());
    }
}

impl Localizer for MessageCatalog {
    fn get_string(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
