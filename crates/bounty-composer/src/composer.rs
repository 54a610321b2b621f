//! # Contract Composer
//!
//! The form behind "create bounty contract". The host calls a mutator for
//! every discrete input event (text change, selection, toggle) and reads
//! [`ContractComposer::status`] and the getters afterwards to refresh what
//! it shows.
//!
//! ## Known targets and vessels
//!
//! Both lists are private sorted copies. Re-supplying one replaces it and
//! resets the matching selection to index 0. The vessel list always starts
//! with the unknown-vessel entry, so index 0 is valid even before the host
//! supplies any vessels.
//!
//! ## Category side effect
//!
//! Selecting any category other than `Criminal` switches name entry to
//! free text. Selecting `Criminal` switches it back to picking from the
//! known targets. The user can flip the toggle afterwards either way.

use bounty_core::locale::MSG_VESSEL_UNKNOWN;
use bounty_core::{
    BountyContractRequest, BountyRules, Category, CategorySource, CollectionId, Localizer,
    TargetCandidate,
};

use crate::draft::ComposerDraft;
use crate::error::ComposerError;
use crate::host::{ComposerEvent, ComposerHost};
use crate::validation::{parse_reward, validate_fields, DraftFields, ValidationResult};

/// Composer for a single bounty contract request.
#[derive(Debug, Clone)]
pub struct ContractComposer {
    collection: CollectionId,
    rules: BountyRules,
    categories: Vec<Category>,
    unknown_vessel: String,
    targets: Vec<TargetCandidate>,
    vessels: Vec<String>,
    draft: ComposerDraft,
    status: ValidationResult,
}

impl ContractComposer {
    /// Build a composer for `collection`.
    ///
    /// Offered categories are those the source lists for the collection and
    /// the rules carry display metadata for, in the source's order. The
    /// first one is selected. An unknown collection offers no categories.
    pub fn new(
        collection: CollectionId,
        source: &dyn CategorySource,
        rules: BountyRules,
        localizer: &dyn Localizer,
    ) -> Self {
        let listed = source.categories(&collection).unwrap_or_else(|| {
            tracing::warn!(%collection, "unknown bounty collection; no categories offered");
            Vec::new()
        });
        let categories: Vec<Category> = listed
            .into_iter()
            .filter(|c| rules.meta(*c).is_some())
            .collect();

        let category = categories.first().copied().unwrap_or_default();
        let unknown_vessel = localizer.get_string(MSG_VESSEL_UNKNOWN);
        let draft = ComposerDraft::new(category, rules.default_reward);

        let mut composer = Self {
            collection,
            rules,
            categories,
            vessels: vec![unknown_vessel.clone()],
            unknown_vessel,
            targets: Vec::new(),
            draft,
            status: ValidationResult::Valid,
        };
        composer.refresh();
        tracing::debug!(
            collection = %composer.collection,
            categories = composer.categories.len(),
            "contract composer created"
        );
        composer
    }

    // ── Known lists ──────────────────────────────────────────────────

    /// Replace the known targets with `targets` sorted by name.
    ///
    /// The sort is stable, so equal names keep their supplied order.
    /// Selection resets to the first target.
    pub fn set_targets(&mut self, targets: impl IntoIterator<Item = TargetCandidate>) {
        let mut targets: Vec<TargetCandidate> = targets.into_iter().collect();
        targets.sort_by(|a, b| a.name.cmp(&b.name));
        self.targets = targets;
        self.draft.target_index = 0;
        tracing::debug!(count = self.targets.len(), "known targets replaced");
        self.refresh();
    }

    /// Replace the known vessels.
    ///
    /// Blank entries are dropped, the rest sorted, and the unknown-vessel
    /// entry put first. Selection resets to that entry.
    pub fn set_vessels(&mut self, vessels: impl IntoIterator<Item = String>) {
        let mut named: Vec<String> = vessels
            .into_iter()
            .filter(|v| !v.trim().is_empty())
            .collect();
        named.sort();

        let mut list = Vec::with_capacity(named.len() + 1);
        list.push(self.unknown_vessel.clone());
        list.extend(named);
        self.vessels = list;
        self.draft.vessel_index = 0;
        tracing::debug!(count = self.vessels.len() - 1, "known vessels replaced");
        self.refresh();
    }

    // ── Mutators ─────────────────────────────────────────────────────

    /// Select a category and apply its name-entry side effect.
    ///
    /// Categories this collection does not offer are ignored.
    pub fn select_category(&mut self, category: Category) {
        if !self.categories.contains(&category) {
            tracing::debug!(%category, "category not offered by collection; ignored");
            return;
        }
        self.draft.category = category;
        self.draft.custom_name = category.prefers_custom_name();
        tracing::debug!(%category, custom_name = self.draft.custom_name, "category selected");
        self.refresh();
    }

    /// Select a known target. Out-of-range indices are ignored.
    pub fn select_target_by_index(&mut self, index: usize) {
        if index < self.targets.len() {
            self.draft.target_index = index;
            tracing::debug!(index, "target selected");
        }
        self.refresh();
    }

    /// Select a known vessel. Out-of-range indices are ignored.
    pub fn select_vessel_by_index(&mut self, index: usize) {
        if index < self.vessels.len() {
            self.draft.vessel_index = index;
            tracing::debug!(index, "vessel selected");
        }
        self.refresh();
    }

    /// Switch between free-text and list name entry.
    pub fn toggle_custom_name(&mut self, on: bool) {
        self.draft.custom_name = on;
        tracing::debug!(on, "custom name toggled");
        self.refresh();
    }

    /// Switch between free-text and list vessel entry. The list selection
    /// falls back to the unknown-vessel entry.
    pub fn toggle_custom_vessel(&mut self, on: bool) {
        self.draft.custom_vessel = on;
        self.draft.vessel_index = 0;
        tracing::debug!(on, "custom vessel toggled");
        self.refresh();
    }

    /// Replace the raw reward text.
    pub fn set_reward_text(&mut self, text: impl Into<String>) {
        self.draft.reward_text = text.into();
        self.refresh();
    }

    /// Replace the description text.
    pub fn set_description_text(&mut self, text: impl Into<String>) {
        self.draft.description = text.into();
        self.refresh();
    }

    /// Replace the free-typed target name.
    pub fn set_custom_name_text(&mut self, text: impl Into<String>) {
        self.draft.name_text = text.into();
        self.refresh();
    }

    /// Replace the free-typed vessel name.
    pub fn set_custom_vessel_text(&mut self, text: impl Into<String>) {
        self.draft.vessel_text = text.into();
        self.refresh();
    }

    // ── Derived getters ──────────────────────────────────────────────

    /// Reward parsed from the raw text, `None` when it is not an integer.
    pub fn reward(&self) -> Option<i32> {
        parse_reward(&self.draft.reward_text)
    }

    /// The current target: the selected known target, or a synthetic one
    /// built from the free-typed name. `None` if the selection points past
    /// the known targets (e.g. the list is empty).
    pub fn target_info(&self) -> Option<TargetCandidate> {
        if self.draft.custom_name {
            Some(TargetCandidate::named(self.draft.name_text.clone()))
        } else {
            self.targets.get(self.draft.target_index).cloned()
        }
    }

    /// Effective target name, empty when there is no current target.
    pub fn target_name(&self) -> &str {
        if self.draft.custom_name {
            &self.draft.name_text
        } else {
            self.targets
                .get(self.draft.target_index)
                .map(|t| t.name.as_str())
                .unwrap_or("")
        }
    }

    /// DNA of the current target. Free-typed targets never have one.
    pub fn target_dna(&self) -> Option<&str> {
        if self.draft.custom_name {
            return None;
        }
        self.targets
            .get(self.draft.target_index)
            .and_then(|t| t.dna.as_deref())
    }

    /// DNA to display next to the target; hidden when absent or empty.
    pub fn dna_display(&self) -> Option<&str> {
        self.target_dna().filter(|dna| !dna.is_empty())
    }

    /// Effective vessel: the selected known vessel, or the free-typed text
    /// verbatim (possibly empty).
    pub fn vessel(&self) -> &str {
        if self.draft.custom_vessel {
            &self.draft.vessel_text
        } else {
            self.vessels
                .get(self.draft.vessel_index)
                .map(String::as_str)
                .unwrap_or("")
        }
    }

    /// Currently selected category.
    pub fn category(&self) -> Category {
        self.draft.category
    }

    /// Categories offered by this composer's collection.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Collection the request will be posted to.
    pub fn collection(&self) -> &CollectionId {
        &self.collection
    }

    /// Known targets, sorted by name.
    pub fn targets(&self) -> &[TargetCandidate] {
        &self.targets
    }

    /// Known vessels, unknown-vessel entry first.
    pub fn vessels(&self) -> &[String] {
        &self.vessels
    }

    /// Raw draft state.
    pub fn draft(&self) -> &ComposerDraft {
        &self.draft
    }

    /// Rules this composer validates against.
    pub fn rules(&self) -> &BountyRules {
        &self.rules
    }

    // ── Validation and output ────────────────────────────────────────

    /// Classify the current draft. Pure; repeated calls without an
    /// intervening mutation return the same result.
    pub fn validate(&self) -> ValidationResult {
        let fields = DraftFields {
            reward: self.reward(),
            name: self.target_name(),
            vessel_text: &self.draft.vessel_text,
            description: &self.draft.description,
        };
        validate_fields(&fields, &self.rules)
    }

    /// Status as of the last mutation. Always equal to [`Self::validate`].
    pub fn status(&self) -> ValidationResult {
        self.status
    }

    /// Build the request from the current draft.
    ///
    /// Callers must gate this on [`Self::status`] being valid. A missing
    /// reward is written as 0 so the result is always well-formed, but that
    /// is not a way around validation.
    pub fn finalize(&self) -> BountyContractRequest {
        if let Some(reason) = self.status.error() {
            tracing::warn!(%reason, "finalizing a contract that does not validate");
        }
        BountyContractRequest {
            collection: self.collection.clone(),
            category: self.draft.category,
            name: self.target_name().to_string(),
            dna: self.target_dna().map(str::to_string),
            vessel: self.vessel().to_string(),
            description: self.draft.description.clone(),
            reward: self.reward().unwrap_or(0),
        }
    }

    /// The create button. Emits `CreateRequested` with the finalized
    /// request, or nothing if the draft does not validate.
    pub fn press_create(&self, host: &mut dyn ComposerHost) -> Result<(), ComposerError> {
        if let Some(reason) = self.status.error() {
            return Err(ComposerError::NotReady(reason));
        }
        let request = self.finalize();
        tracing::info!(
            collection = %request.collection,
            category = %request.category,
            reward = request.reward,
            "bounty contract create requested"
        );
        host.handle(ComposerEvent::CreateRequested(request));
        Ok(())
    }

    /// The cancel button. Always emits `CancelRequested`.
    pub fn press_cancel(&self, host: &mut dyn ComposerHost) {
        tracing::info!(collection = %self.collection, "bounty contract cancelled");
        host.handle(ComposerEvent::CancelRequested);
    }

    fn refresh(&mut self) {
        let status = self.validate();
        if status != self.status {
            tracing::debug!(status = status.message_key(), "composer status changed");
        }
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;
    use crate::validation::ValidationError;
    use bounty_core::{CollectionCatalog, CollectionPrototype, MessageCatalog};

    fn catalog() -> CollectionCatalog {
        let mut catalog = CollectionCatalog::default();
        catalog.insert(
            CollectionId::new("security"),
            CollectionPrototype {
                name: "security".to_string(),
                categories: vec![Category::Criminal, Category::Vacancy, Category::Other],
            },
        );
        catalog
    }

    fn rules() -> BountyRules {
        BountyRules {
            default_reward: 500,
            ..BountyRules::default()
        }
    }

    fn make_composer() -> ContractComposer {
        ContractComposer::new(
            CollectionId::new("security"),
            &catalog(),
            rules(),
            &MessageCatalog::english(),
        )
    }

    fn alice_and_bob() -> Vec<TargetCandidate> {
        vec![
            TargetCandidate::new("Bob", None),
            TargetCandidate::new("Alice", Some("AX1".to_string())),
        ]
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn test_initial_state() {
        let c = make_composer();
        assert_eq!(c.category(), Category::Criminal);
        assert_eq!(c.categories(), &[Category::Criminal, Category::Vacancy, Category::Other]);
        assert_eq!(c.draft().reward_text, "500");
        assert_eq!(c.reward(), Some(500));
        assert_eq!(c.vessels(), &["unknown vessel".to_string()]);
        assert_eq!(c.vessel(), "unknown vessel");
        assert!(c.target_info().is_none());
        // No targets yet, so the name is empty.
        assert_eq!(c.status(), ValidationResult::Invalid(ValidationError::EmptyName));
    }

    #[test]
    fn test_unknown_collection_offers_nothing() {
        let c = ContractComposer::new(
            CollectionId::new("cargo"),
            &catalog(),
            rules(),
            &MessageCatalog::english(),
        );
        assert!(c.categories().is_empty());
        assert_eq!(c.category(), Category::default());
    }

    #[test]
    fn test_categories_without_meta_are_skipped() {
        let mut rules = rules();
        rules.categories.remove(&Category::Vacancy);
        let c = ContractComposer::new(
            CollectionId::new("security"),
            &catalog(),
            rules,
            &MessageCatalog::english(),
        );
        assert_eq!(c.categories(), &[Category::Criminal, Category::Other]);
    }

    #[test]
    fn test_sentinel_uses_localizer() {
        let mut messages = MessageCatalog::new();
        messages.insert(MSG_VESSEL_UNKNOWN, "???");
        let mut c = ContractComposer::new(CollectionId::new("security"), &catalog(), rules(), &messages);
        c.set_vessels(vec!["Falcon".to_string()]);
        assert_eq!(c.vessels(), &["???".to_string(), "Falcon".to_string()]);
    }

    // ── Targets ──────────────────────────────────────────────────────

    #[test]
    fn test_set_targets_sorts_and_selects_first() {
        let mut c = make_composer();
        c.set_targets(alice_and_bob());
        assert_eq!(c.targets()[0].name, "Alice");
        assert_eq!(c.targets()[1].name, "Bob");
        assert_eq!(c.target_name(), "Alice");
        assert_eq!(c.dna_display(), Some("AX1"));
        assert!(c.status().is_valid());
    }

    #[test]
    fn test_set_targets_resets_selection() {
        let mut c = make_composer();
        c.set_targets(alice_and_bob());
        c.select_target_by_index(1);
        assert_eq!(c.target_name(), "Bob");
        c.set_targets(alice_and_bob());
        assert_eq!(c.draft().target_index, 0);
        assert_eq!(c.target_name(), "Alice");
    }

    #[test]
    fn test_select_target_out_of_range_ignored() {
        let mut c = make_composer();
        c.set_targets(alice_and_bob());
        c.select_target_by_index(1);
        c.select_target_by_index(2);
        assert_eq!(c.draft().target_index, 1);
        assert_eq!(c.dna_display(), None);
    }

    #[test]
    fn test_empty_dna_is_hidden() {
        let mut c = make_composer();
        c.set_targets(vec![TargetCandidate::new("Eve", Some(String::new()))]);
        assert_eq!(c.target_dna(), Some(""));
        assert_eq!(c.dna_display(), None);
    }

    // ── Vessels ──────────────────────────────────────────────────────

    #[test]
    fn test_set_vessels_filters_sorts_prefixes() {
        let mut c = make_composer();
        c.set_vessels(vec![
            "Osprey".to_string(),
            "  ".to_string(),
            String::new(),
            "Falcon".to_string(),
        ]);
        assert_eq!(
            c.vessels(),
            &[
                "unknown vessel".to_string(),
                "Falcon".to_string(),
                "Osprey".to_string()
            ]
        );
        assert_eq!(c.vessel(), "unknown vessel");
    }

    #[test]
    fn test_select_vessel() {
        let mut c = make_composer();
        c.set_vessels(vec!["Falcon".to_string()]);
        c.select_vessel_by_index(1);
        assert_eq!(c.vessel(), "Falcon");
        c.select_vessel_by_index(5);
        assert_eq!(c.vessel(), "Falcon");
    }

    #[test]
    fn test_custom_vessel_toggle_resets_to_sentinel() {
        let mut c = make_composer();
        c.set_vessels(vec!["Falcon".to_string()]);
        c.select_vessel_by_index(1);
        c.toggle_custom_vessel(true);
        c.set_custom_vessel_text("Sparrow");
        assert_eq!(c.vessel(), "Sparrow");
        c.toggle_custom_vessel(false);
        assert_eq!(c.vessel(), "unknown vessel");
    }

    #[test]
    fn test_hidden_long_vessel_text_still_blocks() {
        let mut c = make_composer();
        c.set_targets(alice_and_bob());
        c.toggle_custom_vessel(true);
        c.set_custom_vessel_text("V".repeat(c.rules().max_vessel_length + 1));
        assert_eq!(c.status(), ValidationResult::Invalid(ValidationError::VesselTooLong));

        c.toggle_custom_vessel(false);
        assert_eq!(c.vessel(), "unknown vessel");
        assert_eq!(c.status(), ValidationResult::Invalid(ValidationError::VesselTooLong));

        c.toggle_custom_vessel(true);
        c.set_custom_vessel_text("Sparrow");
        c.toggle_custom_vessel(false);
        assert!(c.status().is_valid());
    }

    #[test]
    fn test_custom_vessel_may_be_empty() {
        let mut c = make_composer();
        c.toggle_custom_vessel(true);
        assert_eq!(c.vessel(), "");
    }

    // ── Category side effect ─────────────────────────────────────────

    #[test]
    fn test_category_forces_name_mode() {
        let mut c = make_composer();
        c.select_category(Category::Vacancy);
        assert!(c.draft().custom_name);
        c.select_category(Category::Criminal);
        assert!(!c.draft().custom_name);
        c.toggle_custom_name(true);
        assert!(c.draft().custom_name);
    }

    #[test]
    fn test_category_not_offered_is_ignored() {
        let mut c = make_composer();
        c.select_category(Category::Construction);
        assert_eq!(c.category(), Category::Criminal);
        assert!(!c.draft().custom_name);
    }

    #[test]
    fn test_custom_name_builds_synthetic_target() {
        let mut c = make_composer();
        c.set_targets(alice_and_bob());
        c.toggle_custom_name(true);
        c.set_custom_name_text("Mallory");
        assert_eq!(c.target_info(), Some(TargetCandidate::named("Mallory")));
        assert_eq!(c.target_dna(), None);
    }

    // ── Live status ──────────────────────────────────────────────────

    #[test]
    fn test_status_tracks_every_edit() {
        let mut c = make_composer();
        c.set_targets(alice_and_bob());
        c.set_reward_text("abc");
        assert_eq!(c.status(), ValidationResult::Invalid(ValidationError::InvalidReward));
        c.set_reward_text("10");
        assert!(c.status().is_valid());
        c.set_description_text("x".repeat(1001));
        assert_eq!(
            c.status(),
            ValidationResult::Invalid(ValidationError::DescriptionTooLong)
        );
        assert_eq!(c.status(), c.validate());
    }

    // ── Finalize and buttons ─────────────────────────────────────────

    #[test]
    fn test_finalize_defaults_missing_reward_to_zero() {
        let mut c = make_composer();
        c.set_targets(alice_and_bob());
        c.set_reward_text("");
        assert_eq!(c.finalize().reward, 0);
    }

    #[test]
    fn test_press_create_gated_on_validity() {
        let mut c = make_composer();
        let mut host = RecordingHost::default();
        let err = c.press_create(&mut host).unwrap_err();
        assert!(matches!(err, ComposerError::NotReady(ValidationError::EmptyName)));
        assert!(host.events.is_empty());

        c.set_targets(alice_and_bob());
        c.press_create(&mut host).unwrap();
        assert_eq!(host.events.len(), 1);
        assert!(matches!(
            &host.events[0],
            ComposerEvent::CreateRequested(req) if req.name == "Alice"
        ));
    }

    #[test]
    fn test_press_cancel() {
        let c = make_composer();
        let mut host = RecordingHost::default();
        c.press_cancel(&mut host);
        assert_eq!(host.events, vec![ComposerEvent::CancelRequested]);
    }
}
