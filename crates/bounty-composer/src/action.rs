//! # Edit Actions and Script Replay
//!
//! Every input event the composer understands, as data. A host that
//! records user input, or a test that wants to describe an edit sequence,
//! builds a list of [`ComposerAction`]s and replays it through
//! [`ContractComposer::apply`].
//!
//! ```yaml
//! collection: security
//! targets:
//!   - { name: Alice, dna: AX1 }
//! vessels: [Falcon]
//! actions:
//!   - { action: set_reward, text: "-5" }
//!   - { action: set_reward, text: "500" }
//!   - { action: create }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use bounty_core::{
    BountyRules, Category, CategorySource, CollectionId, Localizer, TargetCandidate,
};

use crate::composer::ContractComposer;
use crate::error::ComposerError;
use crate::host::{ComposerEvent, ComposerHost, RecordingHost};
use crate::validation::{ValidationError, ValidationResult};

/// One discrete input event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ComposerAction {
    /// Replace the known targets.
    SetTargets { targets: Vec<TargetCandidate> },
    /// Replace the known vessels.
    SetVessels { vessels: Vec<String> },
    /// Select a category.
    SelectCategory { category: Category },
    /// Select a known target by index.
    SelectTarget { index: usize },
    /// Select a known vessel by index.
    SelectVessel { index: usize },
    /// Toggle free-text name entry.
    ToggleCustomName { on: bool },
    /// Toggle free-text vessel entry.
    ToggleCustomVessel { on: bool },
    /// Edit the reward text.
    SetReward { text: String },
    /// Edit the description.
    SetDescription { text: String },
    /// Edit the free-typed target name.
    SetCustomName { text: String },
    /// Edit the free-typed vessel name.
    SetCustomVessel { text: String },
    /// Press create.
    Create,
    /// Press cancel.
    Cancel,
}

impl ComposerAction {
    /// Snake_case name, matching the serde tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetTargets { .. } => "set_targets",
            Self::SetVessels { .. } => "set_vessels",
            Self::SelectCategory { .. } => "select_category",
            Self::SelectTarget { .. } => "select_target",
            Self::SelectVessel { .. } => "select_vessel",
            Self::ToggleCustomName { .. } => "toggle_custom_name",
            Self::ToggleCustomVessel { .. } => "toggle_custom_vessel",
            Self::SetReward { .. } => "set_reward",
            Self::SetDescription { .. } => "set_description",
            Self::SetCustomName { .. } => "set_custom_name",
            Self::SetCustomVessel { .. } => "set_custom_vessel",
            Self::Create => "create",
            Self::Cancel => "cancel",
        }
    }
}

impl ContractComposer {
    /// Apply one input event.
    ///
    /// Edits always succeed. `Create` fails with
    /// [`ComposerError::NotReady`] when the draft does not validate, and
    /// then emits nothing.
    pub fn apply(
        &mut self,
        action: ComposerAction,
        host: &mut dyn ComposerHost,
    ) -> Result<(), ComposerError> {
        match action {
            ComposerAction::SetTargets { targets } => self.set_targets(targets),
            ComposerAction::SetVessels { vessels } => self.set_vessels(vessels),
            ComposerAction::SelectCategory { category } => self.select_category(category),
            ComposerAction::SelectTarget { index } => self.select_target_by_index(index),
            ComposerAction::SelectVessel { index } => self.select_vessel_by_index(index),
            ComposerAction::ToggleCustomName { on } => self.toggle_custom_name(on),
            ComposerAction::ToggleCustomVessel { on } => self.toggle_custom_vessel(on),
            ComposerAction::SetReward { text } => self.set_reward_text(text),
            ComposerAction::SetDescription { text } => self.set_description_text(text),
            ComposerAction::SetCustomName { text } => self.set_custom_name_text(text),
            ComposerAction::SetCustomVessel { text } => self.set_custom_vessel_text(text),
            ComposerAction::Create => return self.press_create(host),
            ComposerAction::Cancel => self.press_cancel(host),
        }
        Ok(())
    }
}

/// A recorded editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposerScript {
    /// Collection the composer is opened for.
    pub collection: CollectionId,
    /// Known targets supplied before the first action.
    #[serde(default)]
    pub targets: Vec<TargetCandidate>,
    /// Known vessels supplied before the first action.
    #[serde(default)]
    pub vessels: Vec<String>,
    /// Input events, in order.
    #[serde(default)]
    pub actions: Vec<ComposerAction>,
}

impl ComposerScript {
    /// Parse a script from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ComposerError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a script file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ComposerError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}

/// Status after one replayed action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Zero-based position in the script.
    pub step: usize,
    /// Action name.
    pub action: String,
    /// Status after the action.
    pub status: ValidationResult,
    /// Set when a create press was refused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected: Option<ValidationError>,
}

/// Result of replaying a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOutcome {
    /// Status before the first action.
    pub initial: ValidationResult,
    /// One record per action.
    pub steps: Vec<StepRecord>,
    /// Events emitted, in order.
    pub events: Vec<ComposerEvent>,
    /// Status after the last action.
    pub last: ValidationResult,
}

impl SessionOutcome {
    /// The last request the session asked to create, if any.
    pub fn created(&self) -> Option<&bounty_core::BountyContractRequest> {
        self.events.iter().rev().find_map(|e| match e {
            ComposerEvent::CreateRequested(req) => Some(req),
            ComposerEvent::CancelRequested => None,
        })
    }

    /// Whether the session ended with a cancel press.
    pub fn cancelled(&self) -> bool {
        matches!(self.events.last(), Some(ComposerEvent::CancelRequested))
    }
}

/// Open a composer for the script's collection, supply its lists, and
/// replay its actions. Replay stops after a cancel press, since the host
/// discards the composer at that point.
///
/// A refused create press is recorded on its step and replay continues.
/// Any other composer error stops replay and is returned.
pub fn run_script(
    script: &ComposerScript,
    source: &dyn CategorySource,
    rules: BountyRules,
    localizer: &dyn Localizer,
) -> Result<SessionOutcome, ComposerError> {
    let mut composer = ContractComposer::new(script.collection.clone(), source, rules, localizer);
    composer.set_targets(script.targets.iter().cloned());
    composer.set_vessels(script.vessels.iter().cloned());

    let initial = composer.status();
    let mut host = RecordingHost::default();
    let mut steps = Vec::with_capacity(script.actions.len());

    for (step, action) in script.actions.iter().enumerate() {
        let name = action.name();
        let is_cancel = matches!(action, ComposerAction::Cancel);
        let rejected = match composer.apply(action.clone(), &mut host) {
            Ok(()) => None,
            Err(ComposerError::NotReady(reason)) => Some(reason),
            Err(other) => {
                tracing::error!(step, action = name, error = %other, "replay aborted");
                return Err(other);
            }
        };
        tracing::debug!(step, action = name, status = composer.status().message_key(), "replayed");
        steps.push(StepRecord {
            step,
            action: name.to_string(),
            status: composer.status(),
            rejected,
        });
        if is_cancel {
            break;
        }
    }

    Ok(SessionOutcome {
        initial,
        steps,
        events: host.events,
        last: composer.status(),
    })
}
