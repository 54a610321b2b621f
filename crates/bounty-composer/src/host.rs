//! # Host Events
//!
//! The composer's only externally visible effects. The host owns transport
//! of the request and the lifetime of the composer.

use serde::{Deserialize, Serialize};

use bounty_core::BountyContractRequest;

/// An event emitted by the composer's buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "request", rename_all = "snake_case")]
pub enum ComposerEvent {
    /// The user pressed create on a valid draft.
    CreateRequested(BountyContractRequest),
    /// The user pressed cancel; the host should discard the composer.
    CancelRequested,
}

/// Receives composer events.
pub trait ComposerHost {
    /// Handle one event.
    fn handle(&mut self, event: ComposerEvent);
}

impl<F: FnMut(ComposerEvent)> ComposerHost for F {
    fn handle(&mut self, event: ComposerEvent) {
        self(event)
    }
}

/// A host that keeps every event it receives, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    /// Received events.
    pub events: Vec<ComposerEvent>,
}

impl ComposerHost for RecordingHost {
    fn handle(&mut self, event: ComposerEvent) {
        self.events.push(event);
    }
}
