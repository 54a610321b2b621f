//! # bounty-composer — Bounty Contract Composer
//!
//! Holds the draft of a bounty contract while a player fills in the form,
//! keeps an always-current validation status, and produces the finalized
//! [`BountyContractRequest`](bounty_core::BountyContractRequest).
//!
//! ## Model
//!
//! The draft is a plain record. Every mutator is a total transition on it
//! followed by re-deriving the [`ValidationResult`]; there is no hidden
//! state. Out-of-range selections are ignored, unparseable rewards become
//! "no value", and nothing here panics on user input.
//!
//! - **Draft** (`draft.rs`): raw field values and the two mode toggles.
//! - **Validation** (`validation.rs`): the fixed-precedence classifier.
//! - **Composer** (`composer.rs`): known targets and vessels, derived
//!   getters, finalization, and the create/cancel buttons.
//! - **Host** (`host.rs`): events delivered to the embedding UI.
//! - **Actions** (`action.rs`): a serializable edit vocabulary and script
//!   replay for hosts that drive the composer from recorded input.

pub mod action;
pub mod composer;
pub mod draft;
pub mod error;
pub mod host;
pub mod validation;

pub use action::{run_script, ComposerAction, ComposerScript, SessionOutcome, StepRecord};
pub use composer::ContractComposer;
pub use draft::ComposerDraft;
pub use error::ComposerError;
pub use host::{ComposerEvent, ComposerHost, RecordingHost};
pub use validation::{parse_reward, validate_fields, DraftFields, ValidationError, ValidationResult};
