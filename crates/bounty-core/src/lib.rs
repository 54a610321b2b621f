//! # bounty-core — Foundational Types for Bounty Contracts
//!
//! Defines the domain primitives shared by the contract composer and its
//! hosts. Every other crate in the workspace depends on `bounty-core`; it
//! depends on nothing internal.
//!
//! ## Contents
//!
//! 1. **`Category`** — the closed set of contract categories, one enum with
//!    exhaustive `match` everywhere.
//!
//! 2. **`CollectionId`, `TargetCandidate`, `BountyContractRequest`** — the
//!    identifiers and records the composer consumes and produces.
//!
//! 3. **Collaborator seams.** `BountyRules` (limits, default reward,
//!    category display metadata), `CategorySource` (which categories a
//!    collection offers) and `Localizer` (message keys to display text) are
//!    passed in explicitly. There is no ambient lookup.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `bounty-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod category;
pub mod collection;
pub mod error;
pub mod identity;
pub mod locale;
pub mod request;
pub mod rules;
pub mod target;

// Re-export primary types for ergonomic imports.
pub use category::{Category, CATEGORY_COUNT};
pub use collection::{CategorySource, CollectionCatalog, CollectionPrototype};
pub use error::BountyError;
pub use identity::CollectionId;
pub use locale::{Localizer, MessageCatalog};
pub use request::BountyContractRequest;
pub use rules::{BountyRules, CategoryMeta};
pub use target::TargetCandidate;
