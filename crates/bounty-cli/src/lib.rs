//! # bounty-cli — Host Shell for the Contract Composer
//!
//! Stands in for the game UI: loads rules, collections and messages from
//! YAML, drives a composer from a recorded script, and prints what the form
//! would show.
//!
//! ## Subcommands
//!
//! - `check` — load and check rules and collections, list what each
//!   collection offers
//! - `compose` — replay a script, print the status line after every step
//!   and the finalized request as JSON
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers live here.
//! - Handlers delegate to `bounty-core` and `bounty-composer`. No
//!   validation logic here.

pub mod check;
pub mod compose;
pub mod config;
