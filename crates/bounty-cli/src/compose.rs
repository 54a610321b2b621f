//! # Compose Subcommand
//!
//! Replays a recorded editing session against a composer, printing the
//! localized status line after every step, and writes the finalized
//! request as JSON.
//!
//! ## Usage
//!
//! ```bash
//! bounty compose --collections collections.yaml --script session.yaml
//! bounty compose --collections collections.yaml --script session.yaml --trace
//! ```
//!
//! Exit codes: 0 when the session created a request or was cancelled,
//! 2 when it ended with neither.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use bounty_composer::{run_script, ComposerScript, SessionOutcome};
use bounty_core::Localizer;

use crate::config::{ConfigArgs, HostConfig};

/// Arguments for the compose subcommand.
#[derive(Args, Debug)]
pub struct ComposeArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Session script (collection, known targets and vessels, actions).
    #[arg(long)]
    pub script: PathBuf,

    /// Print the whole session outcome as JSON instead of status lines.
    #[arg(long)]
    pub trace: bool,
}

/// Execute the compose subcommand.
pub fn run_compose(args: &ComposeArgs) -> Result<u8> {
    let config = HostConfig::load(&args.config)?;
    let script = ComposerScript::from_yaml_file(&args.script)
        .with_context(|| format!("loading script: {}", args.script.display()))?;

    tracing::info!(
        collection = %script.collection,
        actions = script.actions.len(),
        "replaying composer session"
    );
    let outcome = run_script(&script, &config.catalog, config.rules.clone(), &config.messages)
        .with_context(|| format!("replaying script: {}", args.script.display()))?;

    if args.trace {
        println!("{}", to_json(&outcome)?);
    } else {
        for line in status_lines(&outcome, &config.messages) {
            println!("{line}");
        }
        if let Some(request) = outcome.created() {
            println!("{}", to_json(request)?);
        }
    }

    Ok(exit_code(&outcome))
}

/// Human-readable status line per step.
pub fn status_lines(outcome: &SessionOutcome, localizer: &dyn Localizer) -> Vec<String> {
    let mut lines = Vec::with_capacity(outcome.steps.len() + 1);
    lines.push(format!(
        "[start] {}",
        localizer.get_string(outcome.initial.message_key())
    ));
    for step in &outcome.steps {
        let mut line = format!(
            "[{}] {}: {}",
            step.step,
            step.action,
            localizer.get_string(step.status.message_key())
        );
        if let Some(reason) = step.rejected {
            line.push_str(&format!(" (create refused: {reason})"));
        }
        lines.push(line);
    }
    lines
}

/// 0 for a created or cancelled session, 2 otherwise.
pub fn exit_code(outcome: &SessionOutcome) -> u8 {
    if outcome.created().is_some() || outcome.cancelled() {
        0
    } else {
        2
    }
}

fn to_json(value: &impl Serialize) -> Result<String> {
    serde_json::to_string_pretty(value).context("serializing output")
}
