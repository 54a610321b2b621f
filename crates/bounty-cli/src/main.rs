//! # bounty CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bounty_cli::check::{run_check, CheckArgs};
use bounty_cli::compose::{run_compose, ComposeArgs};

/// Bounty contract composer host.
///
/// Checks contract rules and collections, and replays recorded editing
/// sessions against the contract composer.
#[derive(Parser, Debug)]
#[command(name = "bounty", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load and check rules and collections.
    Check(CheckArgs),

    /// Replay a composer session script.
    Compose(ComposeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => run_check(&args),
        Commands::Compose(args) => run_compose(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_compose() {
        let cli = Cli::try_parse_from([
            "bounty",
            "-vv",
            "compose",
            "--collections",
            "c.yaml",
            "--script",
            "s.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Compose(args) => {
                assert_eq!(args.script.to_str(), Some("s.yaml"));
                assert!(args.config.rules.is_none());
                assert!(!args.trace);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_check_requires_collections() {
        assert!(Cli::try_parse_from(["bounty", "check"]).is_err());
    }
}
