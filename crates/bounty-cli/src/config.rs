//! # Host Configuration
//!
//! Loading of the three collaborator inputs the composer needs. Paths are
//! optional where a stock default exists.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use bounty_core::{BountyRules, CollectionCatalog, MessageCatalog};

/// Configuration files shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Rules file (limits, default reward, category metadata).
    /// Stock rules are used when omitted.
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Collections file listing the categories each collection offers.
    #[arg(long)]
    pub collections: PathBuf,

    /// Extra messages (flat key: text map) layered over the English texts.
    #[arg(long)]
    pub messages: Option<PathBuf>,
}

/// Loaded configuration.
#[derive(Debug, Clone)]
pub struct HostConfig {
    pub rules: BountyRules,
    pub catalog: CollectionCatalog,
    pub messages: MessageCatalog,
}

impl HostConfig {
    /// Load every file named by `args`.
    pub fn load(args: &ConfigArgs) -> Result<Self> {
        let rules = match &args.rules {
            Some(path) => BountyRules::from_yaml_file(path)
                .with_context(|| format!("loading rules: {}", path.display()))?,
            None => BountyRules::default(),
        };

        let catalog = CollectionCatalog::from_yaml_file(&args.collections)
            .with_context(|| format!("loading collections: {}", args.collections.display()))?;

        let mut messages = MessageCatalog::english();
        if let Some(path) = &args.messages {
            for (key, text) in load_messages(path)? {
                messages.insert(key, text);
            }
        }

        tracing::debug!(
            collections = catalog.collections.len(),
            default_reward = rules.default_reward,
            "host configuration loaded"
        );

        Ok(Self {
            rules,
            catalog,
            messages,
        })
    }
}

fn load_messages(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading messages: {}", path.display()))?;
    serde_yaml::from_str(&content).with_context(|| format!("parsing messages: {}", path.display()))
}
