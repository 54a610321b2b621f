//! # Check Subcommand
//!
//! Loads rules and collections and lists the categories each collection
//! will actually offer (listed by the collection and carrying display
//! metadata in the rules).

use anyhow::Result;
use clap::Args;

use bounty_core::{BountyRules, Category, CollectionCatalog, Localizer};

use crate::config::{ConfigArgs, HostConfig};

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// One collection as the composer would see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    pub id: String,
    pub offered: Vec<Category>,
    pub dropped: Vec<Category>,
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let config = HostConfig::load(&args.config)?;
    let summaries = summarize(&config.catalog, &config.rules);

    println!(
        "rules: default reward {}, name <= {}, vessel <= {}, description <= {}",
        config.rules.default_reward,
        config.rules.max_name_length,
        config.rules.max_vessel_length,
        config.rules.max_description_length,
    );
    for summary in &summaries {
        let names: Vec<String> = summary
            .offered
            .iter()
            .filter_map(|c| config.rules.meta(*c))
            .map(|meta| config.messages.get_string(&meta.name))
            .collect();
        println!("{}: {}", summary.id, names.join(", "));
        for category in &summary.dropped {
            tracing::warn!(
                collection = %summary.id,
                %category,
                "category has no display metadata and will not be offered"
            );
        }
    }

    let empty = summaries.iter().filter(|s| s.offered.is_empty()).count();
    if empty > 0 {
        tracing::warn!(empty, "collections offering no categories");
        return Ok(2);
    }
    Ok(0)
}

/// Split each collection's categories into offered and dropped.
pub fn summarize(catalog: &CollectionCatalog, rules: &BountyRules) -> Vec<CollectionSummary> {
    catalog
        .collections
        .iter()
        .map(|(id, proto)| {
            let (offered, dropped): (Vec<Category>, Vec<Category>) = proto
                .categories
                .iter()
                .partition(|c| rules.meta(**c).is_some());
            CollectionSummary {
                id: id.to_string(),
                offered,
                dropped,
            }
        })
        .collect()
}
