//! CLI entry-point for identifier and title lookup without summaries.

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, data::pubmed::PubmedClient};

/// Args for the `search` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Person name to look up.
    pub name: String,
    /// Override maximum matches fetched from PubMed.
    #[arg(long)]
    pub max: Option<usize>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let max = args.max.unwrap_or(settings.max_results);
    let client = PubmedClient::new(&settings)?;
    let pmids = client
        .search(&args.name, max)
        .await
        .with_context(|| format!("search pubmed for {}", args.name))?;

    if pmids.is_empty() {
        println!("No research papers found.");
        return Ok(());
    }
    for pmid in pmids {
        match client.resolve_title(&pmid).await {
            Ok(title) => println!("{pmid}\t{title}"),
            Err(err) => println!("{pmid}\t(title lookup failed: {err})"),
        }
    }
    Ok(())
}
