//! CLI entry-point for the end-to-end lookup workflow.

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument, warn};

use crate::{
    config::Settings,
    data::pubmed::PubmedClient,
    nlp::Summarizer,
    report::{Entry, Report},
};

/// Args for the `lookup` sub-command.
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
    let report = build_report(&args.name, args.max, &settings).await?;
    print!("{report}");
    Ok(())
}

/// Assemble the full report: search, resolve each identifier, summarize
/// each resolved title. Strictly sequential, one request in flight.
pub async fn build_report(
    name: &str,
    max: Option<usize>,
    settings: &Settings,
) -> Result<Report> {
    let max = max.unwrap_or(settings.max_results);
    let client = PubmedClient::new(settings)?;
    let summarizer = Summarizer::new(settings)?;

    info!(%name, max, summaries_enabled = summarizer.is_configured(), "searching pubmed");
    let pmids = client
        .search(name, max)
        .await
        .with_context(|| format!("search pubmed for {name}"))?;

    let mut report = Report::new(name);
    for pmid in pmids {
        let title = client.resolve_title(&pmid).await;
        if let Err(err) = &title {
            warn!(%pmid, %err, "title resolution failed");
        }
        let summary = match &title {
            Ok(title) => Some(summarizer.summarize(title).await),
            Err(_) => None,
        };
        report.push(Entry {
            pmid,
            title,
            summary,
        });
    }
    Ok(report)
}
