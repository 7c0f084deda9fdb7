//! CLI entry-point for summarizing arbitrary text.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{config::Settings, nlp::Summarizer};

/// Args for the `summarize` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Text to summarize, typically a publication title.
    pub text: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let summarizer = Summarizer::new(&settings)?;
    let summary = summarizer.summarize(&args.text).await;
    info!(%summary, "generated summary");
    println!("{summary}");
    Ok(())
}
