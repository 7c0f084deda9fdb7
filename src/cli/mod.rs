//! Command-line interface wiring for clinician-scope.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod lookup;
pub mod search;
pub mod summarize;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Clinician research lookup assistant", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Lookup(args) => lookup::run(args, settings).await,
            Commands::Search(args) => search::run(args, settings).await,
            Commands::Summarize(args) => summarize::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Full lookup: publications, summaries, and a profile search link.
    Lookup(lookup::Args),
    /// Publication identifiers and titles only, no summarization.
    Search(search::Args),
    /// Summarize arbitrary text through the completion endpoint.
    Summarize(summarize::Args),
}
