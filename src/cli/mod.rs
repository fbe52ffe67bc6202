//! Command-line interface wiring for takeout-insights.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::Settings;

pub mod aggregate;
pub mod classify;
pub mod enrich;
pub mod extract;
pub mod ingest;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "YouTube Takeout language and topic insights", long_about = None)]
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
            Commands::Ingest(args) => ingest::run(args, settings).await,
            Commands::Classify(args) => classify::run(args).await,
            Commands::Extract(args) => extract::run(args, settings).await,
            Commands::Enrich(args) => enrich::run(args, settings).await,
            Commands::Aggregate(args) => aggregate::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Turn Takeout exports into a session file of normalized events.
    Ingest(ingest::Args),
    /// Detect English, Hindi or Hinglish for a piece of text.
    Classify(classify::Args),
    /// Extract micro topics from a single title.
    Extract(extract::Args),
    /// Add micro topics to every active watch event in a session.
    Enrich(enrich::Args),
    /// Report the most frequent topics of an enriched session.
    Aggregate(aggregate::Args),
}

/// Pretty-print a command result on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
