//! CLI entry-point for enriching a session with micro topics.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    cli::print_json,
    config::Settings,
    data::store::Session,
    nlp::enrich::{BatchSummary, TopicExtractor},
};

/// Args for the `enrich` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Session file produced by `ingest`.
    pub session: PathBuf,
    /// Write the enriched session here instead of in place.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct EnrichOutput {
    session: PathBuf,
    status: &'static str,
    #[serde(flatten)]
    summary: BatchSummary,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let mut session = Session::load(&args.session).await?;
    let extractor = TopicExtractor::from_settings(&settings.topics);
    let summary = extractor.process_event_batch(&mut session.events);
    session.mark_extracted();

    let target = args.output.unwrap_or(args.session);
    session.save(&target).await?;
    info!(path = %target.display(), "enriched session");

    print_json(&EnrichOutput {
        session: target,
        status: "enriched",
        summary,
    })
}
