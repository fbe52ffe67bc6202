//! CLI entry-point for session-wide topic frequencies.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args as ClapArgs;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::instrument;

use crate::{
    cli::print_json,
    config::Settings,
    data::store::Session,
    nlp::{
        language::LanguageType,
        topics::{self, TopicCount, TopicReport},
    },
};

const BY_LANGUAGE_TOP_N: usize = 20;

/// Args for the `aggregate` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Enriched session file.
    pub session: PathBuf,
    /// Entries per list; defaults to TOPIC_TOP_N.
    #[arg(long)]
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
struct AggregateOutput {
    version: String,
    #[serde(flatten)]
    report: TopicReport,
    by_language: IndexMap<LanguageType, Vec<TopicCount>>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let session = Session::load(&args.session).await?;
    if !session.micro_topics_extracted {
        bail!(
            "topics not extracted yet for {}; run `enrich` first",
            args.session.display()
        );
    }
    let top_n = args.top_n.unwrap_or(settings.topics.top_n);
    print_json(&AggregateOutput {
        version: session
            .extraction_version
            .clone()
            .unwrap_or_else(|| "v1".to_string()),
        report: topics::aggregate_topics_across_events(&session.events, top_n),
        by_language: topics::topics_by_language(&session.events, BY_LANGUAGE_TOP_N),
    })
}
