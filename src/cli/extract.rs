//! CLI entry-point for single-title topic extraction.

use anyhow::Result;
use clap::Args as ClapArgs;
use serde::Serialize;
use tracing::instrument;

use crate::{
    cli::print_json,
    config::Settings,
    data::event::Event,
    nlp::{
        enrich::{enrich_language, TopicExtractor},
        extract::ExtractionStatus,
        language::{Classification, Confidence, LanguageType},
    },
};

/// Args for the `extract` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Cleaned title text.
    pub text: String,
    /// Skip detection and force a branch (english, hinglish, hindi, unknown).
    #[arg(long)]
    pub language: Option<LanguageType>,
}

#[derive(Debug, Serialize)]
struct ExtractOutput {
    text: String,
    language_type: LanguageType,
    hashtags: Vec<String>,
    ner: Vec<String>,
    nouns: Vec<String>,
    text_v1: Option<String>,
    micro_topics: Vec<String>,
    status: Option<ExtractionStatus>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let extractor = TopicExtractor::from_settings(&settings.topics);
    let mut event = Event::watched(args.text.clone());
    let language = match args.language {
        Some(language) => {
            event.set_language(Classification::new(language, Confidence::High));
            language
        }
        None => enrich_language(&mut event).language_type,
    };
    let status = extractor.process_single_event(&mut event);

    print_json(&ExtractOutput {
        text: args.text,
        language_type: language,
        hashtags: event.hashtags.unwrap_or_default(),
        ner: event.ner.unwrap_or_default(),
        nouns: event.nouns.unwrap_or_default(),
        text_v1: event.text_v1,
        micro_topics: event.micro_topics.unwrap_or_default(),
        status,
    })
}
