//! Batch orchestration: route events to a language branch and write results back.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    config::TopicSettings,
    data::event::Event,
    nlp::{
        extract::{self, Extraction, ExtractionStatus},
        hashtags::extract_hashtags,
        language::{classify_language, Classification, LanguageType},
        models::NlpModels,
        sanitize, topics,
    },
};

const PROGRESS_EVERY: usize = 1000;

/// Processing path for one event, decided once from its language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch {
    English(String),
    Hinglish { text_v1: String },
    Hindi(String),
}

impl Branch {
    pub fn route(language: LanguageType, text: &str) -> Self {
        match language {
            LanguageType::Hindi => Self::Hindi(text.to_string()),
            LanguageType::Hinglish => Self::Hinglish {
                text_v1: sanitize::hinglish_text(text),
            },
            LanguageType::English | LanguageType::Unknown => Self::English(text.to_string()),
        }
    }

    /// Input for the batched English model, if this branch uses it.
    fn english_input(&self) -> Option<&str> {
        match self {
            Self::English(text) => Some(text),
            Self::Hinglish { text_v1 } => Some(text_v1),
            Self::Hindi(_) => None,
        }
    }
}

/// Counters describing one enrichment pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total_events: usize,
    pub eligible_events: usize,
    pub events_with_topics: usize,
    pub total_hashtags: usize,
    pub total_ner: usize,
    pub total_nouns: usize,
    pub total_micro_topics: usize,
    pub degraded_events: usize,
    pub failed_events: usize,
}

impl BatchSummary {
    fn record(&mut self, event: &Event, status: &ExtractionStatus) {
        let len = |field: &Option<Vec<String>>| field.as_ref().map_or(0, Vec::len);
        self.total_hashtags += len(&event.hashtags);
        self.total_ner += len(&event.ner);
        self.total_nouns += len(&event.nouns);
        self.total_micro_topics += len(&event.micro_topics);
        if len(&event.micro_topics) > 0 {
            self.events_with_topics += 1;
        }
        if status.is_degraded() {
            self.degraded_events += 1;
        }
        if matches!(status, ExtractionStatus::Failed(_)) {
            self.failed_events += 1;
        }
    }
}

/// Write the classification of `text_clean` onto the event.
pub fn enrich_language(event: &mut Event) -> Classification {
    let classification = match event.text_clean.as_deref() {
        Some(text) if !text.is_empty() => classify_language(text),
        _ => Classification::unknown(),
    };
    event.set_language(classification);
    classification
}

/// Owns the NLP models and runs micro-topic extraction over events.
#[derive(Debug, Clone)]
pub struct TopicExtractor {
    models: NlpModels,
    batch_size: usize,
}

impl TopicExtractor {
    pub fn new(models: NlpModels, batch_size: usize) -> Self {
        Self {
            models,
            batch_size: batch_size.max(1),
        }
    }

    pub fn from_settings(settings: &TopicSettings) -> Self {
        Self::new(NlpModels::load(settings), settings.batch_size)
    }

    pub fn models(&self) -> &NlpModels {
        &self.models
    }

    /// Populate extraction fields on every eligible event; others are left untouched.
    #[instrument(skip_all, fields(events = events.len()))]
    pub fn process_event_batch(&self, events: &mut [Event]) -> BatchSummary {
        self.run(events).0
    }

    /// Single-event convenience wrapper; `None` when the event is not eligible.
    pub fn process_single_event(&self, event: &mut Event) -> Option<ExtractionStatus> {
        if !event.is_eligible() {
            return None;
        }
        self.run(std::slice::from_mut(event)).1.pop()
    }

    /// Shared pass; statuses are returned in eligible-event order.
    fn run(&self, events: &mut [Event]) -> (BatchSummary, Vec<ExtractionStatus>) {
        let mut statuses = Vec::new();
        let mut summary = BatchSummary {
            total_events: events.len(),
            ..BatchSummary::default()
        };

        let routed: Vec<(usize, Branch)> = events
            .iter()
            .enumerate()
            .filter(|(_, event)| event.is_eligible())
            .map(|(idx, event)| {
                let language = event.language_type().unwrap_or(LanguageType::Unknown);
                (idx, Branch::route(language, event.text()))
            })
            .collect();
        summary.eligible_events = routed.len();
        info!(eligible = routed.len(), "processing qualifying events");
        if routed.is_empty() {
            return (summary, statuses);
        }

        let english_slots: Vec<usize> = routed
            .iter()
            .enumerate()
            .filter(|(_, (_, branch))| branch.english_input().is_some())
            .map(|(slot, _)| slot)
            .collect();
        let english_texts: Vec<&str> = english_slots
            .iter()
            .filter_map(|&slot| routed[slot].1.english_input())
            .collect();
        info!(count = english_texts.len(), "batch processing english/hinglish texts");
        if self.models.english().is_none() && !english_texts.is_empty() {
            debug!("english pipeline unavailable; emitting hashtags only");
        }
        let mut english_results: Vec<Option<Extraction>> = vec![None; routed.len()];
        let batch = extract::extract_english_batch(self.models.english(), &english_texts, self.batch_size);
        for (slot, extraction) in english_slots.into_iter().zip(batch) {
            english_results[slot] = Some(extraction);
        }

        for (processed, ((idx, branch), english)) in routed.into_iter().zip(english_results).enumerate() {
            let event = &mut events[idx];
            let extraction = match &branch {
                Branch::Hindi(text) => extract::extract_hindi(self.models.hindi(), text),
                _ => english.unwrap_or_else(|| Extraction::empty(ExtractionStatus::Skipped)),
            };
            let status = extraction.status.clone();
            apply(event, branch, extraction);
            summary.record(event, &status);
            statuses.push(status);

            if (processed + 1) % PROGRESS_EVERY == 0 {
                info!(processed = processed + 1, total = summary.eligible_events, "topic extraction progress");
            }
        }

        info!(
            processed = summary.eligible_events,
            with_topics = summary.events_with_topics,
            degraded = summary.degraded_events,
            "completed topic extraction"
        );
        (summary, statuses)
    }
}

fn apply(event: &mut Event, branch: Branch, extraction: Extraction) {
    let hashtags = extract_hashtags(event.text());
    let micro_topics = topics::aggregate(&hashtags, &extraction.ner, &extraction.nouns);
    event.text_v1 = match branch {
        Branch::Hinglish { text_v1 } => Some(text_v1),
        _ => None,
    };
    event.hashtags = Some(hashtags);
    event.ner = Some(extraction.ner);
    event.nouns = Some(extraction.nouns);
    event.micro_topics = Some(micro_topics);
}
