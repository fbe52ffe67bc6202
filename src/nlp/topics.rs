//! Per-event topic aggregation and cross-event topic frequencies.

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::{data::event::Event, nlp::language::LanguageType};

/// Lowercase words that make up any multi-word entity.
fn entity_components(entities: &[String]) -> HashSet<String> {
    entities
        .iter()
        .map(|entity| entity.to_lowercase())
        .filter(|entity| entity.split_whitespace().count() > 1)
        .flat_map(|entity| {
            entity
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Drop single-word topics that are components of a multi-word entity,
/// unless they appear in `exempt`.
pub fn apply_subsumption(topics: &[String], entities: &[String], exempt: &[String]) -> Vec<String> {
    let components = entity_components(entities);
    let exempt: HashSet<String> = exempt.iter().map(|topic| topic.to_lowercase()).collect();
    topics
        .iter()
        .filter(|topic| {
            let lower = topic.to_lowercase();
            lower.contains(' ') || !components.contains(&lower) || exempt.contains(&lower)
        })
        .cloned()
        .collect()
}

/// Merge hashtags, entities and nouns into micro topics.
///
/// Union order is hashtags, entities, nouns, deduplicated case-insensitively.
/// Hashtags are tagged explicitly by the uploader and survive subsumption.
pub fn aggregate(hashtags: &[String], entities: &[String], nouns: &[String]) -> Vec<String> {
    let union: IndexSet<String> = hashtags
        .iter()
        .chain(entities)
        .chain(nouns)
        .map(|topic| topic.to_lowercase())
        .collect();
    let union: Vec<String> = union.into_iter().collect();
    apply_subsumption(&union, entities, hashtags)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicCount {
    pub topic: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopicStats {
    pub total_unique_hashtags: usize,
    pub total_unique_ner: usize,
    pub total_unique_nouns: usize,
    pub total_unique_topics: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopicReport {
    pub top_hashtags: Vec<TopicCount>,
    pub top_ner: Vec<TopicCount>,
    pub top_nouns: Vec<TopicCount>,
    pub top_micro_topics: Vec<TopicCount>,
    pub stats: TopicStats,
}

#[derive(Debug, Default)]
struct Counter(IndexMap<String, usize>);

impl Counter {
    fn update<'a>(&mut self, items: impl IntoIterator<Item = &'a String>) {
        for item in items {
            *self.0.entry(item.clone()).or_insert(0) += 1;
        }
    }

    fn unique(&self) -> usize {
        self.0.len()
    }

    /// Highest counts first; ties keep first-seen order.
    fn most_common(&self, top_n: usize) -> Vec<TopicCount> {
        let mut entries: Vec<(&String, &usize)> = self.0.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1));
        entries
            .into_iter()
            .take(top_n)
            .map(|(topic, count)| TopicCount {
                topic: topic.clone(),
                count: *count,
            })
            .collect()
    }
}

/// Frequency report over every event's extraction fields.
pub fn aggregate_topics_across_events(events: &[Event], top_n: usize) -> TopicReport {
    let mut hashtags = Counter::default();
    let mut ner = Counter::default();
    let mut nouns = Counter::default();
    let mut topics = Counter::default();
    for event in events {
        hashtags.update(event.hashtags.iter().flatten());
        ner.update(event.ner.iter().flatten());
        nouns.update(event.nouns.iter().flatten());
        topics.update(event.micro_topics.iter().flatten());
    }
    TopicReport {
        top_hashtags: hashtags.most_common(top_n),
        top_ner: ner.most_common(top_n),
        top_nouns: nouns.most_common(top_n),
        top_micro_topics: topics.most_common(top_n),
        stats: TopicStats {
            total_unique_hashtags: hashtags.unique(),
            total_unique_ner: ner.unique(),
            total_unique_nouns: nouns.unique(),
            total_unique_topics: topics.unique(),
        },
    }
}

/// Top micro topics per language over active watch events; empty languages are omitted.
pub fn topics_by_language(events: &[Event], top_n: usize) -> IndexMap<LanguageType, Vec<TopicCount>> {
    let mut counters: IndexMap<LanguageType, Counter> = LanguageType::ALL
        .iter()
        .map(|lang| (*lang, Counter::default()))
        .collect();
    for event in events.iter().filter(|e| e.is_eligible()) {
        let lang = event.language_type().unwrap_or(LanguageType::Unknown);
        if let Some(counter) = counters.get_mut(&lang) {
            counter.update(event.micro_topics.iter().flatten());
        }
    }
    counters
        .into_iter()
        .filter(|(_, counter)| counter.unique() > 0)
        .map(|(lang, counter)| (lang, counter.most_common(top_n)))
        .collect()
}
