//! Normalized Takeout event and the fields enrichment writes onto it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::nlp::language::{Classification, Confidence, LanguageType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Watch,
    Search,
    Subscribe,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engagement {
    Active,
    Passive,
}

/// One watch, search or subscribe record.
///
/// Fields this crate does not know about are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub engagement: Option<Engagement>,
    #[serde(default)]
    pub timestamp_utc: Option<String>,
    #[serde(default)]
    pub text_raw: Option<String>,
    #[serde(default)]
    pub text_clean: Option<String>,
    #[serde(default)]
    language_type: Option<LanguageType>,
    #[serde(default)]
    language_confidence: Option<Confidence>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub channel_clean: Option<String>,
    #[serde(default)]
    pub channel_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_v1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ner: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nouns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub micro_topics: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            engagement: None,
            timestamp_utc: None,
            text_raw: None,
            text_clean: None,
            language_type: None,
            language_confidence: None,
            channel: None,
            channel_clean: None,
            channel_url: None,
            video_url: None,
            text_v1: None,
            hashtags: None,
            ner: None,
            nouns: None,
            micro_topics: None,
            extra: Map::new(),
        }
    }

    /// An active watch event over `text`.
    pub fn watched(text: impl Into<String>) -> Self {
        Self::new(EventType::Watch)
            .with_engagement(Engagement::Active)
            .with_text(text)
    }

    pub fn with_engagement(mut self, engagement: Engagement) -> Self {
        self.engagement = Some(engagement);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_clean = Some(text.into());
        self
    }

    pub fn with_language(mut self, classification: Classification) -> Self {
        self.set_language(classification);
        self
    }

    /// Only active watch events are eligible for topic extraction.
    pub fn is_eligible(&self) -> bool {
        self.event_type == EventType::Watch && self.engagement == Some(Engagement::Active)
    }

    pub fn text(&self) -> &str {
        self.text_clean.as_deref().unwrap_or_default()
    }

    /// The stored classification, if both halves are present.
    pub fn language(&self) -> Option<Classification> {
        match (self.language_type, self.language_confidence) {
            (Some(language_type), Some(confidence)) => Some(Classification::new(language_type, confidence)),
            _ => None,
        }
    }

    pub fn language_type(&self) -> Option<LanguageType> {
        self.language().map(|c| c.language_type)
    }

    pub fn set_language(&mut self, classification: Classification) {
        self.language_type = Some(classification.language_type);
        self.language_confidence = Some(classification.language_confidence);
    }

    pub fn clear_language(&mut self) {
        self.language_type = None;
        self.language_confidence = None;
    }

    pub fn has_extraction(&self) -> bool {
        self.micro_topics.is_some()
    }
}
