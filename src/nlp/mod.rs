//! Language classification and micro-topic extraction.

pub mod enrich;
pub mod extract;
pub mod hashtags;
pub mod language;
pub mod lexicon;
pub mod models;
pub mod ner;
pub mod pipeline;
pub mod sanitize;
pub mod script;
pub mod tagger;
pub mod topics;

pub use enrich::{enrich_language, BatchSummary, Branch, TopicExtractor};
pub use extract::{Extraction, ExtractionStatus};
pub use hashtags::extract_hashtags;
pub use language::{classify_language, classify_with_details, Classification, Confidence, LanguageType};
pub use models::NlpModels;
pub use sanitize::sanitize_topic;
pub use topics::{aggregate, aggregate_topics_across_events, TopicReport};
