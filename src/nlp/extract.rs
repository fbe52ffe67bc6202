//! Entity and noun filtering for the English and Hindi branches.

use std::collections::HashSet;

use indexmap::IndexSet;
use serde::Serialize;
use tracing::{debug, warn};

use crate::nlp::{
    lexicon,
    pipeline::{AnalyzedDoc, NlpError, NlpPipeline},
    sanitize,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStatus {
    Complete,
    /// Empty input; the model was never consulted.
    Skipped,
    ModelUnavailable,
    Failed(String),
}

impl ExtractionStatus {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::ModelUnavailable | Self::Failed(_))
    }
}

/// Entities and nouns for one text, with how they were obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub ner: Vec<String>,
    pub nouns: Vec<String>,
    pub status: ExtractionStatus,
}

impl Extraction {
    pub fn empty(status: ExtractionStatus) -> Self {
        Self {
            ner: Vec::new(),
            nouns: Vec::new(),
            status,
        }
    }

    fn complete(ner: Vec<String>, nouns: Vec<String>) -> Self {
        Self {
            ner,
            nouns,
            status: ExtractionStatus::Complete,
        }
    }
}

fn is_numeric(word: &str) -> bool {
    word.chars().all(|ch| ch.is_numeric())
}

/// English rules: topical entities first, then nouns checked against the protected set.
pub fn english_topics(doc: &AnalyzedDoc) -> (Vec<String>, Vec<String>) {
    let mut ner = IndexSet::new();
    for entity in doc.entities.iter().filter(|e| e.label.is_topical()) {
        if let Some(topic) = sanitize::accept_topic(&entity.text) {
            ner.insert(topic);
        }
    }

    let protected: HashSet<&str> = ner
        .iter()
        .filter(|entity| entity.contains(' '))
        .flat_map(|entity| entity.split_whitespace())
        .collect();

    let mut nouns = IndexSet::new();
    for token in doc.tokens.iter().filter(|t| t.pos.is_nominal()) {
        let Some(noun) = sanitize::accept_topic(&token.text) else {
            continue;
        };
        if lexicon::is_english_stopword(&noun) || is_numeric(&noun) {
            continue;
        }
        if lexicon::is_weak_noun(&noun) && !protected.contains(noun.as_str()) {
            continue;
        }
        nouns.insert(noun);
    }

    (ner.into_iter().collect(), nouns.into_iter().collect())
}

/// Hindi rules: same shape, filtered by the Hindi stopword set only.
pub fn hindi_topics(doc: &AnalyzedDoc) -> (Vec<String>, Vec<String>) {
    let keep = |text: &str| {
        sanitize::accept_topic(text)
            .filter(|topic| !lexicon::is_hindi_stopword(topic) && !is_numeric(topic))
    };
    let ner: IndexSet<String> = doc
        .entities
        .iter()
        .filter(|e| e.label.is_topical())
        .filter_map(|e| keep(&e.text))
        .collect();
    let nouns: IndexSet<String> = doc
        .tokens
        .iter()
        .filter(|t| t.pos.is_nominal())
        .filter_map(|t| keep(&t.text))
        .collect();
    (ner.into_iter().collect(), nouns.into_iter().collect())
}

/// Fold a pipeline result into an extraction; errors become empty lists.
pub fn from_result(
    result: Result<AnalyzedDoc, NlpError>,
    rules: fn(&AnalyzedDoc) -> (Vec<String>, Vec<String>),
) -> Extraction {
    match result {
        Ok(doc) => {
            let (ner, nouns) = rules(&doc);
            Extraction::complete(ner, nouns)
        }
        Err(NlpError::ModelUnavailable(_)) => Extraction::empty(ExtractionStatus::ModelUnavailable),
        Err(err) => {
            debug!(error = %err, "extraction failed for one text");
            Extraction::empty(ExtractionStatus::Failed(err.to_string()))
        }
    }
}

/// Run the English branch over a batch, passing only non-empty texts to the model.
pub fn extract_english_batch(
    model: Option<&dyn NlpPipeline>,
    texts: &[&str],
    batch_size: usize,
) -> Vec<Extraction> {
    let Some(model) = model else {
        return vec![Extraction::empty(ExtractionStatus::ModelUnavailable); texts.len()];
    };
    let mut results = vec![Extraction::empty(ExtractionStatus::Skipped); texts.len()];
    let (indices, valid): (Vec<usize>, Vec<&str>) = texts
        .iter()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(idx, text)| (idx, *text))
        .unzip();
    if valid.is_empty() {
        return results;
    }
    let analyzed = model.analyze_batch(&valid, batch_size);
    if analyzed.len() < valid.len() {
        warn!(
            pipeline = model.name(),
            expected = valid.len(),
            returned = analyzed.len(),
            "batch returned too few results; marking the rest failed"
        );
    }
    let mut analyzed = analyzed.into_iter();
    for idx in indices {
        results[idx] = match analyzed.next() {
            Some(result) => from_result(result, english_topics),
            None => Extraction::empty(ExtractionStatus::Failed("missing batch result".to_string())),
        };
    }
    results
}

pub fn extract_english(model: Option<&dyn NlpPipeline>, text: &str) -> Extraction {
    extract_english_batch(model, &[text], 1)
        .pop()
        .unwrap_or_else(|| Extraction::empty(ExtractionStatus::Skipped))
}

/// Run the Hindi branch over one (unicode-normalized) text.
pub fn extract_hindi(model: Option<&dyn NlpPipeline>, text: &str) -> Extraction {
    if text.trim().is_empty() {
        return Extraction::empty(ExtractionStatus::Skipped);
    }
    let Some(model) = model else {
        return Extraction::empty(ExtractionStatus::ModelUnavailable);
    };
    from_result(model.analyze(&sanitize::normalize_unicode(text)), hindi_topics)
}
