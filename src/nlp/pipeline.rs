//! Backend seam for entity recognition and part-of-speech tagging.

use std::{fmt, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pos {
    Noun,
    Propn,
    Verb,
    Aux,
    Adj,
    Adv,
    Adp,
    Det,
    Pron,
    Cconj,
    Sconj,
    Part,
    Num,
    Punct,
    Sym,
    X,
}

impl Pos {
    pub fn is_nominal(&self) -> bool {
        matches!(self, Self::Noun | Self::Propn)
    }
}

/// OntoNotes-style entity labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Person,
    Org,
    Gpe,
    Loc,
    Event,
    Norp,
    Fac,
    Product,
    WorkOfArt,
    Language,
    Law,
    Date,
    Time,
    Percent,
    Money,
    Quantity,
    Ordinal,
    Cardinal,
}

impl EntityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Org => "ORG",
            Self::Gpe => "GPE",
            Self::Loc => "LOC",
            Self::Event => "EVENT",
            Self::Norp => "NORP",
            Self::Fac => "FAC",
            Self::Product => "PRODUCT",
            Self::WorkOfArt => "WORK_OF_ART",
            Self::Language => "LANGUAGE",
            Self::Law => "LAW",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Percent => "PERCENT",
            Self::Money => "MONEY",
            Self::Quantity => "QUANTITY",
            Self::Ordinal => "ORDINAL",
            Self::Cardinal => "CARDINAL",
        }
    }

    /// Labels worth keeping as micro topics; dates, quantities and the like are noise.
    pub fn is_topical(&self) -> bool {
        matches!(
            self,
            Self::Person
                | Self::Org
                | Self::Gpe
                | Self::Loc
                | Self::Event
                | Self::Norp
                | Self::Fac
                | Self::Product
                | Self::WorkOfArt
        )
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityLabel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let label = match value.trim().to_ascii_uppercase().as_str() {
            "PERSON" | "PER" => Self::Person,
            "ORG" => Self::Org,
            "GPE" => Self::Gpe,
            "LOC" => Self::Loc,
            "EVENT" => Self::Event,
            "NORP" => Self::Norp,
            "FAC" => Self::Fac,
            "PRODUCT" => Self::Product,
            "WORK_OF_ART" => Self::WorkOfArt,
            "LANGUAGE" => Self::Language,
            "LAW" => Self::Law,
            "DATE" => Self::Date,
            "TIME" => Self::Time,
            "PERCENT" => Self::Percent,
            "MONEY" => Self::Money,
            "QUANTITY" => Self::Quantity,
            "ORDINAL" => Self::Ordinal,
            "CARDINAL" => Self::Cardinal,
            other => return Err(format!("unknown entity label `{other}`")),
        };
        Ok(label)
    }
}

/// Extracted entity span with byte offsets relative to the source text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub label: EntityLabel,
    pub text: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub pos: Pos,
}

/// Output of a single pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalyzedDoc {
    pub entities: Vec<Span>,
    pub tokens: Vec<Token>,
}

#[derive(Debug, Error)]
pub enum NlpError {
    #[error("{0} pipeline is not loaded")]
    ModelUnavailable(&'static str),
    #[error("text of {len} characters exceeds the pipeline limit of {max}")]
    TextTooLong { len: usize, max: usize },
    #[error("reading gazetteer {}", path.display())]
    GazetteerIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing gazetteer {}", path.display())]
    GazetteerFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("analysis failed: {0}")]
    Analysis(String),
}

/// An NLP backend providing NER and POS tagging for one language.
pub trait NlpPipeline: Send + Sync {
    fn name(&self) -> &str;

    fn analyze(&self, text: &str) -> Result<AnalyzedDoc, NlpError>;

    /// Analyze many texts, one result per input in input order.
    fn analyze_batch(&self, texts: &[&str], batch_size: usize) -> Vec<Result<AnalyzedDoc, NlpError>> {
        let mut results = Vec::with_capacity(texts.len());
        for (chunk_idx, chunk) in texts.chunks(batch_size.max(1)).enumerate() {
            debug!(pipeline = self.name(), chunk = chunk_idx, size = chunk.len(), "analyzing chunk");
            results.extend(chunk.iter().map(|text| self.analyze(text)));
        }
        results
    }
}
