//! Rule-based pipelines and the injectable model registry.

use std::{fmt, sync::Arc};

use tracing::{info, warn};

use crate::{
    config::TopicSettings,
    nlp::{
        ner::{GazetteerNer, Ner},
        pipeline::{AnalyzedDoc, NlpError, NlpPipeline},
        tagger::{self, RuleTagger, TaggerLanguage},
    },
};

/// Gazetteer NER plus rule-based POS tagging for one language.
pub struct RuleBasedPipeline {
    name: &'static str,
    ner: GazetteerNer,
    tagger: RuleTagger,
    max_chars: usize,
}

impl RuleBasedPipeline {
    pub fn new(name: &'static str, ner: GazetteerNer, tagger: RuleTagger, max_chars: usize) -> Self {
        Self {
            name,
            ner,
            tagger,
            max_chars,
        }
    }

    /// English pipeline from built-in seeds and the configured gazetteer, if any.
    pub fn english(settings: &TopicSettings) -> Result<Self, NlpError> {
        let mut ner = GazetteerNer::english();
        if let Some(path) = &settings.english_gazetteer {
            ner.merge_file(path)?;
        }
        let tagger = RuleTagger::new(TaggerLanguage::English);
        Ok(Self::new("english", ner, tagger, settings.max_text_chars))
    }

    pub fn hindi(settings: &TopicSettings) -> Result<Self, NlpError> {
        let mut ner = GazetteerNer::hindi();
        if let Some(path) = &settings.hindi_gazetteer {
            ner.merge_file(path)?;
        }
        let tagger = RuleTagger::new(TaggerLanguage::Hindi);
        Ok(Self::new("hindi", ner, tagger, settings.max_text_chars))
    }

    pub fn gazetteer_size(&self) -> usize {
        self.ner.len()
    }
}

impl NlpPipeline for RuleBasedPipeline {
    fn name(&self) -> &str {
        self.name
    }

    fn analyze(&self, text: &str) -> Result<AnalyzedDoc, NlpError> {
        let len = text.chars().count();
        if len > self.max_chars {
            return Err(NlpError::TextTooLong {
                len,
                max: self.max_chars,
            });
        }
        let mut tokens = tagger::tokenize(text);
        let entities = self.ner.extract(text, &tokens);
        self.tagger.tag(&mut tokens, &entities);
        Ok(AnalyzedDoc { entities, tokens })
    }
}

/// Loaded NLP backends; a `None` branch runs in degraded mode.
#[derive(Clone, Default)]
pub struct NlpModels {
    english: Option<Arc<dyn NlpPipeline>>,
    hindi: Option<Arc<dyn NlpPipeline>>,
}

impl NlpModels {
    /// Load both pipelines once. Failures are logged here and never retried.
    pub fn load(settings: &TopicSettings) -> Self {
        let english = if settings.english_enabled {
            load_branch("english", RuleBasedPipeline::english(settings))
        } else {
            warn!("english pipeline disabled by configuration");
            None
        };
        let hindi = if settings.hindi_enabled {
            load_branch("hindi", RuleBasedPipeline::hindi(settings))
        } else {
            warn!("hindi pipeline disabled by configuration");
            None
        };
        Self { english, hindi }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn with_english(mut self, pipeline: Arc<dyn NlpPipeline>) -> Self {
        self.english = Some(pipeline);
        self
    }

    pub fn with_hindi(mut self, pipeline: Arc<dyn NlpPipeline>) -> Self {
        self.hindi = Some(pipeline);
        self
    }

    pub fn english(&self) -> Option<&dyn NlpPipeline> {
        self.english.as_deref()
    }

    pub fn hindi(&self) -> Option<&dyn NlpPipeline> {
        self.hindi.as_deref()
    }
}

impl fmt::Debug for NlpModels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NlpModels")
            .field("english", &self.english.as_ref().map(|p| p.name().to_string()))
            .field("hindi", &self.hindi.as_ref().map(|p| p.name().to_string()))
            .finish()
    }
}

fn load_branch(
    branch: &'static str,
    loaded: Result<RuleBasedPipeline, NlpError>,
) -> Option<Arc<dyn NlpPipeline>> {
    match loaded {
        Ok(pipeline) => {
            info!(branch, entries = pipeline.gazetteer_size(), "loaded nlp pipeline");
            Some(Arc::new(pipeline) as Arc<dyn NlpPipeline>)
        }
        Err(err) => {
            warn!(branch, error = %err, "nlp pipeline unavailable; entities and nouns will be empty");
            None
        }
    }
}
