//! The complete analysis of a text.

use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    detect::{LanguageDetector, DEFAULT_CYRILLIC_THRESHOLD},
    ngram::NGramCounter,
    pipeline::Lemmatizer,
    registry::PipelineRegistry,
    response::{AnalyzeResponse, ResponseAssembler},
    stopwords, Error,
};

/// Default for [AnalyzerConfig::max_text_bytes]: 1 MiB.
pub const DEFAULT_MAX_TEXT_BYTES: usize = 1 << 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Longer texts are rejected before any processing.
    pub max_text_bytes: usize,
    /// See [LanguageDetector::new].
    pub cyrillic_threshold: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            max_text_bytes: DEFAULT_MAX_TEXT_BYTES,
            cyrillic_threshold: DEFAULT_CYRILLIC_THRESHOLD,
        }
    }
}

/// Runs detection, lemmatization, stopword filtering and counting on a text.
/// Holds no per-request state, so one analyzer can serve any number of threads.
#[derive(Debug)]
pub struct Analyzer {
    config: AnalyzerConfig,
    detector: LanguageDetector,
    lemmatizer: Lemmatizer,
    registry: Arc<PipelineRegistry>,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig, registry: Arc<PipelineRegistry>) -> Self {
        Analyzer {
            detector: LanguageDetector::new(config.cyrillic_threshold),
            lemmatizer: Lemmatizer::default(),
            config,
            registry,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn registry(&self) -> &PipelineRegistry {
        &self.registry
    }

    pub fn analyze(&self, text: &str) -> Result<AnalyzeResponse, Error> {
        if text.len() > self.config.max_text_bytes {
            return Err(Error::TextTooLarge {
                len: text.len(),
                limit: self.config.max_text_bytes,
            });
        }

        let language = self.detector.detect(text);
        let pipeline = self.registry.get(language);
        let lemmas = self.lemmatizer.run(text, &pipeline);

        let filtered = stopwords::filter(&lemmas, language);
        let counts = NGramCounter.count(&lemmas);

        debug!(
            "analyzed {} tokens of '{}' text, {} after stopword filtering",
            lemmas.len(),
            language,
            filtered.len()
        );

        Ok(ResponseAssembler.assemble(language, counts, &filtered))
    }
}
