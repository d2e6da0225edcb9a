//! The process-wide cache of lemmatizer pipelines.
//!
//! A [PipelineRegistry] is created once at startup and shared (e. g. behind an `Arc`) by everything that analyzes
//! text. The pipeline of a language is initialized on first use: the [ModelProvider] is asked for a model, and if
//! that fails (or the provider panics), a [BlankPipeline] takes its place. Either outcome is cached for the lifetime of the registry, so
//! acquisition is attempted at most once per language. Concurrent first requests for a language block until the
//! running acquisition finishes. After initialization, pipelines are immutable and shared without locking.

use log::{info, warn};
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::{
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

use crate::{
    models::{ModelProvider, NoModels},
    pipeline::*,
    types::*,
};

/// The initialization state of a language's pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStatus {
    /// Not requested yet.
    Pending,
    /// A model was loaded.
    Full,
    /// No model could be loaded, the blank pipeline is used.
    Blank,
}

pub struct PipelineRegistry {
    provider: Box<dyn ModelProvider>,
    english: OnceCell<Arc<Pipeline>>,
    russian: OnceCell<Arc<Pipeline>>,
    unknown: Arc<Pipeline>,
}

impl PipelineRegistry {
    pub fn new<P: ModelProvider + 'static>(provider: P) -> Self {
        PipelineRegistry {
            provider: Box::new(provider),
            english: OnceCell::new(),
            russian: OnceCell::new(),
            unknown: Arc::new(BlankPipeline::new(Language::Unknown).into()),
        }
    }

    /// A registry without models, every language uses the blank pipeline.
    pub fn blank() -> Self {
        PipelineRegistry::new(NoModels)
    }

    fn cell(&self, language: Language) -> Option<&OnceCell<Arc<Pipeline>>> {
        match language {
            Language::En => Some(&self.english),
            Language::Ru => Some(&self.russian),
            Language::Unknown => None,
        }
    }

    /// Gets the pipeline for a language, initializing it if this is the first request for the language.
    /// Never fails: `unknown` and languages without a model get a blank pipeline.
    pub fn get(&self, language: Language) -> Arc<Pipeline> {
        match self.cell(language) {
            Some(cell) => cell
                .get_or_init(|| Arc::new(self.acquire(language)))
                .clone(),
            None => self.unknown.clone(),
        }
    }

    fn acquire(&self, language: Language) -> Pipeline {
        // a panicking provider must not leave the cell empty, or every request would retry it
        let acquired = panic::catch_unwind(AssertUnwindSafe(|| self.provider.acquire(language)));

        match acquired {
            Ok(Ok(dictionary)) => {
                info!(
                    "loaded '{}' model with {} word forms",
                    language,
                    dictionary.len()
                );

                match language {
                    Language::En => EnglishPipeline::new(dictionary).into(),
                    Language::Ru => RussianPipeline::new(dictionary).into(),
                    Language::Unknown => BlankPipeline::new(language).into(),
                }
            }
            Ok(Err(error)) => {
                warn!(
                    "no model for '{}' ({}), falling back to the blank pipeline",
                    language, error
                );
                BlankPipeline::new(language).into()
            }
            Err(_) => {
                warn!(
                    "model provider panicked for '{}', falling back to the blank pipeline",
                    language
                );
                BlankPipeline::new(language).into()
            }
        }
    }

    /// Initializes the pipelines of all supported languages.
    pub fn warm(&self) {
        for language in Language::supported() {
            self.get(*language);
        }
    }

    pub fn status(&self, language: Language) -> ModelStatus {
        match self.cell(language) {
            Some(cell) => match cell.get() {
                None => ModelStatus::Pending,
                Some(pipeline) if pipeline.is_blank() => ModelStatus::Blank,
                Some(_) => ModelStatus::Full,
            },
            None => ModelStatus::Blank,
        }
    }
}

impl std::fmt::Debug for PipelineRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineRegistry")
            .field("en", &self.status(Language::En))
            .field("ru", &self.status(Language::Ru))
            .finish()
    }
}
