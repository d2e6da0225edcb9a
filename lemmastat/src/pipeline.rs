//! Lemmatizer pipelines.
//!
//! A [Pipeline] is one of a closed set of language-specific strategies for mapping a token to its lemma. All of
//! them lowercase; the full pipelines additionally look the token up in a [LemmaDictionary].

use enum_dispatch::enum_dispatch;

use crate::{
    components::{tagger::LemmaDictionary, tokenizer::Tokenizer},
    lang, utils,
    types::*,
};

#[enum_dispatch]
#[derive(Debug)]
pub enum Pipeline {
    RussianPipeline,
    EnglishPipeline,
    BlankPipeline,
}

#[enum_dispatch(Pipeline)]
pub trait Lemmatize {
    /// The language this pipeline was selected for.
    fn language(&self) -> Language;

    /// Maps a token to its lowercase lemma. Never returns an empty string for a non-empty token.
    fn lemmatize(&self, token: &str) -> String;

    /// Whether this pipeline does no morphological reduction.
    fn is_blank(&self) -> bool {
        false
    }
}

/// Dictionary lemmatization for Russian. Lookup misses are retried with the language's char folds (`ё` -> `е`).
#[derive(Debug)]
pub struct RussianPipeline {
    dictionary: LemmaDictionary,
    char_folds: Vec<(char, char)>,
}

impl RussianPipeline {
    pub fn new(dictionary: LemmaDictionary) -> Self {
        RussianPipeline {
            dictionary,
            char_folds: lang::options(Language::Ru).char_folds.clone(),
        }
    }
}

impl Lemmatize for RussianPipeline {
    fn language(&self) -> Language {
        Language::Ru
    }

    fn lemmatize(&self, token: &str) -> String {
        let lower = token.to_lowercase();

        if let Some(lemma) = self.dictionary.lemma(&lower) {
            return lemma.to_lowercase();
        }

        let folded = utils::fold_chars(&lower, &self.char_folds);
        if folded != lower {
            if let Some(lemma) = self.dictionary.lemma(&folded) {
                return lemma.to_lowercase();
            }
        }

        lower
    }
}

/// Dictionary lemmatization for English. The token is looked up as written first (the dictionary may
/// contain case-sensitive entries such as abbreviations), then in lowercase.
#[derive(Debug)]
pub struct EnglishPipeline {
    dictionary: LemmaDictionary,
}

impl EnglishPipeline {
    pub fn new(dictionary: LemmaDictionary) -> Self {
        EnglishPipeline { dictionary }
    }
}

impl Lemmatize for EnglishPipeline {
    fn language(&self) -> Language {
        Language::En
    }

    fn lemmatize(&self, token: &str) -> String {
        let lower = token.to_lowercase();

        self.dictionary
            .lemma(token)
            .or_else(|| self.dictionary.lemma(&lower))
            .map(str::to_lowercase)
            .unwrap_or(lower)
    }
}

/// The degraded pipeline: the lowercased token is its own lemma.
#[derive(Debug)]
pub struct BlankPipeline {
    language: Language,
}

impl BlankPipeline {
    pub fn new(language: Language) -> Self {
        BlankPipeline { language }
    }
}

impl Lemmatize for BlankPipeline {
    fn language(&self) -> Language {
        self.language
    }

    fn lemmatize(&self, token: &str) -> String {
        token.to_lowercase()
    }

    fn is_blank(&self) -> bool {
        true
    }
}

/// Turns text into a [LemmaSequence] using a [Pipeline].
#[derive(Debug, Default, Clone, Copy)]
pub struct Lemmatizer {
    tokenizer: Tokenizer,
}

impl Lemmatizer {
    pub fn run(&self, text: &str, pipeline: &Pipeline) -> LemmaSequence {
        self.tokenizer
            .tokenize(text)
            .map(|token| pipeline.lemmatize(token.as_str()))
            .collect()
    }
}
