//! Stopword filtering
//!
//! Stopword lists come from the `stop-words` crate, extended by the language's `extra_stopwords` config. Since
//! filtering happens on lemmas, the extras mostly contain lemmas of inflected stopwords which the lists only have
//! in their surface forms. Text of `unknown` language is filtered against the union of all supported languages.

use lazy_static::lazy_static;
use stop_words::{get, LANGUAGE};

use crate::{lang, types::*};

/// The stopword set of one language.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// lowercase
    stopwords: DefaultHashSet<String>,
}

lazy_static! {
    static ref ENGLISH: StopwordFilter = StopwordFilter::new(Language::En);
    static ref RUSSIAN: StopwordFilter = StopwordFilter::new(Language::Ru);
    static ref UNKNOWN: StopwordFilter = StopwordFilter::new(Language::Unknown);
}

impl StopwordFilter {
    /// Builds the set for `language` from the generic list and the language's config extras.
    pub fn new(language: Language) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    /// The shared filter of `language`, built on first use.
    pub fn for_language(language: Language) -> &'static StopwordFilter {
        match language {
            Language::En => &*ENGLISH,
            Language::Ru => &*RUSSIAN,
            Language::Unknown => &*UNKNOWN,
        }
    }

    /// Lemmas are lowercase, so the lookup is case-sensitive.
    pub fn is_stopword(&self, lemma: &str) -> bool {
        self.stopwords.contains(lemma)
    }

    /// Returns the lemmas which are not stopwords, in their original order.
    pub fn filter(&self, lemmas: &[String]) -> Vec<String> {
        lemmas
            .iter()
            .filter(|lemma| !self.is_stopword(lemma))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_stopwords(language: Language) -> DefaultHashSet<String> {
        let languages: &[Language] = match language {
            Language::Unknown => Language::supported(),
            Language::En => &[Language::En],
            Language::Ru => &[Language::Ru],
        };

        let mut stopwords = DefaultHashSet::new();
        for language in languages {
            let list = match language {
                Language::En => get(LANGUAGE::English),
                Language::Ru => get(LANGUAGE::Russian),
                Language::Unknown => continue,
            };

            stopwords.extend(list.iter().map(|s| s.to_lowercase()));
            stopwords.extend(
                lang::options(*language)
                    .extra_stopwords
                    .iter()
                    .map(|s| s.to_lowercase()),
            );
        }

        stopwords
    }
}

/// Removes the stopwords of `language` from a lemma sequence. The sequence itself is not changed.
pub fn filter(lemmas: &LemmaSequence, language: Language) -> Vec<String> {
    StopwordFilter::for_language(language).filter(lemmas)
}
