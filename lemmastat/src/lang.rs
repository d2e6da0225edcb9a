//! Language-specific options compiled in from `configs/<lang_code>/pipeline.json`.

use lazy_static::lazy_static;
use serde::Deserialize;

use crate::types::*;

const ERROR_MSG: &str = "pipeline configs are checked at build time.";

/// Options for the pipeline and stopword filter of one language.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LangOptions {
    /// Pairs of chars where the first is replaced by the second when a dictionary lookup fails, e. g. `ё` -> `е`.
    #[serde(default)]
    pub char_folds: Vec<(char, char)>,
    /// Stopwords in addition to the generic list. Mostly lemmas of inflected stopwords.
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

lazy_static! {
    static ref LANG_OPTIONS: DefaultHashMap<String, LangOptions> = serde_json::from_str(include_str!(
        concat!(env!("OUT_DIR"), "/pipeline_configs.json")
    ))
    .expect(ERROR_MSG);
    static ref EMPTY: LangOptions = LangOptions::default();
}

/// Gets the options for a language. Languages without a config get empty options.
pub fn options(language: Language) -> &'static LangOptions {
    LANG_OPTIONS.get(language.code()).unwrap_or(&*EMPTY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn russian_folds_yo() {
        assert!(options(Language::Ru).char_folds.contains(&('ё', 'е')));
    }

    #[test]
    fn unknown_has_empty_options() {
        let options = options(Language::Unknown);

        assert!(options.char_folds.is_empty());
        assert!(options.extra_stopwords.is_empty());
    }

    #[test]
    fn every_supported_language_has_a_config() {
        for language in Language::supported() {
            assert!(LANG_OPTIONS.contains_key(language.code()));
        }
    }
}
