//! Language detection.
//!
//! The share of Cyrillic letters decides first: text which is mostly Cyrillic is Russian. Everything else is
//! classified by [whatlang], which is trigram-based, deterministic and works offline. Its verdict is only used if
//! it names a supported language.

use whatlang::Lang;

use crate::{types::Language, utils};

pub const DEFAULT_CYRILLIC_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy)]
pub struct LanguageDetector {
    cyrillic_threshold: f64,
}

impl Default for LanguageDetector {
    fn default() -> Self {
        LanguageDetector::new(DEFAULT_CYRILLIC_THRESHOLD)
    }
}

impl LanguageDetector {
    /// Creates a detector which classifies text as Russian if the share of Cyrillic letters
    /// among all letters is above `cyrillic_threshold`.
    pub fn new(cyrillic_threshold: f64) -> Self {
        LanguageDetector { cyrillic_threshold }
    }

    /// The share of Cyrillic chars among the alphabetic chars of the text.
    /// `None` if the text has no alphabetic chars.
    pub fn cyrillic_ratio(text: &str) -> Option<f64> {
        let (alphabetic, cyrillic) = text
            .chars()
            .filter(|c| c.is_alphabetic())
            .fold((0usize, 0usize), |(alphabetic, cyrillic), c| {
                (alphabetic + 1, cyrillic + utils::is_cyrillic(c) as usize)
            });

        if alphabetic == 0 {
            None
        } else {
            Some(cyrillic as f64 / alphabetic as f64)
        }
    }

    pub fn detect(&self, text: &str) -> Language {
        let ratio = match Self::cyrillic_ratio(text) {
            Some(ratio) => ratio,
            None => return Language::Unknown,
        };

        if ratio > self.cyrillic_threshold {
            return Language::Ru;
        }

        match whatlang::detect(text).map(|info| info.lang()) {
            Some(Lang::Eng) => Language::En,
            Some(Lang::Rus) => Language::Ru,
            _ => Language::Unknown,
        }
    }
}
