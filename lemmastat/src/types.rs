//! Fundamental types used by this crate.

use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    fmt,
    ops::{Deref, Range},
};

pub type DefaultHashMap<K, V> = HashMap<K, V>;
pub type DefaultHashSet<T> = HashSet<T>;

/// A language tag. `Unknown` covers every language without a first-class pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ru,
    Unknown,
}

impl Language {
    /// The languages with a dedicated pipeline and stopword list.
    pub fn supported() -> &'static [Language] {
        &[Language::En, Language::Ru]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A maximal run of alphabetic text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'t> {
    text: &'t str,
    byte_span: Range<usize>,
}

impl<'t> Token<'t> {
    pub(crate) fn new(text: &'t str, byte_span: Range<usize>) -> Self {
        Token { text, byte_span }
    }

    pub fn as_str(&self) -> &'t str {
        self.text
    }

    /// The byte range of this token in the tokenized text.
    pub fn byte_span(&self) -> &Range<usize> {
        &self.byte_span
    }
}

impl<'t> AsRef<str> for Token<'t> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

/// The lemmas of a text in the order their tokens occur. Can not be modified once created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LemmaSequence(Vec<String>);

impl LemmaSequence {
    pub fn new(lemmas: Vec<String>) -> Self {
        LemmaSequence(lemmas)
    }
}

impl Deref for LemmaSequence {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl FromIterator<String> for LemmaSequence {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        LemmaSequence(iter.into_iter().collect())
    }
}
