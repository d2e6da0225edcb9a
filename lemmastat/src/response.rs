//! The response contract and its assembly.

use serde::{Deserialize, Serialize};

use crate::{
    ngram::{FrequencyTable, NGramCounts},
    types::*,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaCount {
    pub lemma: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigramCount {
    pub bigram: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrigramCount {
    pub trigram: String,
    pub count: usize,
}

/// Statistics of one text. Every list is sorted by descending count, ties in order of first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub language: Language,
    /// The number of tokens, i. e. of lemmas before stopword filtering.
    pub total_tokens: usize,
    pub unique_lemmas: usize,
    pub items: Vec<LemmaCount>,
    /// `items` without stopwords. Can be empty even if `items` is not.
    pub items_filtered: Vec<LemmaCount>,
    pub total_bigrams: usize,
    pub unique_bigrams: usize,
    pub bigrams: Vec<BigramCount>,
    pub total_trigrams: usize,
    pub unique_trigrams: usize,
    pub trigrams: Vec<TrigramCount>,
}

fn sorted<T, F>(table: FrequencyTable, f: F) -> Vec<T>
where
    F: Fn(String, usize) -> T,
{
    table
        .into_sorted()
        .into_iter()
        .map(|(key, count)| f(key, count))
        .collect()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseAssembler;

impl ResponseAssembler {
    /// Packages the counts of a lemma sequence and the stopword-filtered lemmas into a response.
    pub fn assemble(
        &self,
        language: Language,
        counts: NGramCounts,
        filtered: &[String],
    ) -> AnalyzeResponse {
        let NGramCounts {
            unigrams,
            bigrams,
            trigrams,
        } = counts;
        let filtered: FrequencyTable = filtered.iter().map(String::as_str).collect();

        AnalyzeResponse {
            language,
            total_tokens: unigrams.total(),
            unique_lemmas: unigrams.unique(),
            items: sorted(unigrams, |lemma, count| LemmaCount { lemma, count }),
            items_filtered: sorted(filtered, |lemma, count| LemmaCount { lemma, count }),
            total_bigrams: bigrams.total(),
            unique_bigrams: bigrams.unique(),
            bigrams: sorted(bigrams, |bigram, count| BigramCount { bigram, count }),
            total_trigrams: trigrams.total(),
            unique_trigrams: trigrams.unique(),
            trigrams: sorted(trigrams, |trigram, count| TrigramCount { trigram, count }),
        }
    }
}
