//! Frequency tables of unigrams, bigrams and trigrams.

use indexmap::IndexMap;

/// Separates the members of a bigram or trigram key.
pub const SEPARATOR: &str = " ";

/// Counts of keys in the order each key first occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: IndexMap<String, usize>,
}

impl FrequencyTable {
    pub fn get(&self, key: &str) -> Option<usize> {
        self.counts.get(key).copied()
    }

    /// The sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// The number of distinct keys.
    pub fn unique(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over the entries in order of first occurrence.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// The entries by descending count. Entries with equal count stay in order of first occurrence.
    pub fn into_sorted(self) -> Vec<(String, usize)> {
        let mut entries: Vec<_> = self.counts.into_iter().collect();
        // `sort_by` is stable
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl<S: Into<String>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counts = IndexMap::new();
        for key in iter {
            *counts.entry(key.into()).or_insert(0) += 1;
        }
        FrequencyTable { counts }
    }
}

/// The frequency tables of one sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NGramCounts {
    pub unigrams: FrequencyTable,
    pub bigrams: FrequencyTable,
    pub trigrams: FrequencyTable,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NGramCounter;

impl NGramCounter {
    /// Counts the windows of `n` adjacent entries, joined by [SEPARATOR].
    /// A sequence shorter than `n` gives an empty table.
    ///
    /// # Panics
    /// If `n` is zero.
    pub fn ngrams(&self, sequence: &[String], n: usize) -> FrequencyTable {
        sequence
            .windows(n)
            .map(|window| window.join(SEPARATOR))
            .collect()
    }

    pub fn count(&self, sequence: &[String]) -> NGramCounts {
        NGramCounts {
            unigrams: sequence.iter().map(String::as_str).collect(),
            bigrams: self.ngrams(sequence, 2),
            trigrams: self.ngrams(sequence, 3),
        }
    }
}
