//! Word frequency tables.

use std::collections::{BTreeMap, HashMap};
use std::collections::hash_map;

use serde::{Deserialize, Serialize};

/// A mapping from normalized word to occurrence count.
///
/// Serializes as a flat JSON object with keys in lexicographic order, which
/// is the dictionary artifact format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, u64>", into = "BTreeMap<String, u64>")]
pub struct FrequencyTable {
    words: HashMap<String, u64>,
}

impl FrequencyTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        FrequencyTable {
            words: HashMap::new(),
        }
    }

    /// Set the frequency of a word, returning the previous one.
    pub fn insert<S: Into<String>>(&mut self, word: S, frequency: u64) -> Option<u64> {
        self.words.insert(word.into(), frequency)
    }

    /// Increment the frequency of a word by 1, starting from zero.
    pub fn increment(&mut self, word: &str) {
        self.add(word, 1);
    }

    /// Add `count` occurrences of a word.
    pub fn add(&mut self, word: &str, count: u64) {
        match self.words.get_mut(word) {
            Some(frequency) => *frequency += count,
            None => {
                self.words.insert(word.to_string(), count);
            }
        }
    }

    /// Remove a word, returning its frequency if it was present.
    pub fn remove(&mut self, word: &str) -> Option<u64> {
        self.words.remove(word)
    }

    /// Check if a word exists in the table.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Get the frequency of a word, if present.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.words.get(word).copied()
    }

    /// Get the frequency of a word, zero when absent.
    pub fn frequency(&self, word: &str) -> u64 {
        self.get(word).unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sum of all frequencies.
    pub fn total_frequency(&self) -> u64 {
        self.words.values().sum()
    }

    /// Iterate over `(word, frequency)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.words.iter().map(|(word, freq)| (word.as_str(), *freq))
    }

    /// Iterate over words in arbitrary order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    /// A lexicographically ordered view of the table.
    pub fn sorted(&self) -> BTreeMap<&str, u64> {
        self.iter().collect()
    }

    /// The `limit` most frequent words, by descending frequency.
    /// Ties are broken by ascending word so the result is deterministic.
    pub fn most_frequent(&self, limit: usize) -> Vec<(String, u64)> {
        let mut word_freq: Vec<(&str, u64)> = self.iter().collect();
        word_freq.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        word_freq
            .into_iter()
            .take(limit)
            .map(|(word, freq)| (word.to_string(), freq))
            .collect()
    }

    /// Merge another table into this one by summing frequencies.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (word, frequency) in other.iter() {
            self.add(word, frequency);
        }
    }

    /// Remove every listed word. Returns how many were present.
    ///
    /// Callers collect the keys first and remove afterwards, so no table is
    /// mutated while it is being scanned.
    pub fn remove_all<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter(|word| self.words.remove(word.as_ref()).is_some())
            .count()
    }
}

impl From<BTreeMap<String, u64>> for FrequencyTable {
    fn from(map: BTreeMap<String, u64>) -> Self {
        FrequencyTable {
            words: map.into_iter().collect(),
        }
    }
}

impl From<FrequencyTable> for BTreeMap<String, u64> {
    fn from(table: FrequencyTable) -> Self {
        table.words.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        FrequencyTable {
            words: iter.into_iter().map(|(w, f)| (w.into(), f)).collect(),
        }
    }
}

impl<S: Into<String>> Extend<(S, u64)> for FrequencyTable {
    fn extend<I: IntoIterator<Item = (S, u64)>>(&mut self, iter: I) {
        self.words
            .extend(iter.into_iter().map(|(w, f)| (w.into(), f)));
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (String, u64);
    type IntoIter = hash_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}
