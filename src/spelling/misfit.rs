//! Words dropped between the full and the clean table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::spelling::dictionary::FrequencyTable;

/// Number of misfits listed in a summary unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 10;

/// Words present in the full table but not in the clean one, each with its
/// full-table frequency, in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MisfitSet {
    words: BTreeMap<String, u64>,
}

/// Compact description of a [`MisfitSet`] for manual review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MisfitSummary {
    pub total: usize,
    /// Most frequent misfits, descending; ties in lexicographic order.
    pub top: Vec<(String, u64)>,
}

/// Computes misfit sets. Neither input table is modified.
pub struct MisfitReporter;

impl MisfitReporter {
    pub fn compute(full: &FrequencyTable, clean: &FrequencyTable) -> MisfitSet {
        let words = full
            .iter()
            .filter(|(word, _)| !clean.contains(word))
            .map(|(word, freq)| (word.to_string(), freq))
            .collect();
        MisfitSet { words }
    }
}

impl MisfitSet {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Misfits in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.words.iter().map(|(word, freq)| (word.as_str(), *freq))
    }

    /// The misfits as a frequency table, ready to be persisted.
    pub fn to_table(&self) -> FrequencyTable {
        self.iter().collect()
    }

    pub fn summary(&self, top_n: usize) -> MisfitSummary {
        let mut ranked: Vec<(&str, u64)> = self.iter().collect();
        // Stable sort over lexicographic input keeps ties in word order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        MisfitSummary {
            total: self.len(),
            top: ranked
                .into_iter()
                .take(top_n)
                .map(|(word, freq)| (word.to_string(), freq))
                .collect(),
        }
    }
}
