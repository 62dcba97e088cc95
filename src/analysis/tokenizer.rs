//! Regex-based corpus tokenizer.
//!
//! A token is a maximal run of alphabet characters (hyphen included) in the
//! lowercased line, at least `min_length` characters long. The tokenizer
//! makes no orthographic judgment: `-тура` or `тура-` are tokens here and are
//! only rejected later by the validator.

use std::sync::Arc;

use regex::{Matches, Regex};

use crate::error::{Result, SpellDictError};
use crate::orthography::Orthography;

/// Extracts word tokens from lines of corpus or override text.
#[derive(Clone, Debug)]
pub struct CorpusTokenizer {
    /// Matches one maximal run of alphabet characters
    pattern: Arc<Regex>,
    /// Minimum token length in characters
    min_length: usize,
}

impl CorpusTokenizer {
    /// Create a tokenizer for the given orthography.
    ///
    /// `min_length` counts characters, not bytes, and must be at least 1.
    pub fn new(orthography: &Orthography, min_length: usize) -> Result<Self> {
        if min_length == 0 {
            return Err(SpellDictError::invalid_config(
                "minimum token length must be at least 1",
            ));
        }

        let class: String = orthography
            .alphabet()
            .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
            .collect();
        let regex = Regex::new(&format!("[{class}]+"))
            .map_err(|e| SpellDictError::analysis(format!("Invalid token pattern: {e}")))?;

        Ok(CorpusTokenizer {
            pattern: Arc::new(regex),
            min_length,
        })
    }

    /// Lowercase `line` and prepare its tokens.
    ///
    /// The returned [`LineTokens`] is iterated lazily and may be iterated any
    /// number of times.
    pub fn tokenize(&self, line: &str) -> LineTokens {
        LineTokens {
            text: line.to_lowercase(),
            pattern: Arc::clone(&self.pattern),
            min_length: self.min_length,
        }
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

/// The tokens of one lowercased line.
#[derive(Clone, Debug)]
pub struct LineTokens {
    text: String,
    pattern: Arc<Regex>,
    min_length: usize,
}

impl LineTokens {
    /// Iterate over the tokens in line order. Duplicates are kept.
    pub fn iter(&self) -> Tokens<'_> {
        Tokens {
            matches: self.pattern.find_iter(&self.text),
            min_length: self.min_length,
        }
    }

    /// The lowercased line.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl<'a> IntoIterator for &'a LineTokens {
    type Item = &'a str;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the tokens of a [`LineTokens`].
#[derive(Debug)]
pub struct Tokens<'a> {
    matches: Matches<'a, 'a>,
    min_length: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let min_length = self.min_length;
        // Runs are maximal because the class is greedy and matches never overlap.
        self.matches
            .by_ref()
            .map(|m| m.as_str())
            .find(|token| token.chars().count() >= min_length)
    }
}
