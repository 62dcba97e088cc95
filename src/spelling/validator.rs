//! Orthographic and frequency validation of the working table.
//!
//! Four rules are checked per word, each without looking at the others:
//!
//! | Rule                          | Rejects a word when                       |
//! |-------------------------------|-------------------------------------------|
//! | [`Rule::BoundaryHyphen`]      | it starts or ends with the hyphen         |
//! | [`Rule::AlphabetClosure`]     | a character is outside the alphabet       |
//! | [`Rule::VowelPresence`]       | it has no vowel                           |
//! | [`Rule::FrequencyFloor`]      | its count is below the floor (inclusive)  |
//!
//! Because the rules are independent, the set of surviving words does not
//! depend on the order they are applied in. Validation only ever removes
//! words.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::orthography::Orthography;
use crate::spelling::dictionary::FrequencyTable;

/// A single rejection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    BoundaryHyphen,
    AlphabetClosure,
    VowelPresence,
    FrequencyFloor,
}

impl Rule {
    /// All rules in their default order.
    pub const ALL: [Rule; 4] = [
        Rule::BoundaryHyphen,
        Rule::AlphabetClosure,
        Rule::VowelPresence,
        Rule::FrequencyFloor,
    ];

    /// Whether this rule rejects `word` seen `count` times.
    pub fn rejects(self, word: &str, count: u64, orthography: &Orthography, floor: u64) -> bool {
        match self {
            Rule::BoundaryHyphen => {
                let hyphen = orthography.hyphen();
                word.starts_with(hyphen) || word.ends_with(hyphen)
            }
            Rule::AlphabetClosure => !word.chars().all(|c| orthography.is_letter(c)),
            Rule::VowelPresence => !word.chars().any(|c| orthography.is_vowel(c)),
            Rule::FrequencyFloor => count < floor,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::BoundaryHyphen => "boundary_hyphen",
            Rule::AlphabetClosure => "alphabet_closure",
            Rule::VowelPresence => "vowel_presence",
            Rule::FrequencyFloor => "frequency_floor",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How many words each rule removed.
///
/// A word failing several rules is attributed to the first failing rule in
/// the validator's order, so the counts sum to the number of removed words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub boundary_hyphen: usize,
    pub alphabet_closure: usize,
    pub vowel_presence: usize,
    pub frequency_floor: usize,
}

impl ValidationReport {
    pub fn removed(&self) -> usize {
        self.boundary_hyphen + self.alphabet_closure + self.vowel_presence + self.frequency_floor
    }

    pub fn count(&self, rule: Rule) -> usize {
        match rule {
            Rule::BoundaryHyphen => self.boundary_hyphen,
            Rule::AlphabetClosure => self.alphabet_closure,
            Rule::VowelPresence => self.vowel_presence,
            Rule::FrequencyFloor => self.frequency_floor,
        }
    }

    fn record(&mut self, rule: Rule) {
        match rule {
            Rule::BoundaryHyphen => self.boundary_hyphen += 1,
            Rule::AlphabetClosure => self.alphabet_closure += 1,
            Rule::VowelPresence => self.vowel_presence += 1,
            Rule::FrequencyFloor => self.frequency_floor += 1,
        }
    }
}

/// Prunes a working table down to the clean dictionary.
#[derive(Debug, Clone)]
pub struct LexicalValidator {
    orthography: Orthography,
    floor: u64,
    order: Vec<Rule>,
}

impl LexicalValidator {
    /// A word is kept when its count is at least `floor`.
    pub fn new(orthography: Orthography, floor: u64) -> Self {
        LexicalValidator {
            orthography,
            floor,
            order: Rule::ALL.to_vec(),
        }
    }

    /// Apply the rules in a different order. Only the attribution in the
    /// [`ValidationReport`] changes; the surviving words are the same.
    /// Rules missing from `order` are appended in their default order.
    pub fn with_rule_order(mut self, order: &[Rule]) -> Self {
        let mut rules: Vec<Rule> = Vec::with_capacity(Rule::ALL.len());
        for rule in order.iter().chain(Rule::ALL.iter()) {
            if !rules.contains(rule) {
                rules.push(*rule);
            }
        }
        self.order = rules;
        self
    }

    pub fn floor(&self) -> u64 {
        self.floor
    }

    pub fn rule_order(&self) -> &[Rule] {
        &self.order
    }

    /// The first rule, in this validator's order, that rejects the word.
    pub fn first_violation(&self, word: &str, count: u64) -> Option<Rule> {
        self.order
            .iter()
            .copied()
            .find(|rule| rule.rejects(word, count, &self.orthography, self.floor))
    }

    pub fn is_valid(&self, word: &str, count: u64) -> bool {
        self.first_violation(word, count).is_none()
    }

    /// Remove every word that fails a rule.
    ///
    /// Rejected words are collected first and removed afterwards; the table
    /// is never mutated while it is being scanned.
    pub fn validate(&self, table: &mut FrequencyTable) -> ValidationReport {
        let mut report = ValidationReport::default();

        let rejected: Vec<String> = table
            .iter()
            .filter_map(|(word, count)| {
                self.first_violation(word, count).map(|rule| {
                    report.record(rule);
                    word.to_string()
                })
            })
            .collect();
        table.remove_all(&rejected);

        debug!(
            "Validation removed {} words ({} kept)",
            report.removed(),
            table.len()
        );
        report
    }

    /// Apply one rule on its own, returning how many words it removed.
    pub fn apply_rule(&self, table: &mut FrequencyTable, rule: Rule) -> usize {
        let rejected: Vec<String> = table
            .iter()
            .filter(|(word, count)| rule.rejects(word, *count, &self.orthography, self.floor))
            .map(|(word, _)| word.to_string())
            .collect();
        table.remove_all(&rejected)
    }
}
