//! Curated include/exclude word lists.
//!
//! Override lists correct what automatic counting gets wrong: an *exclude*
//! list names confirmed non-words that are dropped whatever their
//! frequency, an *include* list names real words that must reach the
//! dictionary even when the corpus barely attests them.
//!
//! # Precedence
//!
//! [`OverrideReconciler::reconcile`] always runs the exclude pass before the
//! include pass. A word named in both kinds of list therefore ends up in the
//! table with at least the floor frequency: include wins. This ordering is
//! part of the contract and must not change.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::CorpusTokenizer;
use crate::error::{Result, SpellDictError};
use crate::spelling::dictionary::FrequencyTable;

/// Lines of an override file, tokenized like the corpus when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideList {
    lines: Vec<String>,
}

impl OverrideList {
    pub fn new() -> Self {
        OverrideList { lines: Vec::new() }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OverrideList {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Read an override file. A file that does not exist is an empty list;
    /// any other read failure is an error.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Override list {} not found, treating as empty", path.display());
                return Ok(Self::new());
            }
            Err(e) => return Err(SpellDictError::file(path, e)),
        };

        let lines = BufReader::new(file)
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .map_err(|e| SpellDictError::file(path, e))?;
        debug!("Read {} lines from {}", lines.len(), path.display());
        Ok(OverrideList { lines })
    }

    /// Read and concatenate several override files.
    pub fn from_paths<I, P>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut combined = Self::new();
        for path in paths {
            combined.lines.extend(Self::from_path(path)?.lines);
        }
        Ok(combined)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// What a reconciliation changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileReport {
    /// Words removed by exclude lists.
    pub excluded: usize,
    /// Included words whose frequency was raised to the floor.
    pub raised: usize,
    /// Included words that were absent and inserted at the floor.
    pub inserted: usize,
}

/// Applies exclude and include lists to a working table.
#[derive(Clone, Debug)]
pub struct OverrideReconciler {
    tokenizer: CorpusTokenizer,
    floor: u64,
}

impl OverrideReconciler {
    /// `floor` is the frequency every included word is guaranteed.
    pub fn new(tokenizer: CorpusTokenizer, floor: u64) -> Self {
        OverrideReconciler { tokenizer, floor }
    }

    pub fn floor(&self) -> u64 {
        self.floor
    }

    /// Remove every excluded word, then raise or insert every included word.
    pub fn reconcile(
        &self,
        table: &mut FrequencyTable,
        excludes: &[OverrideList],
        includes: &[OverrideList],
    ) -> ReconcileReport {
        let mut report = ReconcileReport::default();

        for list in excludes {
            let mut tokens = 0usize;
            let before = report.excluded;
            for line in list.lines() {
                let words = self.tokenizer.tokenize(line);
                tokens += words.iter().count();
                report.excluded += table.remove_all(&words);
            }
            warn_if_tokenless(list, tokens, "Exclude");
            debug!("Exclude list removed {} words", report.excluded - before);
        }

        for list in includes {
            let mut tokens = 0usize;
            for line in list.lines() {
                for word in &self.tokenizer.tokenize(line) {
                    tokens += 1;
                    match table.get(word) {
                        Some(current) if current >= self.floor => {}
                        Some(_) => {
                            table.insert(word, self.floor);
                            report.raised += 1;
                        }
                        None => {
                            table.insert(word, self.floor);
                            report.inserted += 1;
                        }
                    }
                }
            }
            warn_if_tokenless(list, tokens, "Include");
        }

        report
    }
}

fn warn_if_tokenless(list: &OverrideList, tokens: usize, role: &str) {
    if tokens == 0 && !list.is_empty() {
        warn!(
            "{role} list has {} lines but no tokens; check its alphabet",
            list.lines().len()
        );
    }
}
