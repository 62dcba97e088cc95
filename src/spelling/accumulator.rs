//! Corpus frequency counting.
//!
//! Counting is commutative: partial tables built over any partition of the
//! corpus and merged by summation equal the table built over the whole
//! corpus. [`FrequencyAccumulator::count_lines_parallel`] relies on this.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use rayon::prelude::*;

use crate::analysis::tokenizer::CorpusTokenizer;
use crate::error::{Result, SpellDictError};
use crate::spelling::dictionary::FrequencyTable;

/// Builds the full frequency table from corpus lines.
#[derive(Clone, Debug)]
pub struct FrequencyAccumulator {
    tokenizer: CorpusTokenizer,
}

impl FrequencyAccumulator {
    pub fn new(tokenizer: CorpusTokenizer) -> Self {
        FrequencyAccumulator { tokenizer }
    }

    pub fn tokenizer(&self) -> &CorpusTokenizer {
        &self.tokenizer
    }

    /// Add the tokens of one line to `table`.
    pub fn count_line(&self, table: &mut FrequencyTable, line: &str) {
        for token in &self.tokenizer.tokenize(line) {
            table.increment(token);
        }
    }

    /// Count every token of every line.
    pub fn count_lines<I, S>(&self, lines: I) -> FrequencyTable
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = FrequencyTable::new();
        for line in lines {
            self.count_line(&mut table, line.as_ref());
        }
        table
    }

    /// Count lines in parallel shards and merge the partial tables.
    pub fn count_lines_parallel<S>(&self, lines: &[S]) -> FrequencyTable
    where
        S: AsRef<str> + Sync,
    {
        lines
            .par_iter()
            .fold(FrequencyTable::new, |mut table, line| {
                self.count_line(&mut table, line.as_ref());
                table
            })
            .reduce(FrequencyTable::new, |mut merged, partial| {
                merged.merge(&partial);
                merged
            })
    }

    /// Count a line-oriented reader. Read errors abort the count.
    pub fn count_reader<R: BufRead>(&self, reader: R) -> Result<FrequencyTable> {
        let mut table = FrequencyTable::new();
        let mut lines = 0usize;
        for line in reader.lines() {
            self.count_line(&mut table, &line?);
            lines += 1;
        }
        debug!("Counted {lines} lines into {} distinct words", table.len());
        Ok(table)
    }

    /// Count a corpus file. A missing or unreadable corpus is fatal.
    pub fn count_file<P: AsRef<Path>>(&self, path: P) -> Result<FrequencyTable> {
        let path = path.as_ref();
        info!("Reading corpus from {}", path.display());
        let file = File::open(path).map_err(|e| SpellDictError::file(path, e))?;
        self.count_reader(BufReader::new(file)).map_err(|e| match e {
            SpellDictError::Io(source) => SpellDictError::file(path, source),
            other => other,
        })
    }
}
