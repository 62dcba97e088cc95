//! Canonical on-disk form of a frequency table.
//!
//! A dictionary artifact is a compact JSON object mapping each word to its
//! frequency, keys in lexicographic order, non-ASCII characters written as
//! UTF-8. Identical tables always produce byte-identical files, so
//! artifacts can be diffed between runs and handed to a spell-checking
//! engine unchanged.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::debug;
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::error::{Result, SpellDictError};
use crate::spelling::dictionary::FrequencyTable;

/// Reads and writes dictionary artifacts.
pub struct DictionaryStore;

impl DictionaryStore {
    /// Render a table in canonical form.
    pub fn to_json_string(table: &FrequencyTable) -> Result<String> {
        Ok(serde_json::to_string(&table.sorted())?)
    }

    /// Parse a canonical (or any flat) JSON mapping of words to counts.
    pub fn from_json_str(json: &str) -> Result<FrequencyTable> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| SpellDictError::format(format!("invalid JSON: {e}")))?;
        table_from_value(value)
    }

    /// Write `table` to `path`.
    ///
    /// The artifact is written to a temporary file next to `path` and then
    /// renamed over it, so a failed write never leaves a truncated artifact.
    pub fn persist<P: AsRef<Path>>(table: &FrequencyTable, path: P) -> Result<()> {
        let path = path.as_ref();
        let parent_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent_dir).map_err(|e| SpellDictError::file(parent_dir, e))?;

        let temp_file =
            NamedTempFile::new_in(parent_dir).map_err(|e| SpellDictError::file(parent_dir, e))?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            serde_json::to_writer(&mut writer, &table.sorted())?;
            writer.flush().map_err(|e| SpellDictError::file(path, e))?;
        }
        temp_file
            .persist(path)
            .map_err(|e| SpellDictError::file(path, e.error))?;

        debug!("Wrote {} words to {}", table.len(), path.display());
        Ok(())
    }

    /// Read a dictionary artifact.
    ///
    /// Fails with a format error unless the file holds a flat JSON object
    /// whose values are all non-negative integers.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<FrequencyTable> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SpellDictError::file(path, e))?;
        let mut json = String::new();
        BufReader::new(file)
            .read_to_string(&mut json)
            .map_err(|e| SpellDictError::file(path, e))?;

        Self::from_json_str(&json).map_err(|e| match e {
            SpellDictError::Format(msg) => {
                SpellDictError::format(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }
}

fn table_from_value(value: Value) -> Result<FrequencyTable> {
    let Value::Object(map) = value else {
        return Err(SpellDictError::format(format!(
            "expected a JSON object, found {}",
            kind_of(&value)
        )));
    };

    let mut table = FrequencyTable::new();
    for (word, count) in map {
        let Some(frequency) = count.as_u64() else {
            return Err(SpellDictError::format(format!(
                "frequency of '{word}' is not a non-negative integer: {count}"
            )));
        };
        table.insert(word, frequency);
    }
    Ok(table)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
