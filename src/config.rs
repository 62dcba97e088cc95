//! Run configuration for a dictionary build.
//!
//! A [`BuildConfig`] can be written as JSON; every field is optional and
//! falls back to its default:
//!
//! ```json
//! {
//!   "min_token_length": 2,
//!   "min_frequency": 10,
//!   "top_n": 10,
//!   "paths": {
//!     "corpus": "data/corpus.txt",
//!     "include": ["data/defis_words_custom.txt"]
//!   }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellDictError};
use crate::orthography::Orthography;
use crate::spelling::misfit::DEFAULT_TOP_N;

/// Default minimum token length, in characters.
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 2;

/// Default frequency floor, shared by include lists and validation.
pub const DEFAULT_MIN_FREQUENCY: u64 = 10;

/// Configuration for one dictionary build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Letters, vowels and hyphen of the language.
    pub orthography: Orthography,

    /// Shortest run of letters counted as a token.
    pub min_token_length: usize,

    /// Frequency floor: included words are raised to it, and words below it
    /// are dropped. A word seen exactly this often is kept.
    pub min_frequency: u64,

    /// Number of words listed in summaries.
    pub top_n: usize,

    /// Input and output locations.
    pub paths: BuildPaths,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            orthography: Orthography::khakas(),
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
            min_frequency: DEFAULT_MIN_FREQUENCY,
            top_n: DEFAULT_TOP_N,
            paths: BuildPaths::default(),
        }
    }
}

/// File locations used by a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildPaths {
    /// Corpus text. Required.
    pub corpus: Option<PathBuf>,

    /// Unfiltered frequency table, the audit baseline.
    pub full_output: PathBuf,

    /// Curated dictionary.
    pub clean_output: PathBuf,

    /// Dropped words. Not written when absent.
    pub misfit_output: Option<PathBuf>,

    /// Allowlists. Missing files are treated as empty.
    pub include: Vec<PathBuf>,

    /// Blocklists. Missing files are treated as empty.
    pub exclude: Vec<PathBuf>,
}

impl Default for BuildPaths {
    fn default() -> Self {
        Self {
            corpus: None,
            full_output: PathBuf::from("word_frequency_full.json"),
            clean_output: PathBuf::from("word_frequency.json"),
            misfit_output: Some(PathBuf::from("word_frequency_misfit.json")),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl BuildPaths {
    /// Place all outputs in `dir` under their default file names.
    ///
    /// A disabled misfit artifact stays disabled.
    pub fn with_output_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        let dir = dir.as_ref();
        let defaults = BuildPaths::default();
        self.full_output = dir.join(defaults.full_output);
        self.clean_output = dir.join(defaults.clean_output);
        if self.misfit_output.is_some() {
            self.misfit_output = defaults.misfit_output.map(|p| dir.join(p));
        }
        self
    }

    /// Artifact paths written by a build.
    pub fn outputs(&self) -> Vec<&PathBuf> {
        let mut outputs = vec![&self.full_output, &self.clean_output];
        outputs.extend(self.misfit_output.as_ref());
        outputs
    }

    /// Paths a build reads: the corpus and every override list.
    pub fn inputs(&self) -> Vec<&PathBuf> {
        let mut inputs: Vec<&PathBuf> = self.corpus.iter().collect();
        inputs.extend(&self.include);
        inputs.extend(&self.exclude);
        inputs
    }
}

impl BuildConfig {
    /// Create a configuration with default settings for `corpus`.
    pub fn new<P: Into<PathBuf>>(corpus: P) -> Self {
        let mut config = Self::default();
        config.paths.corpus = Some(corpus.into());
        config
    }

    /// Read a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| SpellDictError::file(path, e))?;
        let config: BuildConfig = serde_json::from_str(&json)?;
        Ok(config)
    }

    /// Set the frequency floor.
    pub fn with_min_frequency(mut self, min_frequency: u64) -> Self {
        self.min_frequency = min_frequency;
        self
    }

    /// Set the minimum token length.
    pub fn with_min_token_length(mut self, min_token_length: usize) -> Self {
        self.min_token_length = min_token_length;
        self
    }

    pub fn with_orthography(mut self, orthography: Orthography) -> Self {
        self.orthography = orthography;
        self
    }

    pub fn with_paths(mut self, paths: BuildPaths) -> Self {
        self.paths = paths;
        self
    }

    /// Check the settings a build depends on.
    ///
    /// Output paths must be distinct from each other and from every input,
    /// so a build never overwrites its corpus or reads back its own artifacts.
    pub fn validate(&self) -> Result<()> {
        if self.min_token_length == 0 {
            return Err(SpellDictError::invalid_config(
                "min_token_length must be at least 1",
            ));
        }
        let outputs = self.paths.outputs();
        let inputs = self.paths.inputs();
        for (i, output) in outputs.iter().enumerate() {
            if outputs[i + 1..].contains(output) {
                return Err(SpellDictError::invalid_config(format!(
                    "output path {} is used for more than one artifact",
                    output.display()
                )));
            }
            if inputs.contains(output) {
                return Err(SpellDictError::invalid_config(format!(
                    "output path {} is also a build input",
                    output.display()
                )));
            }
        }
        Ok(())
    }
}
