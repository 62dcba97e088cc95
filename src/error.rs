//! Error types for the dictionary builder.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SpellDictError`] enum.
//!
//! # Examples
//!
//! ```
//! use khakas_spelldict::error::{Result, SpellDictError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellDictError::invalid_config("minimum token length must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for dictionary construction.
#[derive(Error, Debug)]
pub enum SpellDictError {
    /// I/O errors without a known file path.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// I/O errors tied to a specific file (corpus, config, artifact).
    #[error("I/O error on {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A stored dictionary is not a flat mapping of words to non-negative integers.
    #[error("Format error: {0}")]
    Format(String),

    /// Tokenizer construction errors.
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid run configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SpellDictError.
pub type Result<T> = std::result::Result<T, SpellDictError>;

impl SpellDictError {
    /// Attach a path to an I/O error.
    pub fn file<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        SpellDictError::File {
            path: path.into(),
            source,
        }
    }

    /// Create a new format error.
    pub fn format<S: Into<String>>(msg: S) -> Self {
        SpellDictError::Format(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SpellDictError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SpellDictError::InvalidConfig(msg.into())
    }

    /// Whether the error means a file was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            SpellDictError::Io(e) | SpellDictError::File { source: e, .. } => {
                e.kind() == io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}
