//! # khakas-spelldict
//!
//! Builds a curated word-frequency dictionary for a low-resource language
//! from raw corpus text. The resulting artifact is a flat JSON object of
//! word frequencies, ready for a generic edit-distance spell checker.
//!
//! ## Pipeline
//!
//! - [`analysis`] - tokenize lines into lowercase word tokens
//! - [`spelling`] - count tokens, apply include/exclude lists, validate
//!   words against the orthography, report misfits
//! - [`storage`] - read and write canonical dictionary artifacts
//! - [`pipeline`] - run all stages and summarize the result
//!
//! ```
//! use khakas_spelldict::config::BuildConfig;
//! use khakas_spelldict::pipeline::BuildPipeline;
//! use khakas_spelldict::spelling::OverrideList;
//!
//! let config = BuildConfig::default().with_min_frequency(2);
//! let pipeline = BuildPipeline::new(config).unwrap();
//! let excludes = [OverrideList::from_lines(["тура"])];
//!
//! let outcome = pipeline.build_from_lines(["тура тура", "суг суг суг", "а"], &excludes, &[]);
//! assert_eq!(outcome.clean.frequency("суг"), 3);
//! assert!(outcome.misfits.contains("тура"));
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod orthography;
pub mod pipeline;
pub mod spelling;
pub mod storage;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
