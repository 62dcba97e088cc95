//! Command line argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// khakas-spelldict - build a curated word-frequency dictionary from a corpus
#[derive(Parser, Debug, Clone)]
#[command(name = "khakas-spelldict")]
#[command(about = "Build a curated word-frequency spelling dictionary from corpus text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellDictArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellDictArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build the full, clean and misfit dictionaries from a corpus
    Build(BuildArgs),

    /// Recompute the misfit words between two stored dictionaries
    Misfits(MisfitsArgs),

    /// Show statistics of a stored dictionary
    Stats(StatsArgs),
}

/// Arguments for a dictionary build
#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    /// Corpus text file
    #[arg(value_name = "CORPUS")]
    pub corpus: Option<PathBuf>,

    /// JSON configuration file; flags given here override it
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Directory for the three artifacts (default file names)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path of the unfiltered frequency table
    #[arg(long, value_name = "FILE")]
    pub full_output: Option<PathBuf>,

    /// Path of the curated dictionary
    #[arg(long, value_name = "FILE")]
    pub clean_output: Option<PathBuf>,

    /// Path of the misfit dictionary
    #[arg(long, value_name = "FILE", conflicts_with = "no_misfits")]
    pub misfit_output: Option<PathBuf>,

    /// Do not write the misfit dictionary
    #[arg(long)]
    pub no_misfits: bool,

    /// Include list (repeatable); missing files are ignored
    #[arg(short, long = "include", value_name = "FILE")]
    pub include: Vec<PathBuf>,

    /// Exclude list (repeatable); missing files are ignored
    #[arg(short, long = "exclude", value_name = "FILE")]
    pub exclude: Vec<PathBuf>,

    /// Frequency floor (inclusive)
    #[arg(short = 'm', long)]
    pub min_frequency: Option<u64>,

    /// Minimum token length in characters
    #[arg(short = 'l', long)]
    pub min_token_length: Option<usize>,

    /// Number of words listed in the summary
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,
}

/// Arguments for recomputing misfits
#[derive(Parser, Debug, Clone)]
pub struct MisfitsArgs {
    /// Full (unfiltered) dictionary
    #[arg(value_name = "FULL")]
    pub full: PathBuf,

    /// Clean (curated) dictionary
    #[arg(value_name = "CLEAN")]
    pub clean: PathBuf,

    /// Write the misfit dictionary here
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of misfits listed in the summary
    #[arg(short = 'n', long, default_value = "10")]
    pub top_n: usize,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Dictionary file
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Number of most frequent words to list
    #[arg(short = 'n', long, default_value = "10")]
    pub top_n: usize,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build() {
        let args = SpellDictArgs::parse_from([
            "khakas-spelldict",
            "build",
            "corpus.txt",
            "-e",
            "stop.txt",
            "-i",
            "a.txt",
            "-i",
            "b.txt",
            "-m",
            "5",
            "-vv",
        ]);
        assert_eq!(args.verbosity(), 2);
        match args.command {
            Command::Build(build) => {
                assert_eq!(build.corpus, Some(PathBuf::from("corpus.txt")));
                assert_eq!(build.exclude, vec![PathBuf::from("stop.txt")]);
                assert_eq!(build.include.len(), 2);
                assert_eq!(build.min_frequency, Some(5));
                assert!(build.min_token_length.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = SpellDictArgs::parse_from(["khakas-spelldict", "-q", "-v", "stats", "d.json"]);
        assert_eq!(args.verbosity(), 0);

        let args = SpellDictArgs::parse_from(["khakas-spelldict", "stats", "d.json"]);
        assert_eq!(args.verbosity(), 1);
        assert_eq!(args.output_format, OutputFormat::Human);
    }

    #[test]
    fn test_misfit_output_conflicts_with_no_misfits() {
        let result = SpellDictArgs::try_parse_from([
            "khakas-spelldict",
            "build",
            "c.txt",
            "--misfit-output",
            "m.json",
            "--no-misfits",
        ]);
        assert!(result.is_err());
    }
}
