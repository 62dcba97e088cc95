//! Command implementations for the CLI.

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::BuildConfig;
use crate::error::Result;
use crate::pipeline::{BuildPipeline, misfits_from_files};
use crate::storage::dictionary_store::DictionaryStore;

/// Execute a CLI command.
pub fn execute_command(args: SpellDictArgs) -> Result<()> {
    match &args.command {
        Command::Build(build_args) => build_dictionary(build_args.clone(), &args),
        Command::Misfits(misfit_args) => compute_misfits(misfit_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Merge command line flags over the configuration file (or defaults).
pub fn resolve_build_config(args: &BuildArgs) -> Result<BuildConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            BuildConfig::from_file(path)?
        }
        None => BuildConfig::default(),
    };

    if let Some(corpus) = &args.corpus {
        config.paths.corpus = Some(corpus.clone());
    }
    if let Some(dir) = &args.output_dir {
        config.paths = config.paths.with_output_dir(dir);
    }
    if let Some(path) = &args.full_output {
        config.paths.full_output = path.clone();
    }
    if let Some(path) = &args.clean_output {
        config.paths.clean_output = path.clone();
    }
    if let Some(path) = &args.misfit_output {
        config.paths.misfit_output = Some(path.clone());
    }
    if args.no_misfits {
        config.paths.misfit_output = None;
    }
    config.paths.include.extend(args.include.iter().cloned());
    config.paths.exclude.extend(args.exclude.iter().cloned());
    if let Some(min_frequency) = args.min_frequency {
        config.min_frequency = min_frequency;
    }
    if let Some(min_token_length) = args.min_token_length {
        config.min_token_length = min_token_length;
    }
    if let Some(top_n) = args.top_n {
        config.top_n = top_n;
    }

    Ok(config)
}

/// Build the dictionaries.
fn build_dictionary(args: BuildArgs, cli_args: &SpellDictArgs) -> Result<()> {
    let config = resolve_build_config(&args)?;
    let summary = BuildPipeline::new(config)?.run()?;
    output_result("Dictionary built successfully", &summary, cli_args)
}

/// Recompute misfits from two stored dictionaries.
fn compute_misfits(args: MisfitsArgs, cli_args: &SpellDictArgs) -> Result<()> {
    let misfits = misfits_from_files(&args.full, &args.clean, args.output.as_deref())?;

    output_result(
        "Misfits computed",
        &MisfitResult {
            full: args.full,
            clean: args.clean,
            output: args.output,
            misfits: misfits.summary(args.top_n),
        },
        cli_args,
    )
}

/// Show dictionary statistics.
fn show_stats(args: StatsArgs, cli_args: &SpellDictArgs) -> Result<()> {
    let table = DictionaryStore::load(&args.dictionary)?;

    output_result(
        "Dictionary loaded",
        &DictionaryStats {
            words: table.len(),
            total_frequency: table.total_frequency(),
            top_words: table.most_frequent(args.top_n),
            path: args.dictionary,
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpellDictError;
    use clap::Parser;
    use std::path::PathBuf;

    fn build_args(argv: &[&str]) -> BuildArgs {
        let mut full = vec!["khakas-spelldict", "build"];
        full.extend_from_slice(argv);
        match SpellDictArgs::parse_from(full).command {
            Command::Build(args) => args,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = resolve_build_config(&build_args(&[
            "corpus.txt",
            "-o",
            "out",
            "-m",
            "3",
            "-l",
            "1",
            "--no-misfits",
        ]))
        .unwrap();

        assert_eq!(config.paths.corpus, Some(PathBuf::from("corpus.txt")));
        assert_eq!(config.paths.clean_output, PathBuf::from("out/word_frequency.json"));
        assert_eq!(config.paths.misfit_output, None);
        assert_eq!(config.min_frequency, 3);
        assert_eq!(config.min_token_length, 1);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("build.json");
        std::fs::write(
            &config_path,
            r#"{"min_frequency": 7, "top_n": 3, "paths": {"corpus": "a.txt", "include": ["x.txt"]}}"#,
        )
        .unwrap();

        let config = resolve_build_config(&build_args(&[
            "b.txt",
            "-c",
            config_path.to_str().unwrap(),
            "-i",
            "y.txt",
        ]))
        .unwrap();

        assert_eq!(config.paths.corpus, Some(PathBuf::from("b.txt")));
        assert_eq!(config.min_frequency, 7);
        assert_eq!(config.top_n, 3);
        assert_eq!(
            config.paths.include,
            vec![PathBuf::from("x.txt"), PathBuf::from("y.txt")]
        );
    }

    #[test]
    fn test_output_dir_keeps_disabled_misfits() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("build.json");
        std::fs::write(
            &config_path,
            r#"{"paths": {"corpus": "a.txt", "misfit_output": null}}"#,
        )
        .unwrap();

        let config = resolve_build_config(&build_args(&[
            "-c",
            config_path.to_str().unwrap(),
            "-o",
            "out",
        ]))
        .unwrap();

        assert_eq!(config.paths.misfit_output, None);
        assert_eq!(config.paths.full_output, PathBuf::from("out/word_frequency_full.json"));
    }

    fn run(argv: &[&str]) -> Result<()> {
        let mut full = vec!["khakas-spelldict", "-q"];
        full.extend_from_slice(argv);
        execute_command(SpellDictArgs::parse_from(full))
    }

    #[test]
    fn test_misfits_command_writes_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let full = dir.path().join("full.json");
        let clean = dir.path().join("clean.json");
        let output = dir.path().join("misfit.json");
        std::fs::write(&full, r#"{"суг":3,"тура":2}"#).unwrap();
        std::fs::write(&clean, r#"{"суг":3}"#).unwrap();

        run(&[
            "misfits",
            full.to_str().unwrap(),
            clean.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), r#"{"тура":2}"#);
    }

    #[test]
    fn test_misfits_command_rejects_corrupt_baseline() {
        let dir = tempfile::tempdir().unwrap();
        let full = dir.path().join("full.json");
        let clean = dir.path().join("clean.json");
        let output = dir.path().join("misfit.json");
        std::fs::write(&full, r#"{"суг": "три"}"#).unwrap();
        std::fs::write(&clean, r#"{"суг":3}"#).unwrap();

        let err = run(&[
            "misfits",
            full.to_str().unwrap(),
            clean.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap_err();

        assert!(matches!(err, SpellDictError::Format(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_stats_command() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clean.json");
        std::fs::write(&path, r#"{"суг":3,"тура":2}"#).unwrap();
        assert!(run(&["stats", path.to_str().unwrap(), "-n", "1"]).is_ok());

        std::fs::write(&path, "[1, 2]").unwrap();
        let err = run(&["stats", path.to_str().unwrap()]).unwrap_err();
        assert!(matches!(err, SpellDictError::Format(_)));

        let err = run(&["stats", dir.path().join("absent.json").to_str().unwrap()]).unwrap_err();
        assert!(err.is_not_found());
    }
}
