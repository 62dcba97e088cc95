//! The dictionary build, end to end.
//!
//! ```text
//! corpus ─► tokenize ─► count ─► full table ─► persist(full)
//!                                    │
//!                                    ▼ copy
//!            exclude/include ─► working table ─► validate ─► persist(clean)
//!                                                               │
//!                      reload(full) ─────────────► misfits ─► persist(misfit)
//! ```
//!
//! The full table is never modified once counted. If a stage fails, the
//! run stops and artifacts written by earlier stages stay on disk.

use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::CorpusTokenizer;
use crate::config::BuildConfig;
use crate::error::{Result, SpellDictError};
use crate::spelling::accumulator::FrequencyAccumulator;
use crate::spelling::dictionary::FrequencyTable;
use crate::spelling::misfit::{MisfitReporter, MisfitSet, MisfitSummary};
use crate::spelling::overrides::{OverrideList, OverrideReconciler, ReconcileReport};
use crate::spelling::validator::{LexicalValidator, ValidationReport};
use crate::storage::dictionary_store::DictionaryStore;

/// Tables produced by an in-memory build.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub full: FrequencyTable,
    pub clean: FrequencyTable,
    pub misfits: MisfitSet,
    pub overrides: ReconcileReport,
    pub validation: ValidationReport,
}

/// Where a build wrote its artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifacts {
    pub full: PathBuf,
    pub clean: PathBuf,
    pub misfit: Option<PathBuf>,
}

/// Structured result of a build, for the caller to present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSummary {
    pub full_words: usize,
    pub full_frequency: u64,
    pub clean_words: usize,
    pub clean_frequency: u64,
    /// Most frequent words of the clean dictionary.
    pub top_words: Vec<(String, u64)>,
    pub overrides: ReconcileReport,
    pub validation: ValidationReport,
    pub misfits: MisfitSummary,
    pub artifacts: Artifacts,
}

/// Runs a configured dictionary build.
#[derive(Debug, Clone)]
pub struct BuildPipeline {
    config: BuildConfig,
    tokenizer: CorpusTokenizer,
}

impl BuildPipeline {
    pub fn new(config: BuildConfig) -> Result<Self> {
        config.validate()?;
        let tokenizer = CorpusTokenizer::new(&config.orthography, config.min_token_length)?;
        Ok(BuildPipeline { config, tokenizer })
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    fn accumulator(&self) -> FrequencyAccumulator {
        FrequencyAccumulator::new(self.tokenizer.clone())
    }

    fn reconciler(&self) -> OverrideReconciler {
        OverrideReconciler::new(self.tokenizer.clone(), self.config.min_frequency)
    }

    fn validator(&self) -> LexicalValidator {
        LexicalValidator::new(self.config.orthography.clone(), self.config.min_frequency)
    }

    /// Derive the clean table from a full table.
    ///
    /// The full table is copied; the copy is reconciled against the
    /// override lists (exclude first, then include) and then validated.
    pub fn curate(
        &self,
        full: &FrequencyTable,
        excludes: &[OverrideList],
        includes: &[OverrideList],
    ) -> (FrequencyTable, ReconcileReport, ValidationReport) {
        let mut working = full.clone();
        let overrides = self.reconciler().reconcile(&mut working, excludes, includes);
        let validation = self.validator().validate(&mut working);
        (working, overrides, validation)
    }

    /// Run every stage in memory, without touching the filesystem.
    pub fn build_from_lines<I, S>(
        &self,
        corpus: I,
        excludes: &[OverrideList],
        includes: &[OverrideList],
    ) -> BuildOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let full = self.accumulator().count_lines(corpus);
        let (clean, overrides, validation) = self.curate(&full, excludes, includes);
        let misfits = MisfitReporter::compute(&full, &clean);
        BuildOutcome {
            full,
            clean,
            misfits,
            overrides,
            validation,
        }
    }

    /// Run the configured build and write its artifacts.
    pub fn run(&self) -> Result<BuildSummary> {
        let paths = &self.config.paths;
        let corpus = paths
            .corpus
            .as_ref()
            .ok_or_else(|| SpellDictError::invalid_config("no corpus path configured"))?;

        let full = self.accumulator().count_file(corpus)?;
        info!(
            "Counted {} distinct words ({} tokens)",
            full.len(),
            full.total_frequency()
        );
        DictionaryStore::persist(&full, &paths.full_output)?;
        info!("Full table written to {}", paths.full_output.display());

        let excludes = load_lists(&paths.exclude)?;
        let includes = load_lists(&paths.include)?;
        let (clean, overrides, validation) = self.curate(&full, &excludes, &includes);
        info!(
            "Overrides: {} excluded, {} raised, {} inserted",
            overrides.excluded, overrides.raised, overrides.inserted
        );
        info!(
            "Validation removed {} words, {} remain",
            validation.removed(),
            clean.len()
        );

        DictionaryStore::persist(&clean, &paths.clean_output)?;
        info!("Clean dictionary written to {}", paths.clean_output.display());

        // Misfits are measured against the stored baseline, not the in-memory copy.
        let baseline = DictionaryStore::load(&paths.full_output)?;
        let misfits = MisfitReporter::compute(&baseline, &clean);
        if let Some(misfit_path) = &paths.misfit_output {
            DictionaryStore::persist(&misfits.to_table(), misfit_path)?;
            info!(
                "{} misfit words written to {}",
                misfits.len(),
                misfit_path.display()
            );
        }

        Ok(BuildSummary {
            full_words: baseline.len(),
            full_frequency: baseline.total_frequency(),
            clean_words: clean.len(),
            clean_frequency: clean.total_frequency(),
            top_words: clean.most_frequent(self.config.top_n),
            overrides,
            validation,
            misfits: misfits.summary(self.config.top_n),
            artifacts: Artifacts {
                full: paths.full_output.clone(),
                clean: paths.clean_output.clone(),
                misfit: paths.misfit_output.clone(),
            },
        })
    }
}

/// Recompute misfits from a stored full table and a stored clean table.
///
/// Either file failing to load as a dictionary is fatal. When `output` is
/// given, the misfit table is written there.
pub fn misfits_from_files<P, Q>(full: P, clean: Q, output: Option<&Path>) -> Result<MisfitSet>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let full = DictionaryStore::load(full)?;
    let clean = DictionaryStore::load(clean)?;
    let misfits = MisfitReporter::compute(&full, &clean);
    if let Some(path) = output {
        DictionaryStore::persist(&misfits.to_table(), path)?;
        info!("{} misfit words written to {}", misfits.len(), path.display());
    }
    Ok(misfits)
}

/// Read each override file as its own list.
fn load_lists(paths: &[PathBuf]) -> Result<Vec<OverrideList>> {
    paths.iter().map(OverrideList::from_path).collect()
}
