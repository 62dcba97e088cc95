//! Output formatting for CLI commands.

use std::fmt::Write as _;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpellDictArgs};
use crate::error::Result;
use crate::pipeline::BuildSummary;
use crate::spelling::misfit::MisfitSummary;

/// Result structure for the `misfits` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct MisfitResult {
    pub full: PathBuf,
    pub clean: PathBuf,
    pub output: Option<PathBuf>,
    pub misfits: MisfitSummary,
}

/// Result structure for the `stats` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub path: PathBuf,
    pub words: usize,
    pub total_frequency: u64,
    pub top_words: Vec<(String, u64)>,
}

/// Results that can be rendered for a person to read.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &SpellDictArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("{message}");
                println!();
            }
            print!("{}", result.render_human());
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
        }
    }
    Ok(())
}

/// One-line description of a misfit summary,
/// e.g. `1 misfit word; top misfit: тура (2)`.
pub fn misfit_line(summary: &MisfitSummary) -> String {
    let noun = if summary.total == 1 { "word" } else { "words" };
    let mut line = format!("{} misfit {noun}", summary.total);
    if !summary.top.is_empty() {
        let label = if summary.top.len() == 1 {
            "top misfit"
        } else {
            "top misfits"
        };
        let _ = write!(line, "; {label}: {}", format_words(&summary.top));
    }
    line
}

fn format_words(words: &[(String, u64)]) -> String {
    words
        .iter()
        .map(|(word, freq)| format!("{word} ({freq})"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl HumanOutput for BuildSummary {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let v = &self.validation;
        let o = &self.overrides;

        let _ = writeln!(out, "Dictionary Build:");
        let _ = writeln!(out, "═════════════════");
        let _ = writeln!(
            out,
            "Full table:       {} words, {} tokens -> {}",
            self.full_words,
            self.full_frequency,
            self.artifacts.full.display()
        );
        let _ = writeln!(
            out,
            "Overrides:        {} excluded, {} raised, {} inserted",
            o.excluded, o.raised, o.inserted
        );
        let _ = writeln!(
            out,
            "Validation:       {} removed (boundary hyphen {}, alphabet {}, no vowel {}, frequency {})",
            v.removed(),
            v.boundary_hyphen,
            v.alphabet_closure,
            v.vowel_presence,
            v.frequency_floor
        );
        let _ = writeln!(
            out,
            "Clean dictionary: {} words, {} tokens -> {}",
            self.clean_words,
            self.clean_frequency,
            self.artifacts.clean.display()
        );
        if !self.top_words.is_empty() {
            let _ = writeln!(out, "Top words:        {}", format_words(&self.top_words));
        }
        let _ = write!(out, "Misfits:          {}", misfit_line(&self.misfits));
        match &self.artifacts.misfit {
            Some(path) => {
                let _ = writeln!(out, " -> {}", path.display());
            }
            None => out.push('\n'),
        }
        out
    }
}

impl HumanOutput for MisfitResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Full:    {}", self.full.display());
        let _ = writeln!(out, "Clean:   {}", self.clean.display());
        let _ = writeln!(out, "Misfits: {}", misfit_line(&self.misfits));
        if let Some(path) = &self.output {
            let _ = writeln!(out, "Written: {}", path.display());
        }
        out
    }
}

impl HumanOutput for DictionaryStats {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Dictionary Statistics:");
        let _ = writeln!(out, "══════════════════════");
        let _ = writeln!(out, "File:            {}", self.path.display());
        let _ = writeln!(out, "Words:           {}", self.words);
        let _ = writeln!(out, "Total frequency: {}", self.total_frequency);
        for (i, (word, freq)) in self.top_words.iter().enumerate() {
            let _ = writeln!(out, "{:>3}. {word} ({freq})", i + 1);
        }
        out
    }
}
