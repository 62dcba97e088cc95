//! Criterion benchmarks for dictionary construction.
//!
//! Covers tokenization, sequential and parallel counting, and validation.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use khakas_spelldict::analysis::CorpusTokenizer;
use khakas_spelldict::orthography::Orthography;
use khakas_spelldict::spelling::{FrequencyAccumulator, LexicalValidator};
use std::hint::black_box;

/// Generate corpus lines for benchmarking.
fn generate_corpus(count: usize) -> Vec<String> {
    let words = [
        "тура", "суг", "ағас", "ах-тас", "пол", "хоных", "ипчі", "сӧс", "тағ", "ат", "пазы",
        "кізі", "ӱн", "чазы", "харах", "пілбес", "аал", "чир", "таң", "хусха",
    ];

    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let line_length = 5 + (i % 20); // Variable length lines
        let mut line_words = Vec::with_capacity(line_length);

        for j in 0..line_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            line_words.push(words[word_idx]);
        }

        lines.push(line_words.join(", "));
    }

    lines
}

fn tokenizer() -> CorpusTokenizer {
    CorpusTokenizer::new(&Orthography::khakas(), 2).unwrap()
}

/// Benchmark tokenization of single lines.
fn bench_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenization");

    let tokenizer = tokenizer();
    let lines = generate_corpus(1000);

    group.bench_function("tokenize_single_line", |b| {
        b.iter(|| {
            let tokens = tokenizer.tokenize(black_box(&lines[0]));
            black_box(tokens.iter().count())
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("tokenize_batch_lines", |b| {
        b.iter(|| {
            for line in lines.iter().take(100) {
                let tokens = tokenizer.tokenize(black_box(line));
                black_box(tokens.iter().count());
            }
        })
    });

    group.finish();
}

/// Benchmark corpus counting, sequential and sharded.
fn bench_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("counting");

    let accumulator = FrequencyAccumulator::new(tokenizer());
    let lines = generate_corpus(10_000);

    group.throughput(Throughput::Elements(lines.len() as u64));
    group.bench_function("count_sequential", |b| {
        b.iter(|| black_box(accumulator.count_lines(black_box(&lines))))
    });
    group.bench_function("count_parallel", |b| {
        b.iter(|| black_box(accumulator.count_lines_parallel(black_box(&lines))))
    });

    group.finish();
}

/// Benchmark validation of a full table.
fn bench_validation(c: &mut Criterion) {
    let accumulator = FrequencyAccumulator::new(tokenizer());
    let full = accumulator.count_lines(generate_corpus(10_000));
    let validator = LexicalValidator::new(Orthography::khakas(), 10);

    c.bench_function("validate_full_table", |b| {
        b.iter_with_setup(
            || full.clone(),
            |mut working| black_box(validator.validate(&mut working)),
        )
    });
}

criterion_group!(benches, bench_tokenization, bench_counting, bench_validation);
criterion_main!(benches);
