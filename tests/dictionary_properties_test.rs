use khakas_spelldict::analysis::CorpusTokenizer;
use khakas_spelldict::orthography::Orthography;
use khakas_spelldict::spelling::{
    FrequencyAccumulator, FrequencyTable, LexicalValidator, OverrideList, OverrideReconciler,
    Rule,
};
use khakas_spelldict::storage::DictionaryStore;

const WORDS: &[&str] = &[
    "тура", "суг", "ағас", "ах-тас", "-пол", "пол-", "пнс", "хоных", "ӧӧ", "ипчі", "сӧс",
    "тағ", "а", "ат", "пазы", "кізі", "ӱн",
];
const SEPARATORS: &[&str] = &[" ", ", ", ". ", " 12 ", "! ", "\t", " (x) "];

/// Deterministic pseudo-random corpus.
fn corpus(lines: usize, seed: u64) -> Vec<String> {
    let mut state = seed;
    let mut next = move |bound: usize| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) as usize) % bound
    };

    (0..lines)
        .map(|_| {
            let mut line = String::new();
            for _ in 0..next(12) {
                let word = WORDS[next(WORDS.len())];
                if next(4) == 0 {
                    let mut chars = word.chars();
                    if let Some(first) = chars.next() {
                        line.extend(first.to_uppercase());
                        line.push_str(chars.as_str());
                    }
                } else {
                    line.push_str(word);
                }
                line.push_str(SEPARATORS[next(SEPARATORS.len())]);
            }
            line
        })
        .collect()
}

fn accumulator() -> FrequencyAccumulator {
    FrequencyAccumulator::new(CorpusTokenizer::new(&Orthography::khakas(), 2).unwrap())
}

#[test]
fn test_counting_commutes_over_partitions() {
    let acc = accumulator();
    for seed in 1..=5 {
        let lines = corpus(200, seed);
        let whole = acc.count_lines(&lines);
        assert!(!whole.is_empty());

        for split in [0, 1, 37, 100, 199, 200] {
            let (left, right) = lines.split_at(split);

            let mut lr = acc.count_lines(left);
            lr.merge(&acc.count_lines(right));
            let mut rl = acc.count_lines(right);
            rl.merge(&acc.count_lines(left));

            assert_eq!(lr, whole, "seed {seed}, split {split}");
            assert_eq!(rl, whole, "seed {seed}, split {split}");
        }

        assert_eq!(acc.count_lines_parallel(&lines), whole, "seed {seed}");
    }
}

#[test]
fn test_round_trip_through_store() {
    let dir = tempfile::tempdir().unwrap();
    let table = accumulator().count_lines(corpus(300, 42));
    let path = dir.path().join("full.json");

    DictionaryStore::persist(&table, &path).unwrap();
    assert_eq!(DictionaryStore::load(&path).unwrap(), table);

    let json = DictionaryStore::to_json_string(&table).unwrap();
    assert_eq!(DictionaryStore::from_json_str(&json).unwrap(), table);
}

#[test]
fn test_validator_idempotent_and_order_independent() {
    let table = accumulator().count_lines(corpus(300, 7));
    let validator = LexicalValidator::new(Orthography::khakas(), 3);

    let mut clean = table.clone();
    let report = validator.validate(&mut clean);
    assert!(report.removed() > 0);
    for (word, count) in clean.iter() {
        assert!(validator.is_valid(word, count), "{word} survived validation");
        assert!(count >= 3);
    }

    let mut again = clean.clone();
    assert_eq!(validator.validate(&mut again).removed(), 0);
    assert_eq!(again, clean);

    let permutations = [
        [Rule::FrequencyFloor, Rule::BoundaryHyphen, Rule::VowelPresence, Rule::AlphabetClosure],
        [Rule::VowelPresence, Rule::AlphabetClosure, Rule::FrequencyFloor, Rule::BoundaryHyphen],
        [Rule::AlphabetClosure, Rule::VowelPresence, Rule::BoundaryHyphen, Rule::FrequencyFloor],
    ];
    for order in permutations {
        let mut reordered = table.clone();
        validator.clone().with_rule_order(&order).validate(&mut reordered);
        assert_eq!(reordered, clean);
    }
}

#[test]
fn test_threshold_boundary() {
    let validator = LexicalValidator::new(Orthography::khakas(), 10);
    let mut table: FrequencyTable = [("тура", 10), ("суг", 9)].into_iter().collect();
    validator.validate(&mut table);
    assert_eq!(table.get("тура"), Some(10));
    assert!(!table.contains("суг"));
}

#[test]
fn test_include_overrides_exclude_in_same_run() {
    let tokenizer = CorpusTokenizer::new(&Orthography::khakas(), 2).unwrap();
    let reconciler = OverrideReconciler::new(tokenizer, 10);

    for initial in [None, Some(1), Some(10), Some(500)] {
        let mut table = FrequencyTable::new();
        if let Some(count) = initial {
            table.insert("пазы", count);
        }
        let excludes = [OverrideList::from_lines(["ПАЗЫ"])];
        let includes = [OverrideList::from_lines(["пазы."])];
        reconciler.reconcile(&mut table, &excludes, &includes);
        assert!(table.frequency("пазы") >= 10, "initial {initial:?}");
    }
}
