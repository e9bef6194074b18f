//! Persistence for language models: a nested previous-char -> {next-char ->
//! log-prob} record, keyed by single characters, written as JSON. The same
//! shape the corpus pipeline stores on disk.

use crate::alphabet::Alphabet;
use crate::error::{PlainsightError, PsResult};
use crate::model::LanguageModel;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub type NestedTable = BTreeMap<char, BTreeMap<char, f64>>;

/// Exports the model as a nested record-of-records.
pub fn to_nested(model: &LanguageModel) -> NestedTable {
    let alphabet = model.alphabet();
    let mut outer = NestedTable::new();
    for (a, prev) in alphabet.chars().enumerate() {
        let mut inner = BTreeMap::new();
        for (b, next) in alphabet.chars().enumerate() {
            inner.insert(next, model.log_prob_at(a, b));
        }
        outer.insert(prev, inner);
    }
    outer
}

/// Rebuilds a model from the nested record. The alphabet order is taken
/// from the outer key order; every row must carry exactly the same set of
/// columns, otherwise the table is not dense and square.
pub fn from_nested(table: &NestedTable) -> PsResult<LanguageModel> {
    let alphabet_str: String = table.keys().collect();
    let alphabet = Alphabet::parse(&alphabet_str)?;
    let n = alphabet.len();

    let mut log_probs = vec![0.0f64; n * n];
    for (prev, row) in table {
        let a = alphabet
            .position(*prev)
            .ok_or(PlainsightError::OutOfAlphabet(*prev))?;
        if row.len() != n {
            return Err(PlainsightError::Config(format!(
                "row '{}' has {} columns, expected {}",
                prev,
                row.len(),
                n
            )));
        }
        for (next, logp) in row {
            let b = alphabet
                .position(*next)
                .ok_or(PlainsightError::OutOfAlphabet(*next))?;
            log_probs[a * n + b] = *logp;
        }
    }

    LanguageModel::from_table(alphabet, log_probs)
}

pub fn save_to_file<P: AsRef<Path>>(model: &LanguageModel, path: P) -> PsResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer(BufWriter::new(file), &to_nested(model))?;
    Ok(())
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> PsResult<LanguageModel> {
    let file = File::open(path)?;
    let table: NestedTable = serde_json::from_reader(BufReader::new(file))?;
    from_nested(&table)
}
