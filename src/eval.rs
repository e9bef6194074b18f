//! Judges sampler output: cross-validation across independent chains and
//! the closeness/accuracy metrics applied to their final decodings.

use crate::error::{PlainsightError, PsResult};
use crate::model::LanguageModel;
use crate::sampler::{Chain, HeatingPlan, SamplerOptions};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Fallback when a caller hands a trust level outside `[0, 1)`.
pub const DEFAULT_TRUST_LEVEL: f64 = 0.1;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CrossValidation {
    /// Last recorded decoding of each run.
    pub final_texts: Vec<String>,
    /// Score snapshots of each run, in iteration order.
    pub score_traces: Vec<Vec<f64>>,
}

/// Runs `attempts` independent chains over the same ciphertext and model.
/// Chains share nothing mutable: each owns its mapping, score and rng, so
/// the attempts run in parallel. With a base seed, attempt `i` uses
/// `seed + i` and the whole cross-validation is reproducible.
pub fn cross_validate(
    attempts: usize,
    ciphertext: &str,
    model: &LanguageModel,
    options: &SamplerOptions,
    plan: Option<&HeatingPlan>,
    base_seed: Option<u64>,
) -> PsResult<CrossValidation> {
    let results: Vec<_> = (0..attempts)
        .into_par_iter()
        .map(|i| {
            let rng = match base_seed {
                Some(s) => fastrand::Rng::with_seed(s + i as u64),
                None => fastrand::Rng::new(),
            };
            let chain = Chain::new(model, ciphertext, options.clone(), rng, None)?;
            match plan {
                Some(p) => chain.run_annealed(p),
                None => chain.run(),
            }
        })
        .collect::<PsResult<Vec<_>>>()?;

    let mut final_texts = Vec::with_capacity(attempts);
    let mut score_traces = Vec::with_capacity(attempts);
    for r in results {
        let last_text = r
            .trace
            .last()
            .map(|e| e.text.clone())
            .unwrap_or(r.final_text);
        final_texts.push(last_text);
        score_traces.push(r.trace.iter().map(|e| e.score).collect());
    }

    Ok(CrossValidation {
        final_texts,
        score_traces,
    })
}

/// Index of the run whose last recorded score is the strict maximum; ties
/// keep the earliest run. None when no run recorded a score.
pub fn best_of(score_traces: &[Vec<f64>]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, trace) in score_traces.iter().enumerate() {
        if let Some(&last) = trace.last() {
            match best {
                Some((_, score)) if last > score => best = Some((i, last)),
                None => best = Some((i, last)),
                _ => {}
            }
        }
    }
    best.map(|(i, _)| i)
}

/// Fraction of samples equal verbatim to the reference.
pub fn exact_match_rate(reference: &str, samples: &[String]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let hits = samples.iter().filter(|s| s.as_str() == reference).count();
    hits as f64 / samples.len() as f64
}

fn sanitize_trust_level(trust_level: f64) -> f64 {
    if (0.0..1.0).contains(&trust_level) {
        trust_level
    } else {
        warn!(
            "trust level {} outside [0, 1); using {}",
            trust_level, DEFAULT_TRUST_LEVEL
        );
        DEFAULT_TRUST_LEVEL
    }
}

/// Fraction of samples whose language-model score lands within a symmetric
/// band of `|score(reference) * trust_level|` around the reference score.
pub fn likelihood_close_rate(
    reference: &str,
    samples: &[String],
    model: &LanguageModel,
    trust_level: f64,
) -> PsResult<f64> {
    if samples.is_empty() {
        return Ok(0.0);
    }
    let trust = sanitize_trust_level(trust_level);
    let ref_score = model.score(reference)?;
    let band = (ref_score * trust).abs();

    let mut hits = 0usize;
    for s in samples {
        if (model.score(s)? - ref_score).abs() <= band {
            hits += 1;
        }
    }
    Ok(hits as f64 / samples.len() as f64)
}

/// Fraction of samples whose position-wise character match against the
/// reference is at least `1 - trust_level`. Samples must have the same
/// character count as the reference.
pub fn letterwise_close_rate(
    reference: &str,
    samples: &[String],
    trust_level: f64,
) -> PsResult<f64> {
    if samples.is_empty() {
        return Ok(0.0);
    }
    let trust = sanitize_trust_level(trust_level);
    let ref_chars: Vec<char> = reference.chars().collect();

    let mut hits = 0usize;
    for s in samples {
        let acc = letterwise_accuracy(&ref_chars, s)?;
        if acc >= 1.0 - trust {
            hits += 1;
        }
    }
    Ok(hits as f64 / samples.len() as f64)
}

/// Position-wise match fraction of one sample against the reference.
pub fn letterwise_accuracy(ref_chars: &[char], sample: &str) -> PsResult<f64> {
    let sample_len = sample.chars().count();
    if sample_len != ref_chars.len() {
        return Err(PlainsightError::LengthMismatch {
            reference: ref_chars.len(),
            sample: sample_len,
        });
    }
    if ref_chars.is_empty() {
        return Ok(1.0);
    }
    let matches = sample
        .chars()
        .zip(ref_chars.iter())
        .filter(|(s, r)| s == *r)
        .count();
    Ok(matches as f64 / ref_chars.len() as f64)
}

/// Fraction of samples that decode to mostly digits (at least half the
/// characters). Empty samples are not numeric.
pub fn numeric_solution_rate(samples: &[String]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let numeric = samples
        .iter()
        .filter(|s| {
            let len = s.chars().count();
            if len == 0 {
                return false;
            }
            let digits = s.chars().filter(|c| c.is_ascii_digit()).count();
            digits * 2 >= len
        })
        .count();
    numeric as f64 / samples.len() as f64
}
