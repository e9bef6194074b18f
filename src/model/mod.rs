pub mod loader;

use crate::alphabet::Alphabet;
use crate::error::{PlainsightError, PsResult};
use tracing::warn;

/// What to do when a character never appears as the first half of any
/// bigram in the corpus. `Uniform` keeps the row (Laplace smoothing makes
/// it exactly `1/|A|` everywhere) and logs a warning; `Reject` aborts
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegenerateRowPolicy {
    #[default]
    Uniform,
    Reject,
}

/// Character-bigram language model: a dense `|A| x |A|` table of natural-log
/// transition probabilities, immutable after construction.
///
/// Rows are smoothed with add-one (Laplace) counts over the denominator
/// `total + |A|`, so every row is a genuine probability distribution and a
/// zero-count row degenerates to uniform instead of dividing by zero.
#[derive(Debug, Clone)]
pub struct LanguageModel {
    alphabet: Alphabet,
    /// Row-major: `log_probs[prev * n + next]`.
    log_probs: Vec<f64>,
}

impl LanguageModel {
    /// Counts adjacent character pairs of `corpus` where both ends belong to
    /// `alphabet` (anything else is skipped, not an error) and converts the
    /// counts to smoothed log-probabilities.
    pub fn build(corpus: &str, alphabet: &Alphabet) -> PsResult<Self> {
        Self::build_with_policy(corpus, alphabet, DegenerateRowPolicy::default())
    }

    pub fn build_with_policy(
        corpus: &str,
        alphabet: &Alphabet,
        policy: DegenerateRowPolicy,
    ) -> PsResult<Self> {
        let n = alphabet.len();
        let mut counts = vec![0u64; n * n];

        let mut prev: Option<usize> = None;
        for c in corpus.chars() {
            let cur = alphabet.position(c);
            if let (Some(a), Some(b)) = (prev, cur) {
                counts[a * n + b] += 1;
            }
            prev = cur;
        }

        let mut log_probs = vec![0.0f64; n * n];
        for a in 0..n {
            let row = &counts[a * n..(a + 1) * n];
            let total: u64 = row.iter().sum();
            if total == 0 {
                match policy {
                    DegenerateRowPolicy::Reject => {
                        return Err(PlainsightError::DegenerateModelRow(alphabet.char_at(a)));
                    }
                    DegenerateRowPolicy::Uniform => {
                        warn!(
                            "character '{}' never observed as bigram start; row falls back to uniform",
                            alphabet.char_at(a)
                        );
                    }
                }
            }
            let denom = (total + n as u64) as f64;
            for b in 0..n {
                log_probs[a * n + b] = (((row[b] + 1) as f64) / denom).ln();
            }
        }

        Ok(Self {
            alphabet: alphabet.clone(),
            log_probs,
        })
    }

    /// Rebuilds a model from an already-smoothed table (used when loading a
    /// persisted model). The table must be `alphabet.len()²` long.
    pub(crate) fn from_table(alphabet: Alphabet, log_probs: Vec<f64>) -> PsResult<Self> {
        let n = alphabet.len();
        if log_probs.len() != n * n {
            return Err(PlainsightError::Config(format!(
                "log-probability table has {} entries, expected {}",
                log_probs.len(),
                n * n
            )));
        }
        Ok(Self {
            alphabet,
            log_probs,
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline(always)]
    pub fn log_prob_at(&self, prev: usize, next: usize) -> f64 {
        self.log_probs[prev * self.alphabet.len() + next]
    }

    pub fn log_prob(&self, prev: char, next: char) -> PsResult<f64> {
        let a = self.alphabet.require(prev)?;
        let b = self.alphabet.require(next)?;
        Ok(self.log_prob_at(a, b))
    }

    /// Total log-likelihood of `text`: the sum over consecutive pairs of the
    /// pair's log-probability. Texts shorter than 2 characters score 0.
    /// Fails on characters without a table row/column.
    pub fn score(&self, text: &str) -> PsResult<f64> {
        let indices = self.alphabet.index_text(text)?;
        Ok(self.score_indices(&indices))
    }

    /// Scoring on pre-indexed text; the sampler's hot path.
    #[inline]
    pub fn score_indices(&self, indices: &[usize]) -> f64 {
        let n = self.alphabet.len();
        indices
            .windows(2)
            .map(|w| self.log_probs[w[0] * n + w[1]])
            .sum()
    }
}
