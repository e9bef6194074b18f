pub mod schedule;

pub use schedule::HeatingPlan;

use crate::cipher::Mapping;
use crate::config::SamplerParams;
use crate::error::{PlainsightError, PsResult};
use crate::model::LanguageModel;
use fastrand::Rng;
use serde::{Deserialize, Serialize};

/// Clamp applied to the score difference before exponentiating. The upper
/// bound caps the acceptance ratio of far-better proposals at `e^hi`; the
/// lower bound keeps `exp` away from underflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcceptClamp {
    pub hi: f64,
    pub lo: f64,
}

impl Default for AcceptClamp {
    fn default() -> Self {
        Self {
            hi: 1.0,
            lo: -1000.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SamplerOptions {
    pub iterations: usize,
    pub snapshot_stride: usize,
    pub clamp: AcceptClamp,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            iterations: 20_000,
            snapshot_stride: 500,
            clamp: AcceptClamp::default(),
        }
    }
}

impl From<&SamplerParams> for SamplerOptions {
    fn from(p: &SamplerParams) -> Self {
        Self {
            iterations: p.iterations,
            snapshot_stride: p.snapshot_stride.max(1),
            clamp: AcceptClamp {
                hi: p.accept_clamp_hi,
                lo: p.accept_clamp_lo,
            },
        }
    }
}

/// One (score, decoded text) snapshot, recorded at a fixed iteration stride.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TraceEntry {
    pub iteration: usize,
    pub score: f64,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct SamplerResult {
    pub mapping: Mapping,
    pub final_score: f64,
    pub final_text: String,
    pub trace: Vec<TraceEntry>,
}

/// Per-iteration hook. Returning false aborts the run cooperatively; the
/// chain then reports its state as of the last completed iteration.
pub trait ProgressObserver {
    fn keep_going(&self, _iteration: usize, _score: f64) -> bool {
        true
    }

    fn on_snapshot(&self, _entry: &TraceEntry) {}
}

struct NoopObserver;
impl ProgressObserver for NoopObserver {}

/// Metropolis-Hastings acceptance on already-scaled score difference.
/// Equal-or-better proposals (post-clamp ratio >= 1) are always taken;
/// worse ones with probability `ratio`.
#[inline]
pub fn eval_proposal(
    proposed_score: f64,
    current_score: f64,
    beta: f64,
    clamp: AcceptClamp,
    rng: &mut Rng,
) -> bool {
    let diff = (beta * (proposed_score - current_score)).clamp(clamp.lo, clamp.hi);
    let ratio = diff.exp();
    ratio >= 1.0 || rng.f64() < ratio
}

/// A single Metropolis-Hastings chain over substitution mappings.
///
/// The ciphertext is indexed into alphabet positions once; per iteration
/// the candidate plaintext is scored directly through the mapping's inverse
/// table, and a string is only materialized for snapshots.
pub struct Chain<'a> {
    model: &'a LanguageModel,
    cipher_indices: Vec<usize>,
    options: SamplerOptions,
    rng: Rng,

    mapping: Mapping,
    score: f64,
}

impl<'a> Chain<'a> {
    /// Starts a chain with a fresh random mapping, or a caller-supplied
    /// seed mapping. Ciphertext characters outside the model's alphabet are
    /// a contract violation and fail here.
    pub fn new(
        model: &'a LanguageModel,
        ciphertext: &str,
        options: SamplerOptions,
        mut rng: Rng,
        seed_mapping: Option<Mapping>,
    ) -> PsResult<Self> {
        let alphabet = model.alphabet();
        let cipher_indices = alphabet.index_text(ciphertext)?;

        let mapping = match seed_mapping {
            Some(m) => {
                if m.len() != alphabet.len() {
                    return Err(PlainsightError::Config(format!(
                        "seed mapping covers {} symbols, alphabet has {}",
                        m.len(),
                        alphabet.len()
                    )));
                }
                m
            }
            None => Mapping::random(alphabet, &mut rng)?,
        };

        let mut chain = Self {
            model,
            cipher_indices,
            options,
            rng,
            mapping,
            score: 0.0,
        };
        let initial = chain.score_of(&chain.mapping);
        chain.score = initial;
        Ok(chain)
    }

    #[inline]
    fn score_of(&self, mapping: &Mapping) -> f64 {
        let inverse = mapping.inverse_table();
        let mut total = 0.0;
        for w in self.cipher_indices.windows(2) {
            total += self.model.log_prob_at(inverse[w[0]], inverse[w[1]]);
        }
        total
    }

    fn decoded_text(&self) -> String {
        let alphabet = self.model.alphabet();
        self.cipher_indices
            .iter()
            .map(|&c| alphabet.char_at(self.mapping.decode_pos(c)))
            .collect()
    }

    pub fn current_score(&self) -> f64 {
        self.score
    }

    /// One proposal: swap two mapped values, rescore, accept or reject.
    /// Exactly one proposal is consumed either way.
    fn step(&mut self, beta: f64) -> PsResult<bool> {
        let proposed = self.mapping.swap_pair(&mut self.rng)?;
        let proposed_score = self.score_of(&proposed);

        let accepted = eval_proposal(
            proposed_score,
            self.score,
            beta,
            self.options.clamp,
            &mut self.rng,
        );
        if accepted {
            self.mapping = proposed;
            self.score = proposed_score;
        }
        Ok(accepted)
    }

    /// Plain variant: `options.iterations` steps at `beta = 1`.
    pub fn run(self) -> PsResult<SamplerResult> {
        self.run_with_observer(&NoopObserver)
    }

    pub fn run_with_observer(mut self, observer: &dyn ProgressObserver) -> PsResult<SamplerResult> {
        let iterations = self.options.iterations;
        let trace = self.sample(iterations, |_| 1.0, observer)?;
        Ok(self.finish(trace))
    }

    /// Annealed variant: one step per plan coefficient; the plan's length
    /// is the iteration budget.
    pub fn run_annealed(self, plan: &HeatingPlan) -> PsResult<SamplerResult> {
        self.run_annealed_with_observer(plan, &NoopObserver)
    }

    pub fn run_annealed_with_observer(
        mut self,
        plan: &HeatingPlan,
        observer: &dyn ProgressObserver,
    ) -> PsResult<SamplerResult> {
        let betas = plan.betas();
        let trace = self.sample(betas.len(), |i| betas[i], observer)?;
        Ok(self.finish(trace))
    }

    fn sample<F: Fn(usize) -> f64>(
        &mut self,
        iterations: usize,
        beta_at: F,
        observer: &dyn ProgressObserver,
    ) -> PsResult<Vec<TraceEntry>> {
        let stride = self.options.snapshot_stride.max(1);
        let mut trace = Vec::with_capacity(iterations / stride + 1);

        for i in 0..iterations {
            self.step(beta_at(i))?;

            if i % stride == 0 {
                let entry = TraceEntry {
                    iteration: i,
                    score: self.score,
                    text: self.decoded_text(),
                };
                observer.on_snapshot(&entry);
                trace.push(entry);
            }

            if !observer.keep_going(i, self.score) {
                break;
            }
        }
        Ok(trace)
    }

    fn finish(self, trace: Vec<TraceEntry>) -> SamplerResult {
        let final_text = self.decoded_text();
        SamplerResult {
            mapping: self.mapping,
            final_score: self.score,
            final_text,
            trace,
        }
    }
}
