//! Caller-facing surface for embedding the decoder: build a model, run one
//! chain, cross-validate many. Thin wrappers over the core types for hosts
//! that do not want to manage `Chain` state themselves.

use crate::alphabet::Alphabet;
use crate::cipher::Mapping;
use crate::error::PsResult;
use crate::eval::{self, CrossValidation};
use crate::model::{DegenerateRowPolicy, LanguageModel};
use crate::sampler::{Chain, HeatingPlan, SamplerOptions, SamplerResult};

/// Builds a bigram language model from a reference corpus and an alphabet
/// string. Out-of-alphabet corpus characters are skipped.
pub fn build_language_model(corpus: &str, alphabet: &str) -> PsResult<LanguageModel> {
    let alphabet = Alphabet::parse(alphabet)?;
    LanguageModel::build_with_policy(corpus, &alphabet, DegenerateRowPolicy::default())
}

/// Runs one Metropolis-Hastings chain. With a `cooling_plan` the annealed
/// variant runs for the plan's length; otherwise the plain variant runs for
/// `options.iterations`. `seed_mapping` resumes from a known key instead of
/// a random one; `seed` makes the run reproducible.
pub fn run_mcmc(
    ciphertext: &str,
    model: &LanguageModel,
    options: SamplerOptions,
    seed_mapping: Option<Mapping>,
    cooling_plan: Option<&HeatingPlan>,
    seed: Option<u64>,
) -> PsResult<SamplerResult> {
    let rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    let chain = Chain::new(model, ciphertext, options, rng, seed_mapping)?;
    match cooling_plan {
        Some(plan) => chain.run_annealed(plan),
        None => chain.run(),
    }
}

/// Runs `attempts` independent chains and collects their final decodings
/// and score traces. See [`eval::cross_validate`].
pub fn cross_validate(
    attempts: usize,
    ciphertext: &str,
    model: &LanguageModel,
    options: &SamplerOptions,
    seed: Option<u64>,
) -> PsResult<CrossValidation> {
    eval::cross_validate(attempts, ciphertext, model, options, None, seed)
}
