use crate::cmd::read_ciphertext;
use crate::reports;
use clap::Args;
use plainsight::config::{EvalParams, SamplerParams};
use plainsight::error::PsResult;
use plainsight::eval;
use plainsight::model::loader;
use plainsight::sampler::SamplerOptions;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CrossvalArgs {
    /// Ciphertext to decode (or use --input)
    pub ciphertext: Option<String>,

    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[arg(short, long, default_value = "model.json")]
    pub model: PathBuf,

    #[command(flatten)]
    pub sampler: SamplerParams,

    #[command(flatten)]
    pub eval: EvalParams,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Known plaintext to measure accuracy against
    #[arg(short, long)]
    pub reference: Option<String>,
}

pub fn run(args: CrossvalArgs) -> PsResult<()> {
    let model = loader::load_from_file(&args.model)?;
    let ciphertext = read_ciphertext(args.ciphertext.as_deref(), args.input.as_ref())?;
    let options = SamplerOptions::from(&args.sampler);

    info!(
        "Cross-validating {} attempts x {} iterations",
        args.eval.attempts, args.sampler.iterations
    );
    let cv = eval::cross_validate(
        args.eval.attempts,
        &ciphertext,
        &model,
        &options,
        None,
        args.seed,
    )?;

    let best = eval::best_of(&cv.score_traces);
    reports::print_cross_validation(&cv, best);

    if let Some(reference) = &args.reference {
        let exact = eval::exact_match_rate(reference, &cv.final_texts);
        let likelihood =
            eval::likelihood_close_rate(reference, &cv.final_texts, &model, args.eval.trust_level)?;
        let letterwise =
            eval::letterwise_close_rate(reference, &cv.final_texts, args.eval.trust_level)?;
        let numeric = eval::numeric_solution_rate(&cv.final_texts);
        reports::print_rates(exact, likelihood, letterwise, numeric, args.eval.trust_level);
    }

    if let Some(i) = best {
        println!("{}", cv.final_texts[i]);
    }
    Ok(())
}
