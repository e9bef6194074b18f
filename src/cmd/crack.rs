use crate::cmd::read_ciphertext;
use crate::reports;
use clap::Args;
use plainsight::api;
use plainsight::config::{AnnealParams, SamplerParams};
use plainsight::error::PsResult;
use plainsight::model::loader;
use plainsight::sampler::{HeatingPlan, SamplerOptions};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CrackArgs {
    /// Ciphertext to decode (or use --input)
    pub ciphertext: Option<String>,

    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Language model JSON produced by `train`
    #[arg(short, long, default_value = "model.json")]
    pub model: PathBuf,

    #[command(flatten)]
    pub sampler: SamplerParams,

    #[command(flatten)]
    pub anneal: AnnealParams,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Write the (iteration, score, text) trace as CSV
    #[arg(long)]
    pub trace_out: Option<PathBuf>,
}

pub fn run(args: CrackArgs) -> PsResult<()> {
    let model = loader::load_from_file(&args.model)?;
    let ciphertext = read_ciphertext(args.ciphertext.as_deref(), args.input.as_ref())?;
    let options = SamplerOptions::from(&args.sampler);

    let plan = if args.anneal.anneal {
        Some(HeatingPlan::geometric(
            args.anneal.beta_start,
            args.anneal.beta_end,
            args.sampler.iterations,
        )?)
    } else {
        None
    };

    info!(
        "Running {} chain for {} iterations",
        if plan.is_some() { "annealed" } else { "plain" },
        args.sampler.iterations
    );
    let result = api::run_mcmc(
        &ciphertext,
        &model,
        options,
        None,
        plan.as_ref(),
        args.seed,
    )?;

    if let Some(path) = &args.trace_out {
        reports::write_trace_csv(path, &result.trace)?;
        info!("Trace written to {}", path.display());
    }

    println!("score: {:.2}", result.final_score);
    println!("key:   {}", result.mapping.cipher_alphabet(model.alphabet()));
    println!("{}", result.final_text);
    Ok(())
}
