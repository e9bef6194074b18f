use crate::cmd::AlphabetArgs;
use clap::Args;
use plainsight::alphabet::Alphabet;
use plainsight::corpus;
use plainsight::error::PsResult;
use plainsight::model::{loader, DegenerateRowPolicy, LanguageModel};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct TrainArgs {
    /// Corpus text file to count bigrams over
    pub corpus: PathBuf,

    /// Where to write the model JSON
    #[arg(short, long, default_value = "model.json")]
    pub output: PathBuf,

    #[command(flatten)]
    pub alphabet: AlphabetArgs,

    /// Skip the corpus cleanup pass
    #[arg(long, default_value_t = false)]
    pub raw: bool,

    /// Cap on corpus characters used for counting
    #[arg(long, default_value_t = corpus::DEFAULT_MAX_CHARS)]
    pub max_chars: usize,

    /// Fail when a character never starts a bigram instead of falling back
    /// to a uniform row
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

pub fn run(args: TrainArgs) -> PsResult<()> {
    let alphabet = Alphabet::parse(&args.alphabet.resolve())?;

    info!("Loading corpus: {}", args.corpus.display());
    let raw = fs::read_to_string(&args.corpus)?;
    let cleaned = if args.raw { raw } else { corpus::normalize(&raw) };
    let text = corpus::truncate(&cleaned, args.max_chars);
    info!(
        "Counting bigrams over {} chars ({} symbols)",
        text.chars().count(),
        alphabet.len()
    );

    let policy = if args.strict {
        DegenerateRowPolicy::Reject
    } else {
        DegenerateRowPolicy::Uniform
    };
    let model = LanguageModel::build_with_policy(text, &alphabet, policy)?;

    loader::save_to_file(&model, &args.output)?;
    info!("Model written to {}", args.output.display());
    Ok(())
}
