use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a bigram language model from a corpus file
    Train(cmd::train::TrainArgs),
    /// Run the MCMC decoder against a ciphertext
    Crack(cmd::crack::CrackArgs),
    /// Judge the decoder across independent runs
    Crossval(cmd::crossval::CrossvalArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Train(args) => cmd::train::run(args),
        Commands::Crack(args) => cmd::crack::run(args),
        Commands::Crossval(args) => cmd::crossval::run(args),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
