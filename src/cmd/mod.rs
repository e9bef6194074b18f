pub mod crack;
pub mod crossval;
pub mod train;

use clap::Args;
use plainsight::error::{PlainsightError, PsResult};
use plainsight::languages::{Language, DEFAULT_ALPHABET};
use std::fs;
use std::path::PathBuf;

/// Alphabet selection shared by the subcommands: a language preset, an
/// explicit alphabet string, or the default Latin set.
#[derive(Args, Debug, Clone)]
pub struct AlphabetArgs {
    /// Language preset (pl, hu, sv, it, de)
    #[arg(long)]
    pub lang: Option<Language>,

    /// Explicit alphabet string; overrides --lang
    #[arg(long)]
    pub alphabet: Option<String>,
}

impl AlphabetArgs {
    pub fn resolve(&self) -> String {
        if let Some(a) = &self.alphabet {
            return a.clone();
        }
        match self.lang {
            Some(lang) => lang.alphabet().to_string(),
            None => DEFAULT_ALPHABET.to_string(),
        }
    }
}

/// Reads a ciphertext either inline or from a file; trailing newlines from
/// files are stripped so they do not land outside the alphabet.
pub fn read_ciphertext(text: Option<&str>, input: Option<&PathBuf>) -> PsResult<String> {
    match (text, input) {
        (Some(t), _) => Ok(t.to_string()),
        (None, Some(path)) => {
            let raw = fs::read_to_string(path)?;
            Ok(raw.trim_end_matches(['\n', '\r']).to_string())
        }
        (None, None) => Err(PlainsightError::Config(
            "provide a ciphertext argument or --input".to_string(),
        )),
    }
}
