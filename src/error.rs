use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlainsightError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("character '{0}' is not in the alphabet")]
    OutOfAlphabet(char),

    #[error("alphabet needs at least 2 distinct characters, got {0}")]
    AlphabetTooSmall(usize),

    #[error("alphabet contains duplicate character '{0}'")]
    DuplicateAlphabetChar(char),

    #[error("no bigram in the corpus starts with '{0}'")]
    DegenerateModelRow(char),

    #[error("length mismatch: reference has {reference} chars, sample has {sample}")]
    LengthMismatch { reference: usize, sample: usize },

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type PsResult<T> = Result<T, PlainsightError>;
