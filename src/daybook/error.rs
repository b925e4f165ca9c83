use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid date: {0}")]
    Parse(String),

    #[error("Nothing to analyze: there are no entries for this day")]
    NothingToAnalyze,

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, JournalError>;
