//! Error handling for the resume matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("No extractable text in document: {0}")]
    EmptyDocument(String),

    #[error("Invalid scoring weights: {0}")]
    InvalidWeights(String),

    #[error("Scorer computation error: {0}")]
    Scorer(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, MatcherError>;

/// Transport errors surface as fetch failures; the caller decides retry policy.
impl From<reqwest::Error> for MatcherError {
    fn from(err: reqwest::Error) -> Self {
        MatcherError::Fetch(err.to_string())
    }
}
