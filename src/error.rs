// src/error.rs

use thiserror::Error;

/// Failure loading one of the JSON content resources.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("fetch error: {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("fetch error: could not reach {url}: {message}")]
    Transport { url: String, message: String },
    #[error("fetch error: could not read {url}: {source}")]
    Io {
        url: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("cannot score a diagnostic with no ratings")]
    NoRatings,
    #[error("rating {value} at position {index} is outside 1..=5")]
    RatingOutOfRange { index: usize, value: u8 },
}

/// Logical failures of the diagnostic flow. None of them change state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("no section selected; start the diagnostic first")]
    NoSectionSelected,
    #[error("no quiz section with id `{0}`")]
    UnknownSection(String),
    #[error("expected {expected} answers, found {found}")]
    IncompleteAnswers { expected: usize, found: usize },
    #[error("question {index} does not exist")]
    QuestionOutOfRange { index: usize },
    #[error("pillar not found for id: {0}")]
    PillarNotFound(String),
    #[error(transparent)]
    Score(#[from] ScoreError),
}
