use thiserror::Error;

/// Feed layer errors - combines all error types
#[derive(Error, Debug)]
pub enum FeedError {
    #[error(transparent)]
    CoreError(#[from] nongli_core::error::CoreError),

    #[error("Holiday API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Almanac dataset is not valid JSON: {0}")]
    DatasetError(#[from] serde_json::Error),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

pub type FeedResult<T> = std::result::Result<T, FeedError>;
