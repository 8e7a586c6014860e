//! Shared error types for the services crate.

use thiserror::Error;

use keisei_core::scoring::ConfigError;

/// Errors emitted by dataset loaders.
///
/// Every variant means the same thing to the caller: the dataset is
/// unavailable. Loading is never retried and there is no partial
/// degradation; the session simply does not start.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoaderError {
    #[error("dataset request failed")]
    Http(#[from] reqwest::Error),
    #[error("dataset payload could not be decoded")]
    Decode(#[from] serde_json::Error),
    #[error("manifest lists no shards")]
    EmptyManifest,
    #[error("dataset contains no questions")]
    EmptyDataset,
}

/// Errors emitted by the session state machine and loop service.
///
/// Invalid transitions are rejected rather than silently ignored so the
/// machine's invariants stay provable.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
    #[error("session already completed")]
    Completed,
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error("session is not complete yet")]
    NotComplete,
    #[error("answer kind does not match the session mode")]
    AnswerMode,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Data(#[from] LoaderError),
}
