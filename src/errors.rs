use thiserror::Error;

use crate::{io::sink::SinkError, preprocess::scaler::ScaleError, providers::ProviderError};

/// The unified error type for the `stock_data_prep` crate.
///
/// Soft data-availability failures never surface here; they degrade to an
/// empty series at the fetch boundary. Everything below is a structural or
/// programming error that aborts the run.
#[derive(Debug, Error)]
pub enum Error {
    /// An error originating from a data provider that was not eligible for
    /// soft-failure handling (e.g., invalid request parameters).
    #[error("Provider error: {0}")]
    Provider(String),

    /// An error originating from a data sink (e.g., file write failure).
    #[error("Sink error: {0}")]
    Sink(String),

    /// An error related to configuration, including raw files whose schema
    /// does not match the expected column layout.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A generic I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// An error from CSV encoding or decoding.
    #[error("CSV error")]
    Csv(#[from] csv::Error),

    /// An error from JSON encoding or decoding of the scaler artifact.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// A preprocessing error (scaler misuse or malformed input shape).
    #[error("Scaling error: {0}")]
    Scale(#[from] ScaleError),
}

impl From<ProviderError> for Error {
    fn from(e: ProviderError) -> Self {
        Error::Provider(e.to_string())
    }
}

impl From<SinkError> for Error {
    fn from(e: SinkError) -> Self {
        Error::Sink(e.to_string())
    }
}
