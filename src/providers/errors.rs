use thiserror::Error;

/// Errors that can occur within a `DataProvider` implementation.
///
/// These never escape the fetch boundary of the pipeline: the orchestration
/// layer logs them and degrades to an empty series (soft failure).
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider's API returned a specific error message (e.g., unknown
    /// symbol, malformed range).
    #[error("API error: {0}")]
    Api(String),

    /// The request parameters were invalid for this specific provider.
    #[error("Invalid parameters for provider: {0}")]
    Validation(String),

    /// An internal error occurred while processing data within the provider.
    #[error("Internal provider error: {0}")]
    Internal(String),
}
