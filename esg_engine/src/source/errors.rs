use reqwest::header::InvalidHeaderValue;
use shared_utils::env::MissingEnvVarError;
use thiserror::Error;

/// Errors that can occur while querying a data source.
///
/// Distinct from "no rows found", which reads report through `Option`/empty
/// collections.
#[derive(Debug, Error)]
pub enum SourceError {
    /// An error during the query request (e.g., network failure, timeout).
    #[error("source request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The source returned a specific error response (e.g., bad credentials).
    #[error("source API error: {0}")]
    Api(String),
}

/// Errors raised while constructing a source client.
#[derive(Debug, Error)]
pub enum SourceInitError {
    /// A required credential environment variable is not set.
    #[error(transparent)]
    MissingEnvVar(#[from] MissingEnvVarError),

    /// The API key cannot be carried in an HTTP header.
    #[error("invalid API key header: {0}")]
    Header(#[from] InvalidHeaderValue),

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
