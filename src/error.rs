use thiserror::Error;

/// Errors that can occur while talking to the recipe service
#[derive(Error, Debug)]
pub enum MealError {
    /// Request could not be sent or the body could not be read
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    StatusError { url: String, status: u16 },

    /// Response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Base URL could not be joined with an endpoint
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
