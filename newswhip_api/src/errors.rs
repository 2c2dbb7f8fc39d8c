//! Error types for the API client.

/// Errors that can occur when building or sending API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client was constructed or reconfigured with invalid settings.
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    /// Caller input was rejected before any request was sent.
    #[error("Invalid input: {0}")]
    Validation(String),
    /// A request used a method other than GET or POST.
    #[error("{0} is not a supported method")]
    UnsupportedMethod(String),
    /// The API answered with a non-200 status.
    #[error("Request failed with status {status}: {reason}")]
    Api { status: u16, reason: String },
    /// The response body was not valid JSON.
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// The HTTP request itself failed (connect, timeout, body read).
    #[error("Network error")]
    Network(#[from] reqwest::Error),
}
