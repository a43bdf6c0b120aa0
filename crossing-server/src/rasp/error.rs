//! Schedule client error types.

/// Errors from the Yandex.Rasp HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum RaspError {
    /// API key missing from configuration. Raised before any network
    /// call so it is distinguishable from provider failures.
    #[error("schedule API key is not configured")]
    MissingApiKey,

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code. `body` is truncated to
    /// a bounded excerpt before it gets here.
    #[error("schedule API error {status}: {body}")]
    Api { status: u16, body: String },

    /// Failed to parse the response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}
