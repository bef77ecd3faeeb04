//! MBTA client error types.

/// Errors from talking to the MBTA API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a status we don't handle
    #[error("unexpected API response: {status}")]
    UnexpectedStatus { status: u16 },

    /// Still rate limited after the retry budget ran out
    #[error("rate limited by MBTA API after {attempts} attempts")]
    RateLimited { attempts: u32 },

    /// Response body was not a JSON:API document of the expected shape
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// The request URL could not be built
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}
