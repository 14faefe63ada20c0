use thiserror::Error;

#[derive(Debug, Error)]
pub enum AcquireError {
    /// Transport failure, or a body that did not decode as JSON.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}
