use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeniusError {
    /// Transport failure, unreadable body, or non-2xx status.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Body did not match the expected JSON shape.
    #[error("response processing failed: {0}")]
    Response(#[from] serde_json::Error),
}
