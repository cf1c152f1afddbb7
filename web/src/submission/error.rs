use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed response from {url}: {reason}")]
    Malformed { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, TransportError>;
