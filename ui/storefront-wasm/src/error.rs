//! Error type shared by the API client, storage and handlers.
//!
//! Nothing escapes an event handler: every variant ends up as a toast or a
//! log line at the handler boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("request failed with status {status}")]
    Status { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("add-to-cart button carries no product or variant id")]
    MissingProductId,
}

impl From<gloo_net::Error> for StorefrontError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => StorefrontError::Decode(e.to_string()),
            other => StorefrontError::Network(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
