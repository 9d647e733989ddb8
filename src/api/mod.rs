//! Backend API
//!
//! HTTP bindings to the operator's REST endpoints.

mod resources;

use thiserror::Error;

pub use resources::*;

/// Failure talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status} {text}")]
    Status { status: u16, text: String },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
