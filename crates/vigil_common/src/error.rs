//! Error types for Vigil.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VigilError {
    #[error("missing required field: {0}")]
    Validation(String),

    #[error("upstream request failed: {0}")]
    Upstream(String),

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VigilError {
    /// HTTP status the error maps to at the API boundary.
    pub fn http_status(&self) -> u16 {
        match self {
            VigilError::Validation(_) => 400,
            VigilError::Upstream(_) => 502,
            VigilError::MalformedPayload(_) => 422,
            VigilError::Io(_) | VigilError::Json(_) => 500,
        }
    }
}
