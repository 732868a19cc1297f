// src/error.rs
//! Error taxonomy for the API layer.
//!
//! Transport and Status collapse into one retryable "failed to load" message
//! at the rendering layer; NotFound gets its own view.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never completed: DNS, connect, timeout, broken body.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server reached but answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The requested record does not exist (HTTP 404).
    #[error("not found")]
    NotFound,

    /// 2xx response whose envelope reported `success: false`.
    #[error("{0}")]
    Api(String),
}

impl ApiError {
    /// Whether the generic "failed to load, try again" view applies.
    /// NotFound is the one variant with a dedicated view.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ApiError::NotFound)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// A field-scoped validation failure. Raised before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
