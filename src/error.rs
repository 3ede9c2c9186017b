// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types shared by the gateway, fetchers, and session.

use reqwest::StatusCode;

/// Client error type returned by every backend call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("No active session")]
    NotAuthenticated,

    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("JSON parse error: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ClientError {
    /// True when the backend rejected the bearer token.
    ///
    /// Used by the session to decide whether a refresh is worth trying.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
            || matches!(self, ClientError::Http { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errs: validator::ValidationErrors) -> Self {
        ClientError::Validation(errs.to_string())
    }
}

/// User-facing message for a screen whose fetch failed.
///
/// Every screen collapses errors into the same fixed sentence.
pub fn load_failure_message(resource: &str) -> String {
    format!("Failed to load {}", resource)
}

/// Result type alias for client calls
pub type Result<T> = std::result::Result<T, ClientError>;
