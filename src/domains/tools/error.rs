//! Publish error taxonomy.
//!
//! Every way a publish invocation can fail maps to exactly one variant here,
//! and each variant's `Display` string is the text returned to the caller.
//! The tool boundary renders these; nothing propagates past it as a protocol
//! fault.

use thiserror::Error;

use crate::core::config::DEVTO_API_KEY_ENV;

/// Errors that can occur while publishing an article to dev.to.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The API key is missing from the configuration. No network call is
    /// attempted in this case.
    #[error(
        "Error: {0} environment variable is not set. Please set it to publish articles."
    )]
    MissingApiKey(&'static str),

    /// dev.to rejected the request with a non-201 status.
    #[error("Failed to publish article. Status code: {status}, Error: {message}")]
    Api { status: u16, message: String },

    /// Network-level failure: connection refused, timeout, DNS failure, or a
    /// malformed response body.
    #[error("An error occurred during the API request: {0}")]
    Transport(#[from] reqwest::Error),

    /// Catch-all for failures outside the request/response path.
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl PublishError {
    /// Create the missing-credential error for the configured key variable.
    pub fn missing_api_key() -> Self {
        Self::MissingApiKey(DEVTO_API_KEY_ENV)
    }

    /// Create an API rejection error from a status code and message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an unexpected error.
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }
}
