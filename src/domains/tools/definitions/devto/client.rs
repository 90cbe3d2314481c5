//! dev.to HTTP client.
//!
//! One synchronous POST per publish call, no retries, no shared state. The
//! credential travels in the `api-key` header only, never in the body or URL.
//! Every outcome of the call classifies into `Result<PublishedArticle,
//! PublishError>`; rendering that into the caller-visible string happens at
//! the tool boundary in `publish.rs`.

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use tracing::debug;

use crate::core::config::DevtoConfig;
use crate::domains::tools::PublishError;

use super::article::ArticleRequest;
use super::publish::PublishBlogParams;

/// A successfully created article.
///
/// dev.to responds with 201 and a JSON body that normally carries the new
/// article's `url`; a 201 without one is still a success.
#[derive(Debug, Clone)]
pub struct PublishedArticle {
    pub url: Option<String>,
}

/// Client for the dev.to article-creation endpoint.
pub struct DevtoClient<'a> {
    config: &'a DevtoConfig,
}

impl<'a> DevtoClient<'a> {
    pub fn new(config: &'a DevtoConfig) -> Self {
        Self { config }
    }

    /// Publish an article.
    ///
    /// Resolves the credential first: without one, no network call is made.
    /// Blocks until the response arrives or the transport fails; timeouts are
    /// whatever reqwest defaults to.
    pub fn publish(
        &self,
        params: &PublishBlogParams,
    ) -> Result<PublishedArticle, PublishError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(PublishError::missing_api_key)?;

        let api_key = HeaderValue::from_str(api_key).map_err(|_| {
            PublishError::unexpected("API key contains characters that cannot be sent in a header")
        })?;

        let payload = ArticleRequest::new(params);

        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| PublishError::unexpected(e.to_string()))?;

        debug!("POST {}", self.config.api_url);
        let response = http
            .post(&self.config.api_url)
            .header(CONTENT_TYPE, "application/json")
            .header("api-key", api_key)
            .json(&payload)
            .send()?;

        let status = response.status();
        // A body that fails to parse as JSON classifies as a transport failure.
        let body: serde_json::Value = response.json()?;

        if status == StatusCode::CREATED {
            let url = body
                .get("url")
                .and_then(|v| v.as_str())
                .map(String::from);
            Ok(PublishedArticle { url })
        } else {
            let message = body
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            Err(PublishError::api(status.as_u16(), message))
        }
    }
}
