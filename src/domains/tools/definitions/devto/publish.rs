//! dev.to article publishing tool.
//!
//! Accepts typed article parameters, performs one outbound API call, and
//! returns a human-readable status string for every outcome. The caller
//! always receives a successful tool result whose text distinguishes
//! success from failure; no publish failure surfaces as a protocol error.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::core::config::Config;

use super::super::common::text_result;
use super::client::DevtoClient;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for publishing a blog post.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PublishBlogParams {
    /// The title of the blog post.
    #[schemars(description = "The title of the blog post")]
    pub title: String,

    /// The content of the blog post in Markdown format.
    #[schemars(description = "The content of the blog post in Markdown format")]
    pub body_markdown: String,

    /// Tags for the blog post.
    #[serde(default)]
    #[schemars(description = "A list of tags for the blog post (e.g., [\"rust\", \"webdev\"])")]
    pub tags: Vec<String>,

    /// Whether to publish immediately or save as a draft.
    #[serde(default)]
    #[schemars(description = "Set to true to publish immediately, false to save as a draft")]
    pub published: bool,

    /// Series the article belongs to.
    #[serde(default)]
    #[schemars(description = "The name of the series this article belongs to")]
    pub series: Option<String>,

    /// Canonical URL for cross-posted articles.
    #[serde(default)]
    #[schemars(description = "The canonical URL of the article if it's cross-posted")]
    pub canonical_url: Option<String>,

    /// Cover image URL.
    #[serde(default)]
    #[schemars(description = "URL of the cover image for the article")]
    pub cover_image: Option<String>,
}

// ============================================================================
// Tool Implementation
// ============================================================================

/// dev.to publish tool implementation.
#[derive(Debug, Clone)]
pub struct PublishBlogTool;

impl PublishBlogTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "publish_blog_to_devto";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Publish a blog post to dev.to. Saves a draft unless \
         published=true. Optional tags, series, canonical_url, and cover_image are sent only \
         when supplied with non-empty values. Returns a status message with the article URL \
         on success or a description of the failure.";

    /// Execute the tool logic.
    ///
    /// This is the single place where every publish outcome, success or any
    /// of the failure variants, is rendered into the string result channel.
    pub fn execute(params: &PublishBlogParams, config: &Config) -> CallToolResult {
        info!("Attempting to publish blog post '{}' to dev.to", params.title);

        let message = match DevtoClient::new(&config.devto).publish(params) {
            Ok(article) => {
                let url = article.url.as_deref().unwrap_or("unknown");
                info!("Article '{}' published successfully! URL: {}", params.title, url);
                format!("Article published successfully! URL: {}", url)
            }
            Err(e) => {
                error!("Failed to publish article '{}': {}", params.title, e);
                e.to_string()
            }
        };

        text_result(message)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PublishBlogParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: PublishBlogParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                // reqwest::blocking creates its own runtime; run the call on a
                // dedicated thread to avoid a nested-runtime panic.
                let handle = std::thread::spawn(move || Self::execute(&params, &config));

                let result = handle
                    .join()
                    .map_err(|_| McpError::internal_error("Thread panicked".to_string(), None))?;

                Ok(result)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
