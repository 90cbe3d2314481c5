//! Outbound article payload construction.
//!
//! dev.to expects a nested `{"article": {...}}` object. The mandatory fields
//! (`title`, `body_markdown`, `published`) are always present; the optional
//! fields are inserted only when the caller supplied a non-empty value.
//! Omitted fields are left out of the JSON entirely, never sent as `null`.

use serde::Serialize;

use super::publish::PublishBlogParams;

/// The request body sent to the article-creation endpoint.
#[derive(Debug, Serialize)]
pub struct ArticleRequest {
    article: ArticlePayload,
}

#[derive(Debug, Serialize)]
struct ArticlePayload {
    title: String,
    body_markdown: String,
    published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    series: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    canonical_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cover_image: Option<String>,
}

/// An empty string counts as "not supplied", same as an absent field.
fn supplied(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_owned)
}

impl ArticleRequest {
    /// Build the payload from tool parameters.
    pub fn new(params: &PublishBlogParams) -> Self {
        let tags = if params.tags.is_empty() {
            None
        } else {
            Some(params.tags.clone())
        };

        Self {
            article: ArticlePayload {
                title: params.title.clone(),
                body_markdown: params.body_markdown.clone(),
                published: params.published,
                tags,
                series: supplied(params.series.as_deref()),
                canonical_url: supplied(params.canonical_url.as_deref()),
                cover_image: supplied(params.cover_image.as_deref()),
            },
        }
    }
}
