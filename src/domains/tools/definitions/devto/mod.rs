//! dev.to tool definitions.
//!
//! - `publish.rs` - the `publish_blog_to_devto` tool
//! - `article.rs` - outbound payload construction
//! - `client.rs` - the HTTP client and outcome classification

pub mod article;
pub mod client;
pub mod publish;

pub use article::ArticleRequest;
pub use client::{DevtoClient, PublishedArticle};
pub use publish::{PublishBlogParams, PublishBlogTool};
