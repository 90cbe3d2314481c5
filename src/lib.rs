//! dev.to Blog Publisher MCP Server
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! blog-publishing tools for dev.to, organized by domains.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, the main server,
//!   and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools that can be executed by clients
//!   - **prompts**: Prompt templates for consistent interactions
//!
//! # Example
//!
//! ```rust,no_run
//! use devto_mcp_server::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, McpServer};
