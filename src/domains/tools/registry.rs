//! Tool Registry - central record of all available tools.
//!
//! The single source of truth for tool names and metadata; router tests
//! check themselves against it so a tool cannot be registered in one place
//! and forgotten in the other.

use rmcp::model::Tool;

use super::definitions::{AddNumbersTool, PublishBlogTool};

/// Tool registry - lists all available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![AddNumbersTool::NAME, PublishBlogTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![AddNumbersTool::to_tool(), PublishBlogTool::to_tool()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"add_numbers"));
        assert!(names.contains(&"publish_blog_to_devto"));
    }

    #[test]
    fn test_all_tools_have_descriptions_and_schemas() {
        for tool in ToolRegistry::get_all_tools() {
            assert!(tool.description.is_some());
            assert!(!tool.input_schema.is_empty());
        }
    }
}
