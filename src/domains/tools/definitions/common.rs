//! Common utilities shared across tools.

use rmcp::model::{CallToolResult, Content};

/// Create a success result with text content.
///
/// The publish tool funnels failures through this as well: its contract is a
/// single string result channel, so the caller always receives plain text and
/// distinguishes outcomes by parsing it.
pub fn text_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Extract the first text block from a tool result (test support).
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> String {
    let value = serde_json::to_value(result).expect("tool result serializes");
    value["content"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_result_is_success() {
        let result = text_result("ok".to_string());
        assert!(!result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_result_text_round_trip() {
        let result = text_result("hello".to_string());
        assert_eq!(result_text(&result), "hello");
    }
}
