//! Addition demonstration tool.
//!
//! Pure and deterministic; useful as a connectivity check for clients.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::debug;

use super::super::common::text_result;

/// Parameters for the add tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddNumbersParams {
    /// First addend.
    #[schemars(description = "The first number")]
    pub a: i64,

    /// Second addend.
    #[schemars(description = "The second number")]
    pub b: i64,
}

/// Addition tool implementation.
#[derive(Debug, Clone)]
pub struct AddNumbersTool;

impl AddNumbersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add_numbers";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add two numbers and return their sum.";

    /// Sum of two integers. Native i64 arithmetic, no wider overflow policy.
    pub fn add(a: i64, b: i64) -> i64 {
        a + b
    }

    /// Execute the tool logic.
    pub fn execute(params: &AddNumbersParams) -> CallToolResult {
        let sum = Self::add(params.a, params.b);
        debug!("add_numbers: {} + {} = {}", params.a, params.b, sum);
        text_result(sum.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AddNumbersParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: AddNumbersParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;

    #[test]
    fn test_add() {
        assert_eq!(AddNumbersTool::add(2, 3), 5);
        assert_eq!(AddNumbersTool::add(-1, 1), 0);
        assert_eq!(AddNumbersTool::add(0, 0), 0);
    }

    #[test]
    fn test_execute_returns_sum_as_text() {
        let result = AddNumbersTool::execute(&AddNumbersParams { a: 2, b: 3 });
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "5");
    }

    #[test]
    fn test_params_deserialization() {
        let params: AddNumbersParams = serde_json::from_str(r#"{"a": -7, "b": 7}"#).unwrap();
        assert_eq!(params.a, -7);
        assert_eq!(params.b, 7);
    }
}
