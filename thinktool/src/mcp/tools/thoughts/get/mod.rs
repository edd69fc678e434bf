//! Thought retrieval tool for MCP operations
//!
//! This module provides the GetThoughtTool for fetching one thought by its full ID.

use crate::mcp::shared_utils::{McpErrorHandler, McpFormatter};
use crate::mcp::thought_types::GetThoughtRequest;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for retrieving a thought by its ID
#[derive(Default)]
pub struct GetThoughtTool;

impl GetThoughtTool {
    /// Creates a new instance of the GetThoughtTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetThoughtTool {
    fn name(&self) -> &'static str {
        "get-thought"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "ID of the thought to retrieve"
                }
            },
            "required": ["id"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: GetThoughtRequest =
            BaseToolImpl::parse_and_validate(arguments, context, "get thought")?;

        let found = McpErrorHandler::handle_result(
            context.thought_storage.get_by_id(&request.id).await,
            "get thought",
        )?;

        match found {
            Some(thought) => Ok(BaseToolImpl::create_success_response(
                McpFormatter::format_thought_line(&thought),
            )),
            None => {
                tracing::debug!("No thought with ID {}", request.id);
                Ok(BaseToolImpl::create_error_response(
                    format!("No thought found with ID \"{}\".", request.id),
                ))
            }
        }
    }
}
