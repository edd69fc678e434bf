//! Thought deletion tool for MCP operations
//!
//! This module provides the DeleteThoughtTool for deleting thoughts by their ID through the MCP protocol.

use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::thought_types::DeleteThoughtRequest;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for deleting a thought by its ID
#[derive(Default)]
pub struct DeleteThoughtTool;

impl DeleteThoughtTool {
    /// Creates a new instance of the DeleteThoughtTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DeleteThoughtTool {
    fn name(&self) -> &'static str {
        "delete-thought"
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
                    "description": "ID of the thought to delete"
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
        let request: DeleteThoughtRequest =
            BaseToolImpl::parse_and_validate(arguments, context, "delete thought")?;

        tracing::debug!("Deleting thought with ID: {}", request.id);

        let removed = McpErrorHandler::handle_result(
            context.thought_storage.delete(&request.id).await,
            "delete thought",
        )?;

        if removed {
            tracing::info!("Deleted thought {}", request.id);
            Ok(BaseToolImpl::create_success_response(format!(
                "Thought with ID \"{}\" was deleted.",
                request.id
            )))
        } else {
            tracing::debug!("No thought to delete with ID {}", request.id);
            Ok(BaseToolImpl::create_error_response(
                format!("No thought found with ID \"{}\".", request.id),
            ))
        }
    }
}
