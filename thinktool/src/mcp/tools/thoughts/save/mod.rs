//! Thought save tool for MCP operations
//!
//! This module provides the SaveThoughtTool for storing tagged thoughts through the MCP protocol.

use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::thought_types::SaveThoughtRequest;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for saving a new thought
#[derive(Default)]
pub struct SaveThoughtTool;

impl SaveThoughtTool {
    /// Creates a new instance of the SaveThoughtTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SaveThoughtTool {
    fn name(&self) -> &'static str {
        "save-thought"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "content": {
                    "type": "string",
                    "description": "Body of the thought",
                    "minLength": 1
                },
                "tags": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Optional tags for filtering",
                    "default": []
                }
            },
            "required": ["content"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: SaveThoughtRequest =
            BaseToolImpl::parse_and_validate(arguments, context, "save thought")?;

        let thought = McpErrorHandler::handle_result(
            context
                .thought_storage
                .add(request.content, request.tags)
                .await,
            "save thought",
        )?;

        tracing::info!("Saved thought {}", thought.id);
        Ok(BaseToolImpl::create_success_response(format!(
            "Thought saved with ID: {}",
            thought.id
        )))
    }
}
