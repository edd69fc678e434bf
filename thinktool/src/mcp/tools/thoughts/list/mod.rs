//! Thought listing tool for MCP operations
//!
//! This module provides the ListThoughtsTool for listing every stored thought through the MCP protocol.

use crate::mcp::shared_utils::{McpErrorHandler, McpFormatter};
use crate::mcp::thought_types::ListThoughtsRequest;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Response text when the store is empty
pub const NO_THOUGHTS_MESSAGE: &str = "No thoughts found in memory.";

/// Tool for listing all thoughts
#[derive(Default)]
pub struct ListThoughtsTool;

impl ListThoughtsTool {
    /// Creates a new instance of the ListThoughtsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListThoughtsTool {
    fn name(&self) -> &'static str {
        "list-thoughts"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let _request: ListThoughtsRequest =
            BaseToolImpl::parse_and_validate(arguments, context, "list thoughts")?;

        let thoughts = McpErrorHandler::handle_result(
            context.thought_storage.get_all().await,
            "list thoughts",
        )?;
        tracing::debug!("Listing {} thoughts", thoughts.len());

        if thoughts.is_empty() {
            return Ok(BaseToolImpl::create_success_response(NO_THOUGHTS_MESSAGE));
        }

        let header = format!(
            "{}:",
            McpFormatter::format_list_summary("thought", thoughts.len())
        );
        Ok(BaseToolImpl::create_success_response(
            McpFormatter::format_thought_listing(&header, &thoughts),
        ))
    }
}
