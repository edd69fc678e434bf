//! Thought search tool for MCP operations
//!
//! This module provides the SearchThoughtsTool for case-insensitive substring
//! search over thought content and tags.

use crate::mcp::shared_utils::{McpErrorHandler, McpFormatter};
use crate::mcp::thought_types::SearchThoughtsRequest;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for searching thoughts
#[derive(Default)]
pub struct SearchThoughtsTool;

impl SearchThoughtsTool {
    /// Creates a new instance of the SearchThoughtsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for SearchThoughtsTool {
    fn name(&self) -> &'static str {
        "search-thoughts"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Text to match against thought content and tags, ignoring case",
                    "minLength": 1
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: SearchThoughtsRequest =
            BaseToolImpl::parse_and_validate(arguments, context, "search thoughts")?;

        let thoughts = McpErrorHandler::handle_result(
            context.thought_storage.search(&request.query).await,
            "search thoughts",
        )?;
        tracing::debug!(
            "Search for '{}' matched {} thoughts",
            request.query,
            thoughts.len()
        );

        if thoughts.is_empty() {
            return Ok(BaseToolImpl::create_success_response(format!(
                "No thoughts found matching \"{}\".",
                request.query
            )));
        }

        let header = format!(
            "{} matching \"{}\":",
            McpFormatter::format_list_summary("thought", thoughts.len()),
            request.query
        );
        Ok(BaseToolImpl::create_success_response(
            McpFormatter::format_thought_listing(&header, &thoughts),
        ))
    }
}
