//! Tag filter tool for MCP operations

use crate::mcp::shared_utils::{McpErrorHandler, McpFormatter};
use crate::mcp::thought_types::FilterByTagRequest;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for listing thoughts that carry an exact tag
#[derive(Default)]
pub struct FilterByTagTool;

impl FilterByTagTool {
    /// Creates a new instance of the FilterByTagTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for FilterByTagTool {
    fn name(&self) -> &'static str {
        "filter-by-tag"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "tag": {
                    "type": "string",
                    "description": "Tag to filter by (exact, case-sensitive)",
                    "minLength": 1
                }
            },
            "required": ["tag"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: FilterByTagRequest =
            BaseToolImpl::parse_and_validate(arguments, context, "filter by tag")?;

        let thoughts = McpErrorHandler::handle_result(
            context.thought_storage.get_by_tag(&request.tag).await,
            "filter by tag",
        )?;

        if thoughts.is_empty() {
            return Ok(BaseToolImpl::create_success_response(format!(
                "No thoughts found with tag \"{}\".",
                request.tag
            )));
        }

        let header = format!(
            "{} with tag \"{}\":",
            McpFormatter::format_list_summary("thought", thoughts.len()),
            request.tag
        );
        Ok(BaseToolImpl::create_success_response(
            McpFormatter::format_thought_listing(&header, &thoughts),
        ))
    }
}
