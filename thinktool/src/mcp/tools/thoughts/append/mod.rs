//! Thought append tool for MCP operations
//!
//! This module provides the AppendThoughtTool, which lets a client externalize
//! its reasoning. The text is appended to the thought log and echoed back; the
//! thought store is never touched.

use crate::mcp::thought_types::AppendThoughtRequest;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Tool for appending a thought to the reasoning log
#[derive(Default)]
pub struct AppendThoughtTool;

impl AppendThoughtTool {
    /// Creates a new instance of the AppendThoughtTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AppendThoughtTool {
    fn name(&self) -> &'static str {
        "append-thought"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "thought": {
                    "type": "string",
                    "description": "A thought to think about.",
                    "minLength": 1
                }
            },
            "required": ["thought"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: AppendThoughtRequest =
            BaseToolImpl::parse_and_validate(arguments, context, "append thought")?;

        let mut log = context.thought_log.write().await;
        log.append(request.thought.clone());
        tracing::debug!("Appended thought to log ({} entries)", log.len());

        Ok(BaseToolImpl::create_success_response(request.thought))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::tools::thoughts::test_support::{arguments, create_test_context, response_text};
    use serde_json::json;

    #[test]
    fn test_append_thought_tool_schema() {
        let tool = AppendThoughtTool::new();
        let schema = tool.schema();

        assert_eq!(tool.name(), "append-thought");
        assert!(tool.description().contains("append the thought to the log"));
        assert_eq!(schema["required"], json!(["thought"]));
    }

    #[tokio::test]
    async fn test_append_echoes_text_unchanged() {
        let tool = AppendThoughtTool::new();
        let context = create_test_context();
        let text = "  Step 1: check the cache\nStep 2: profit  ";

        let result = tool
            .execute(arguments(json!({ "thought": text })), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        assert_eq!(response_text(&result), text);
    }

    #[tokio::test]
    async fn test_append_grows_log_but_not_store() {
        let tool = AppendThoughtTool::new();
        let context = create_test_context();

        for text in ["first", "second"] {
            tool.execute(arguments(json!({ "thought": text })), &context)
                .await
                .unwrap();
        }

        let log = context.thought_log.read().await;
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[1].text, "second");
        assert!(context.thought_storage.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_rejects_missing_or_empty_thought() {
        let tool = AppendThoughtTool::new();
        let context = create_test_context();

        assert!(tool.execute(arguments(json!({})), &context).await.is_err());
        assert!(tool
            .execute(arguments(json!({ "thought": "" })), &context)
            .await
            .is_err());
        assert!(tool
            .execute(arguments(json!({ "thought": 42 })), &context)
            .await
            .is_err());
        assert!(context.thought_log.read().await.is_empty());
    }
}
