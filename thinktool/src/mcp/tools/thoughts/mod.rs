//! Thought tools for MCP operations
//!
//! Each tool lives in its own submodule with its implementation and a
//! `description.md` served to clients.
//!
//! ## Tool Categories
//!
//! ### Reasoning log
//! - **append**: Echo free-form text back and append it to the thought log
//!
//! ### Thought store
//! - **save**: Store a thought with optional tags
//! - **list**: Every stored thought, oldest first
//! - **search**: Case-insensitive substring match on content and tags
//! - **filter_by_tag**: Exact tag match
//! - **get**: One thought by ID
//! - **delete**: Remove a thought by ID
//!
//! The log and the store are independent: append never writes to the store
//! and no store tool reads the log.

pub mod append;
pub mod delete;
pub mod filter_by_tag;
pub mod get;
pub mod list;
pub mod search;
pub mod save;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all thought tools with the registry
pub fn register_thought_tools(registry: &mut ToolRegistry) {
    registry.register(append::AppendThoughtTool::new());
    registry.register(save::SaveThoughtTool::new());
    registry.register(list::ListThoughtsTool::new());
    registry.register(search::SearchThoughtsTool::new());
    registry.register(filter_by_tag::FilterByTagTool::new());
    registry.register(get::GetThoughtTool::new());
    registry.register(delete::DeleteThoughtTool::new());
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::mcp::tool_registry::ToolContext;
    use crate::thoughts::{InMemoryThoughtStorage, ThoughtLog};
    use crate::Config;
    use rmcp::model::{CallToolResult, RawContent};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    pub fn create_test_context() -> ToolContext {
        ToolContext::new(
            Arc::new(InMemoryThoughtStorage::new()),
            Arc::new(RwLock::new(ThoughtLog::new())),
            Arc::new(Config::default()),
        )
    }

    pub fn arguments(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected a JSON object, got {other}"),
        }
    }

    pub fn response_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text_content) => &text_content.text,
            _ => panic!("Expected text content"),
        }
    }
}
