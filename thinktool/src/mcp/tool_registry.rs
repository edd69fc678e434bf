//! Tool registry for MCP operations
//!
//! Tools are looked up by name at call time instead of being matched in the
//! server handler, so adding a tool only means registering it here.

use super::shared_utils::McpErrorHandler;
use super::thought_types::ValidateRequest;
use crate::thoughts::{ThoughtLog, ThoughtStorage};
use crate::Config;
use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent, Tool};
use rmcp::Error as McpError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Context shared by all tools during execution
#[derive(Clone)]
pub struct ToolContext {
    /// The thought store backing save, list, search, filter, get and delete
    pub thought_storage: Arc<dyn ThoughtStorage>,
    /// The append-only log written by append-thought
    pub thought_log: Arc<RwLock<ThoughtLog>>,
    /// Input limits
    pub config: Arc<Config>,
}

impl ToolContext {
    /// Create a new tool context
    pub fn new(
        thought_storage: Arc<dyn ThoughtStorage>,
        thought_log: Arc<RwLock<ThoughtLog>>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            thought_storage,
            thought_log,
            config,
        }
    }
}

/// Trait defining the interface for all MCP tools
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Get the tool's name
    fn name(&self) -> &'static str;

    /// Get the tool's description
    fn description(&self) -> &'static str;

    /// Get the tool's JSON schema for arguments
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments and context
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Registry for managing MCP tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool in the registry
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Box::new(tool));
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// Get all registered tools as Tool objects for MCP list_tools response, sorted by name
    pub fn list_tools(&self) -> Vec<Tool> {
        let mut tools: Vec<Tool> = self
            .tools
            .values()
            .map(|tool| {
                let schema_map = match tool.schema() {
                    serde_json::Value::Object(map) => map,
                    _ => serde_json::Map::new(),
                };

                Tool {
                    name: tool.name().into(),
                    description: Some(tool.description().into()),
                    input_schema: Arc::new(schema_map),
                    annotations: None,
                }
            })
            .collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Base implementation providing common utility methods for MCP tools
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed struct
    ///
    /// Missing fields and wrong types are reported as `invalid_params`.
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<T, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {e}"), None))
    }

    /// Parse tool arguments and run the request's validation
    ///
    /// Nothing has touched tool state when this returns an error.
    pub fn parse_and_validate<T>(
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
        operation: &str,
    ) -> std::result::Result<T, McpError>
    where
        T: serde::de::DeserializeOwned + ValidateRequest,
    {
        let request: T = Self::parse_arguments(arguments)?;
        McpErrorHandler::handle_result(request.validate(&context.config), operation)?;
        Ok(request)
    }

    /// Create a success response with text content
    pub fn create_success_response<T: Into<String>>(content: T) -> CallToolResult {
        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent {
                    text: content.into(),
                }),
                None,
            )],
            is_error: Some(false),
        }
    }

    /// Create a response that completed normally but reports a failed outcome
    pub fn create_error_response<T: Into<String>>(error: T) -> CallToolResult {
        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent { text: error.into() }),
                None,
            )],
            is_error: Some(true),
        }
    }
}

/// Register every thought tool with the registry
pub fn register_thought_tools(registry: &mut ToolRegistry) {
    crate::mcp::tools::thoughts::register_thought_tools(registry);
}
