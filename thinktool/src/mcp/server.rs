//! MCP server handler for the thought tools

use super::tool_registry::{ToolContext, ToolRegistry};
use super::tools::thoughts::register_thought_tools;
use crate::thoughts::{InMemoryThoughtStorage, ThoughtLog, ThoughtStorage};
use crate::Config;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Name the server reports to MCP clients
pub const SERVER_NAME: &str = "thinktool";

const INSTRUCTIONS: &str = "A scratchpad for structured reasoning. Use append-thought to think \
out loud without changing anything. Use save-thought to keep a tagged thought for later, then \
list-thoughts, search-thoughts, filter-by-tag, get-thought and delete-thought to work with the \
saved thoughts. Saved thoughts live in memory and are lost when the server stops.";

/// MCP server exposing the thought log and the thought store as tools
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<ToolRegistry>,
    tool_context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a server backed by a fresh in-memory store and an empty log.
    pub fn new(config: Config) -> Self {
        Self::with_storage(Arc::new(InMemoryThoughtStorage::new()), config)
    }

    /// Create a server over an existing store.
    ///
    /// The thought log always starts empty.
    pub fn with_storage(thought_storage: Arc<dyn ThoughtStorage>, config: Config) -> Self {
        let mut tool_registry = ToolRegistry::new();
        register_thought_tools(&mut tool_registry);

        let tool_context = ToolContext::new(
            thought_storage,
            Arc::new(RwLock::new(ThoughtLog::new())),
            Arc::new(config),
        );

        tracing::debug!("Registered {} MCP tools", tool_registry.len());

        Self {
            tool_registry: Arc::new(tool_registry),
            tool_context: Arc::new(tool_context),
        }
    }

    /// Tool definitions advertised to clients, sorted by name
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_registry.list_tools()
    }

    /// The context shared with every tool call
    pub fn tool_context(&self) -> &ToolContext {
        &self.tool_context
    }

    /// Dispatch a tool call by name.
    ///
    /// Unknown names are rejected with `invalid_request` before any state is touched.
    pub async fn execute_tool(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<CallToolResult, McpError> {
        match self.tool_registry.get_tool(name) {
            Some(tool) => {
                tracing::debug!("Calling tool {}", name);
                tool.execute(arguments, &self.tool_context).await
            }
            None => {
                tracing::warn!("Unknown tool requested: {}", name);
                Err(McpError::invalid_request(
                    format!("Unknown tool: {name}"),
                    None,
                ))
            }
        }
    }
}

impl ServerHandler for McpServer {
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.execute_tool(&request.name, request.arguments.unwrap_or_default())
            .await
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                prompts: None,
                resources: None,
                logging: None,
                completions: None,
                experimental: None,
            },
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(INSTRUCTIONS.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info() {
        let server = McpServer::new(Config::default());
        let info = server.get_info();

        assert_eq!(info.server_info.name, "thinktool");
        assert_eq!(info.server_info.version, crate::VERSION);
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_none());
        assert!(info.capabilities.resources.is_none());
        assert!(info.instructions.is_some());
    }

    #[test]
    fn test_server_advertises_all_tools() {
        let server = McpServer::new(Config::default());
        let names: Vec<String> = server.tools().iter().map(|t| t.name.to_string()).collect();

        assert_eq!(
            names,
            vec![
                "append-thought",
                "delete-thought",
                "filter-by-tag",
                "get-thought",
                "list-thoughts",
                "save-thought",
                "search-thoughts",
            ]
        );
        for tool in server.tools() {
            assert!(tool.description.is_some());
            assert_eq!(tool.input_schema.get("type"), Some(&serde_json::json!("object")));
        }
    }

    #[tokio::test]
    async fn test_unknown_tool_is_invalid_request() {
        let server = McpServer::new(Config::default());

        let error = server
            .execute_tool("remember-everything", serde_json::Map::new())
            .await
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::INVALID_REQUEST);
        assert!(error.message.contains("Unknown tool: remember-everything"));
    }

    #[tokio::test]
    async fn test_servers_share_storage_when_cloned() {
        let server = McpServer::new(Config::default());
        let clone = server.clone();

        let mut arguments = serde_json::Map::new();
        arguments.insert("content".into(), serde_json::json!("shared"));
        clone.execute_tool("save-thought", arguments).await.unwrap();

        let stored = server.tool_context().thought_storage.get_all().await.unwrap();
        assert_eq!(stored.len(), 1);
    }
}
