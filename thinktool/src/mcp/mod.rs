//! Model Context Protocol (MCP) server support
//!
//! This module exposes the thought store and the thought log as MCP tools
//! served over any `rmcp` transport (stdio in the CLI).

pub mod server;
pub mod shared_utils;
pub mod thought_types;
pub mod tool_registry;
pub mod tools;


// Re-export commonly used items from submodules
pub use server::McpServer;
pub use tool_registry::{register_thought_tools, McpTool, ToolContext, ToolRegistry};
