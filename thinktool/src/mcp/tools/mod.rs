//! MCP tool implementations, grouped by the state they operate on

pub mod thoughts;
