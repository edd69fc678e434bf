//! # Thinktool
//!
//! An in-memory thought store exposed to AI assistants as Model Context
//! Protocol tools.
//!
//! ## Features
//!
//! - **Thought Store**: Save short notes with tags, then list, filter, search and delete them
//! - **Thought Log**: Append free-form reasoning text without touching the store
//! - **MCP Support**: Tool registry and `rmcp` server handler for stdio transports
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use thinktool::thoughts::{InMemoryThoughtStorage, ThoughtStorage};
//!
//! # async fn example() -> thinktool::Result<()> {
//! let storage = InMemoryThoughtStorage::new();
//! let thought = storage
//!     .add("Cache the parsed config".to_string(), vec!["perf".to_string()])
//!     .await?;
//!
//! let found = storage.search("CONFIG").await?;
//! assert_eq!(found[0].id, thought.id);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Thought records, the in-memory store and the append-only thought log
pub mod thoughts;

/// Model Context Protocol (MCP) server support
pub mod mcp;

/// Environment-driven configuration
pub mod config;

/// Shared utilities
pub mod common;

/// Error types used throughout the library
pub mod error;

pub use config::Config;
pub use error::{Result, ThinkToolError};
pub use thoughts::{InMemoryThoughtStorage, Thought, ThoughtId, ThoughtLog, ThoughtStorage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::mcp::McpServer;
    pub use crate::thoughts::{
        InMemoryThoughtStorage, LoggedThought, Thought, ThoughtId, ThoughtLog, ThoughtStorage,
    };
    pub use crate::{Config, Result, ThinkToolError};
}
