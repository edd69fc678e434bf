//! Request types for thought MCP operations
//!
//! Each request is deserialized from the tool arguments and then checked by
//! [`ValidateRequest::validate`] before the tool touches any state.

use super::shared_utils::McpValidation;
use crate::{Config, Result};
use serde::{Deserialize, Serialize};

/// Validation run on a deserialized request before its handler executes
pub trait ValidateRequest {
    /// Check field-level constraints, using `config` for size limits
    fn validate(&self, config: &Config) -> Result<()>;
}

/// Request to append raw reasoning text to the thought log
///
/// # Examples
///
/// ```ignore
/// AppendThoughtRequest {
///     thought: "The retry loop never resets its backoff".to_string(),
/// }
/// ```
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct AppendThoughtRequest {
    /// A thought to think about
    pub thought: String,
}

impl ValidateRequest for AppendThoughtRequest {
    fn validate(&self, config: &Config) -> Result<()> {
        McpValidation::validate_not_empty(&self.thought, "thought")?;
        McpValidation::validate_string_length(&self.thought, "thought", config.max_content_length)
    }
}

/// Request to save a thought in the store
///
/// # Examples
///
/// ```ignore
/// SaveThoughtRequest {
///     content: "Benchmark the parser before optimizing".to_string(),
///     tags: vec!["perf".to_string(), "parser".to_string()],
/// }
/// ```
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct SaveThoughtRequest {
    /// Body of the thought
    pub content: String,
    /// Optional tags, kept in the given order
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ValidateRequest for SaveThoughtRequest {
    fn validate(&self, config: &Config) -> Result<()> {
        McpValidation::validate_not_empty(&self.content, "content")?;
        McpValidation::validate_string_length(&self.content, "content", config.max_content_length)?;
        McpValidation::validate_tags(&self.tags, config.max_tags, config.max_tag_length)
    }
}

/// Request to list every stored thought
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct ListThoughtsRequest {
    // No parameters needed for listing all thoughts
}

impl ValidateRequest for ListThoughtsRequest {
    fn validate(&self, _config: &Config) -> Result<()> {
        Ok(())
    }
}

/// Request to search thoughts by substring
///
/// # Examples
///
/// ```ignore
/// SearchThoughtsRequest {
///     query: "parser".to_string(),
/// }
/// ```
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct SearchThoughtsRequest {
    /// Case-insensitive text matched against content and tags
    pub query: String,
}

impl ValidateRequest for SearchThoughtsRequest {
    fn validate(&self, config: &Config) -> Result<()> {
        McpValidation::validate_not_empty(&self.query, "query")?;
        McpValidation::validate_string_length(&self.query, "query", config.max_content_length)
    }
}

/// Request to list thoughts carrying a tag
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct FilterByTagRequest {
    /// Exact, case-sensitive tag
    pub tag: String,
}

impl ValidateRequest for FilterByTagRequest {
    fn validate(&self, config: &Config) -> Result<()> {
        McpValidation::validate_not_empty(&self.tag, "tag")?;
        McpValidation::validate_string_length(&self.tag, "tag", config.max_tag_length)
    }
}

/// Request to fetch a single thought by ID
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct GetThoughtRequest {
    /// Full identifier returned by save-thought
    pub id: String,
}

impl ValidateRequest for GetThoughtRequest {
    fn validate(&self, _config: &Config) -> Result<()> {
        Ok(())
    }
}

/// Request to delete a thought
///
/// Any string is accepted; an unknown ID is reported in the response, not
/// rejected as invalid input.
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct DeleteThoughtRequest {
    /// Full identifier returned by save-thought
    pub id: String,
}

impl ValidateRequest for DeleteThoughtRequest {
    fn validate(&self, _config: &Config) -> Result<()> {
        Ok(())
    }
}
