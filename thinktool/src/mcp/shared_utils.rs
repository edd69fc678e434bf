//! Shared utilities for MCP operations
//!
//! Error mapping, input validation and response formatting used by every
//! thought tool.

use crate::thoughts::Thought;
use crate::{Result, ThinkToolError};
use rmcp::Error as McpError;

/// Common error handling patterns for MCP operations
pub struct McpErrorHandler;

impl McpErrorHandler {
    /// Convert a [`ThinkToolError`] to the MCP error returned to the client
    ///
    /// Every library error is caused by caller input, so all of them map to
    /// invalid_params.
    pub fn handle_error(error: ThinkToolError, operation: &str) -> McpError {
        match error {
            ThinkToolError::EmptyContent | ThinkToolError::Validation(_) => {
                tracing::warn!("MCP operation '{}' rejected: {}", operation, error);
                McpError::invalid_params(error.to_string(), None)
            }
        }
    }

    /// Handle results with consistent error mapping
    pub fn handle_result<T>(
        result: Result<T>,
        operation: &str,
    ) -> std::result::Result<T, McpError> {
        result.map_err(|e| Self::handle_error(e, operation))
    }
}

/// Validation utilities for MCP requests
pub struct McpValidation;

impl McpValidation {
    /// Validate string length in characters
    pub fn validate_string_length(value: &str, field: &str, max_length: usize) -> Result<()> {
        let length = value.chars().count();
        if length > max_length {
            return Err(ThinkToolError::validation(format!(
                "{} too long: {} characters (max: {})",
                Self::capitalize_first_letter(field),
                length,
                max_length
            )));
        }
        Ok(())
    }

    /// Validate string has at least one character
    ///
    /// Whitespace counts: `" "` is a valid query, tag or thought.
    pub fn validate_not_empty(value: &str, field: &str) -> Result<()> {
        if value.is_empty() {
            return Err(ThinkToolError::validation(format!(
                "{} cannot be empty",
                Self::capitalize_first_letter(field)
            )));
        }
        Ok(())
    }

    /// Validate the tag list of a new thought
    pub fn validate_tags(tags: &[String], max_tags: usize, max_tag_length: usize) -> Result<()> {
        if tags.len() > max_tags {
            return Err(ThinkToolError::validation(format!(
                "Too many tags: {} (max: {})",
                tags.len(),
                max_tags
            )));
        }
        for tag in tags {
            Self::validate_string_length(tag, "tag", max_tag_length)?;
        }
        Ok(())
    }

    fn capitalize_first_letter(s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        }
    }
}

/// Formatting utilities for consistent MCP responses
pub struct McpFormatter;

impl McpFormatter {
    /// Format a timestamp as ISO 8601 in UTC, to the second
    pub fn format_date(timestamp: chrono::DateTime<chrono::Utc>) -> String {
        timestamp.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    }

    /// Format one thought as a listing line
    ///
    /// `- <date> | <short id> | <content>` followed by ` [a, b]` when the
    /// thought has tags.
    pub fn format_thought_line(thought: &Thought) -> String {
        let mut line = format!(
            "- {} | {} | {}",
            Self::format_date(thought.created_at),
            thought.id.short(),
            thought.content
        );
        if !thought.tags.is_empty() {
            line.push_str(&format!(" [{}]", thought.tags.join(", ")));
        }
        line
    }

    /// Format a header line followed by one line per thought
    pub fn format_thought_listing(header: &str, thoughts: &[Thought]) -> String {
        let lines: Vec<String> = thoughts.iter().map(Self::format_thought_line).collect();
        format!("{header}\n\n{}", lines.join("\n"))
    }

    /// Create a count summary such as `Found 1 thought` or `Found 3 thoughts`
    pub fn format_list_summary(item_name: &str, count: usize) -> String {
        if count == 1 {
            format!("Found {count} {item_name}")
        } else {
            format!("Found {count} {item_name}s")
        }
    }
}
