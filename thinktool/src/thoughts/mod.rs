//! Thought records and their storage
//!
//! A thought is a short, immutable note with optional tags. Thoughts are
//! created through [`ThoughtStorage::add`], read back by listing, tag
//! filtering, substring search or ID lookup, and removed only by an explicit
//! delete. There is no update operation.
//!
//! ## Data Model
//!
//! Each thought contains:
//! - **ID**: monotonic ULID, so ID order is creation order
//! - **Content**: non-empty text body
//! - **Tags**: ordered list of strings, duplicates allowed
//! - **Created at**: UTC creation timestamp
//!
//! The separate [`ThoughtLog`] backs the `append-thought` tool: it records raw
//! reasoning text and is never queried by the store.
//!
//! ```rust
//! use thinktool::thoughts::{InMemoryThoughtStorage, ThoughtStorage};
//!
//! # async fn example() -> thinktool::Result<()> {
//! let storage = InMemoryThoughtStorage::new();
//! let saved = storage.add("Try the cheaper index".to_string(), vec![]).await?;
//! assert!(storage.delete(saved.id.as_str()).await?);
//! assert!(!storage.delete(saved.id.as_str()).await?);
//! # Ok(())
//! # }
//! ```

pub mod log;
pub mod storage;

pub use log::{LoggedThought, ThoughtLog};
pub use storage::{InMemoryThoughtStorage, ThoughtStorage};

use crate::common::ulid_generator::generate_monotonic_ulid_string;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Number of leading ID characters shown in listings
pub const SHORT_ID_LENGTH: usize = 8;

/// Type-safe wrapper for thought IDs
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThoughtId(String);

impl ThoughtId {
    /// Generate a new ID, strictly greater than every ID generated before it
    pub fn new() -> Self {
        Self(generate_monotonic_ulid_string())
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first [`SHORT_ID_LENGTH`] characters of the ID
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(SHORT_ID_LENGTH) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }
}

impl Default for ThoughtId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ThoughtId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ThoughtId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ThoughtId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// Lets the store look thoughts up by a plain `&str` without allocating.
impl Borrow<str> for ThoughtId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A stored thought
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thought {
    /// Unique identifier for the thought
    pub id: ThoughtId,
    /// Body text, never empty
    pub content: String,
    /// Tags in the order they were supplied
    pub tags: Vec<String>,
    /// When the thought was created
    pub created_at: DateTime<Utc>,
}

impl Thought {
    /// Create a thought with a fresh ID and the current timestamp
    ///
    /// Content is not checked here; [`ThoughtStorage::add`] rejects empty content.
    pub fn new(content: String, tags: Vec<String>) -> Self {
        Self {
            id: ThoughtId::new(),
            content,
            tags,
            created_at: Utc::now(),
        }
    }

    /// Whether any tag is exactly `tag` (case-sensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether the content or any tag contains `needle`
    ///
    /// `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.content.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thought_id_generation() {
        let id1 = ThoughtId::new();
        let id2 = ThoughtId::new();

        assert_ne!(id1, id2);
        assert!(id1 < id2);
        assert_eq!(id1.as_str().len(), 26);
    }

    #[test]
    fn test_short_id() {
        let id = ThoughtId::from("01J9ZK3M4N5P6Q7R8S9T0V1W2X");
        assert_eq!(id.short(), "01J9ZK3M");

        let tiny = ThoughtId::from("abc");
        assert_eq!(tiny.short(), "abc");

        let wide = ThoughtId::from("ééééééééé");
        assert_eq!(wide.short(), "éééééééé");
    }

    #[test]
    fn test_thought_creation() {
        let thought = Thought::new("Body".to_string(), vec!["a".to_string()]);

        assert_eq!(thought.content, "Body");
        assert_eq!(thought.tags, vec!["a"]);
        assert!(thought.created_at <= Utc::now());
    }

    #[test]
    fn test_has_tag_is_case_sensitive() {
        let thought = Thought::new("x".to_string(), vec!["Work".to_string()]);

        assert!(thought.has_tag("Work"));
        assert!(!thought.has_tag("work"));
        assert!(!thought.has_tag("Wor"));
    }

    #[test]
    fn test_matches_content_or_tags() {
        let thought = Thought::new("Alpha Beta".to_string(), vec!["Xylophone".to_string()]);

        assert!(thought.matches_lowercase("alpha"));
        assert!(thought.matches_lowercase("a b"));
        assert!(thought.matches_lowercase("xylo"));
        assert!(!thought.matches_lowercase("gamma"));
    }

    #[test]
    fn test_thought_serialization() {
        let thought = Thought::new("Serialize me".to_string(), vec!["json".to_string()]);

        let json = serde_json::to_value(&thought).unwrap();
        assert_eq!(json["id"], thought.id.as_str());

        let back: Thought = serde_json::from_value(json).unwrap();
        assert_eq!(back, thought);
    }
}
