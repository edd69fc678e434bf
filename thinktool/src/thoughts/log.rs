//! Append-only log of externalized reasoning

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry written by `append-thought`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedThought {
    /// The text exactly as it was received
    pub text: String,
    /// When the entry was appended
    pub logged_at: DateTime<Utc>,
}

/// Append-only record of thoughts
///
/// Entries are only ever pushed; nothing reads them back to make a decision.
#[derive(Debug, Default)]
pub struct ThoughtLog {
    entries: Vec<LoggedThought>,
}

impl ThoughtLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` and return the stored entry
    pub fn append(&mut self, text: String) -> &LoggedThought {
        self.entries.push(LoggedThought {
            text,
            logged_at: Utc::now(),
        });
        &self.entries[self.entries.len() - 1]
    }

    /// All entries in append order
    pub fn entries(&self) -> &[LoggedThought] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
