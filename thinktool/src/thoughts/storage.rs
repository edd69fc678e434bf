//! In-memory storage backend for thoughts

use crate::error::{Result, ThinkToolError};
use crate::thoughts::{Thought, ThoughtId};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Trait for thought storage operations
///
/// Every query returns thoughts in insertion order.
#[async_trait]
pub trait ThoughtStorage: Send + Sync {
    /// Store a new thought, assigning its ID and creation time
    ///
    /// Fails with [`ThinkToolError::EmptyContent`] when `content` is empty.
    async fn add(&self, content: String, tags: Vec<String>) -> Result<Thought>;

    /// All live thoughts
    async fn get_all(&self) -> Result<Vec<Thought>>;

    /// Exact-match lookup; `None` when no thought has this ID
    async fn get_by_id(&self, id: &str) -> Result<Option<Thought>>;

    /// Thoughts carrying `tag` exactly (case-sensitive)
    async fn get_by_tag(&self, tag: &str) -> Result<Vec<Thought>>;

    /// Thoughts whose content or any tag contains `query`, ignoring case
    async fn search(&self, query: &str) -> Result<Vec<Thought>>;

    /// Remove a thought; returns whether anything was removed
    async fn delete(&self, id: &str) -> Result<bool>;
}

/// Process-lifetime storage keeping every thought in memory
///
/// Thoughts are keyed by their monotonic ULID, and IDs are generated while the
/// write lock is held, so key order is insertion order.
#[derive(Debug, Default)]
pub struct InMemoryThoughtStorage {
    thoughts: RwLock<BTreeMap<ThoughtId, Thought>>,
}

impl InMemoryThoughtStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live thoughts
    pub async fn len(&self) -> usize {
        self.thoughts.read().await.len()
    }

    /// Whether the store holds no thoughts
    pub async fn is_empty(&self) -> bool {
        self.thoughts.read().await.is_empty()
    }

    async fn collect_where<F>(&self, predicate: F) -> Vec<Thought>
    where
        F: Fn(&Thought) -> bool + Send,
    {
        self.thoughts
            .read()
            .await
            .values()
            .filter(|&thought| predicate(thought))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ThoughtStorage for InMemoryThoughtStorage {
    async fn add(&self, content: String, tags: Vec<String>) -> Result<Thought> {
        if content.is_empty() {
            return Err(ThinkToolError::EmptyContent);
        }

        let mut thoughts = self.thoughts.write().await;
        let thought = Thought::new(content, tags);
        thoughts.insert(thought.id.clone(), thought.clone());

        tracing::debug!(
            "Stored thought {} ({} tags, {} total)",
            thought.id,
            thought.tags.len(),
            thoughts.len()
        );
        Ok(thought)
    }

    async fn get_all(&self) -> Result<Vec<Thought>> {
        Ok(self.thoughts.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Thought>> {
        Ok(self.thoughts.read().await.get(id).cloned())
    }

    async fn get_by_tag(&self, tag: &str) -> Result<Vec<Thought>> {
        Ok(self.collect_where(|thought| thought.has_tag(tag)).await)
    }

    async fn search(&self, query: &str) -> Result<Vec<Thought>> {
        let needle = query.to_lowercase();
        Ok(self
            .collect_where(|thought| thought.matches_lowercase(&needle))
            .await)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let removed = self.thoughts.write().await.remove(id).is_some();
        if removed {
            tracing::debug!("Removed thought {}", id);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn test_add_and_get_by_id() {
        let storage = InMemoryThoughtStorage::new();
        let thought = storage
            .add("Remember the edge case".to_string(), tags(&["bug"]))
            .await
            .unwrap();

        let found = storage.get_by_id(thought.id.as_str()).await.unwrap();
        assert_eq!(found, Some(thought));
        assert_eq!(storage.get_by_id("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_add_rejects_empty_content() {
        let storage = InMemoryThoughtStorage::new();

        let result = storage.add(String::new(), vec![]).await;
        assert!(matches!(result, Err(ThinkToolError::EmptyContent)));
        assert!(storage.is_empty().await);
    }

    #[tokio::test]
    async fn test_whitespace_content_is_stored_verbatim() {
        let storage = InMemoryThoughtStorage::new();

        let thought = storage.add("\n\t ".to_string(), vec![]).await.unwrap();

        assert_eq!(thought.content, "\n\t ");
        assert_eq!(storage.search(" ").await.unwrap(), vec![thought]);
    }

    #[tokio::test]
    async fn test_duplicate_tags_are_kept() {
        let storage = InMemoryThoughtStorage::new();
        let thought = storage
            .add("dup".to_string(), tags(&["a", "a", "b"]))
            .await
            .unwrap();

        assert_eq!(thought.tags, tags(&["a", "a", "b"]));
    }

    #[tokio::test]
    async fn test_get_all_preserves_insertion_order_across_deletes() {
        let storage = InMemoryThoughtStorage::new();
        let first = storage.add("one".to_string(), vec![]).await.unwrap();
        let second = storage.add("two".to_string(), vec![]).await.unwrap();
        let third = storage.add("three".to_string(), vec![]).await.unwrap();

        assert!(storage.delete(second.id.as_str()).await.unwrap());
        let fourth = storage.add("four".to_string(), vec![]).await.unwrap();

        let contents: Vec<String> = storage
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.content)
            .collect();
        assert_eq!(contents, vec!["one", "three", "four"]);
        assert!(first.id < third.id && third.id < fourth.id);
    }

    #[tokio::test]
    async fn test_get_by_tag_is_exact_and_case_sensitive() {
        let storage = InMemoryThoughtStorage::new();
        storage
            .add("Plan the sprint".to_string(), tags(&["Work"]))
            .await
            .unwrap();
        storage
            .add("Buy milk".to_string(), tags(&["home", "Workshop"]))
            .await
            .unwrap();

        assert!(storage.get_by_tag("work").await.unwrap().is_empty());
        assert!(storage.get_by_tag("Wor").await.unwrap().is_empty());

        let work = storage.get_by_tag("Work").await.unwrap();
        assert_eq!(work.len(), 1);
        assert_eq!(work[0].content, "Plan the sprint");
    }

    #[tokio::test]
    async fn test_search_matches_content_or_tag_ignoring_case() {
        let storage = InMemoryThoughtStorage::new();
        let thought = storage
            .add("Alpha Beta".to_string(), tags(&["x"]))
            .await
            .unwrap();
        storage
            .add("Gamma".to_string(), tags(&["y"]))
            .await
            .unwrap();

        let by_content = storage.search("alpha").await.unwrap();
        assert_eq!(by_content.len(), 1);
        assert_eq!(by_content[0].id, thought.id);

        let by_tag = storage.search("X").await.unwrap();
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].id, thought.id);

        assert!(storage.search("delta").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let storage = InMemoryThoughtStorage::new();
        let thought = storage.add("ephemeral".to_string(), vec![]).await.unwrap();

        assert!(storage.delete(thought.id.as_str()).await.unwrap());
        assert!(!storage.delete(thought.id.as_str()).await.unwrap());
        assert!(!storage.delete("never-existed").await.unwrap());
        assert_eq!(storage.len().await, 0);
    }

    #[tokio::test]
    async fn test_concurrent_adds_keep_unique_ids() {
        let storage = std::sync::Arc::new(InMemoryThoughtStorage::new());

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let storage = storage.clone();
                tokio::spawn(async move { storage.add(format!("thought {i}"), vec![]).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(storage.len().await, 20);
    }

    proptest! {
        #[test]
        fn prop_search_ignores_case(content in "[a-zA-Z]{1,12}( [a-zA-Z]{1,12}){0,3}") {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            runtime.block_on(async {
                let storage = InMemoryThoughtStorage::new();
                let saved = storage.add(content.clone(), vec![]).await.unwrap();

                for query in [content.to_uppercase(), content.to_lowercase()] {
                    let found = storage.search(&query).await.unwrap();
                    prop_assert_eq!(found.len(), 1);
                    prop_assert_eq!(&found[0].id, &saved.id);
                }
                Ok(())
            })?;
        }

        #[test]
        fn prop_get_all_returns_insertion_order(contents in prop::collection::vec("[a-z]{1,8}", 1..20)) {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            runtime.block_on(async {
                let storage = InMemoryThoughtStorage::new();
                for content in &contents {
                    storage.add(content.clone(), vec![]).await.unwrap();
                }

                let listed: Vec<String> = storage
                    .get_all()
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|t| t.content)
                    .collect();
                prop_assert_eq!(listed, contents.clone());
                Ok(())
            })?;
        }
    }
}
