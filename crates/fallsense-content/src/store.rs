//! # Content Store
//!
//! Page sections (hero copy, feature tables, calculator copy, publication
//! lists) are JSON documents addressed by [`SectionKey`]. The [`ContentStore`]
//! trait is the get/upsert seam; [`InMemoryContentStore`] is the
//! implementation used by the API service and tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use fallsense_core::{SectionKey, Timestamp};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One stored section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionContent {
    pub key: SectionKey,
    pub content: Value,
    pub updated_at: Timestamp,
}

/// Keyed storage for section content.
///
/// Implementations must make each `upsert` visible atomically: a concurrent
/// `get` sees either the previous row or the new one, never a mix.
pub trait ContentStore: Send + Sync {
    /// Fetch a section by key.
    fn get(&self, key: &SectionKey) -> Option<SectionContent>;

    /// Insert or replace a section, returning the stored row.
    fn upsert(&self, key: SectionKey, content: Value) -> SectionContent;

    /// All stored keys, in ascending order.
    fn keys(&self) -> Vec<SectionKey>;
}

/// Thread-safe, cloneable in-memory content store.
///
/// All clones share the same data. The lock is `parking_lot`, so it is never
/// poisoned and never held across an `.await`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentStore {
    data: Arc<RwLock<BTreeMap<SectionKey, SectionContent>>>,
}

impl InMemoryContentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `sections`.
    pub fn seeded(sections: impl IntoIterator<Item = (SectionKey, Value)>) -> Self {
        let store = Self::new();
        for (key, content) in sections {
            store.upsert(key, content);
        }
        store
    }

    /// Number of stored sections.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ContentStore for InMemoryContentStore {
    fn get(&self, key: &SectionKey) -> Option<SectionContent> {
        self.data.read().get(key).cloned()
    }

    fn upsert(&self, key: SectionKey, content: Value) -> SectionContent {
        let row = SectionContent {
            key: key.clone(),
            content,
            updated_at: Timestamp::now(),
        };
        let previous = self.data.write().insert(key, row.clone());
        tracing::debug!(key = %row.key, replaced = previous.is_some(), "section upserted");
        row
    }

    fn keys(&self) -> Vec<SectionKey> {
        self.data.read().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(s: &str) -> SectionKey {
        SectionKey::new(s).unwrap()
    }

    #[test]
    fn get_missing_is_none() {
        let store = InMemoryContentStore::new();
        assert!(store.get(&key("hero")).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn upsert_then_get() {
        let store = InMemoryContentStore::new();
        let row = store.upsert(key("hero"), json!({"headline": "Fewer falls"}));
        assert_eq!(row.key.as_str(), "hero");
        let fetched = store.get(&key("hero")).unwrap();
        assert_eq!(fetched.content["headline"], "Fewer falls");
        assert_eq!(fetched, row);
    }

    #[test]
    fn upsert_replaces() {
        let store = InMemoryContentStore::new();
        store.upsert(key("hero"), json!({"v": 1}));
        store.upsert(key("hero"), json!({"v": 2}));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&key("hero")).unwrap().content["v"], 2);
    }

    #[test]
    fn keys_are_sorted() {
        let store = InMemoryContentStore::seeded([
            (key("publications"), json!([])),
            (key("hero"), json!({})),
            (key("feature_comparison"), json!({})),
        ]);
        let keys: Vec<String> = store.keys().into_iter().map(String::from).collect();
        assert_eq!(keys, ["feature_comparison", "hero", "publications"]);
    }

    #[test]
    fn clones_share_data() {
        let a = InMemoryContentStore::new();
        let b = a.clone();
        a.upsert(key("hero"), json!(1));
        assert_eq!(b.get(&key("hero")).unwrap().content, json!(1));
    }

    #[test]
    fn usable_as_trait_object() {
        let store: Arc<dyn ContentStore> = Arc::new(InMemoryContentStore::new());
        store.upsert(key("hero"), json!("x"));
        assert_eq!(store.keys().len(), 1);
    }
}
