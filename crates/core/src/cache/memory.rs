//! Unbounded process-lifetime cache backed by a sharded concurrent map.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::Value;

use super::{CacheKey, ResponseCache};

/// Cache that keeps every payload until the process exits.
///
/// No eviction and no expiry. The first payload stored for a key wins;
/// later inserts for the same key return the stored payload unchanged.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<CacheKey, Arc<Value>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResponseCache for MemoryCache {
    fn lookup(&self, key: &CacheKey) -> Option<Arc<Value>> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    fn insert(&self, key: CacheKey, payload: Value) -> Arc<Value> {
        match self.entries.entry(key) {
            Entry::Occupied(existing) => {
                if **existing.get() != payload {
                    tracing::warn!(key = %existing.key(), "conflicting payload for cached key; keeping first");
                }
                Arc::clone(existing.get())
            }
            Entry::Vacant(slot) => {
                let stored = Arc::new(payload);
                slot.insert(Arc::clone(&stored));
                stored
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::{CountryCode, Year};
    use serde_json::json;
    use std::thread;

    fn key(country: &str, year: i32) -> CacheKey {
        CacheKey::new(CountryCode::parse(country).unwrap(), Year::new(year).unwrap())
    }

    #[test]
    fn test_lookup_missing() {
        let cache = MemoryCache::new();
        assert!(cache.lookup(&key("JP", 2025)).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_insert_then_lookup() {
        let cache = MemoryCache::new();
        let payload = json!([{"date": "2025-01-01", "localName": "元日"}]);

        cache.insert(key("JP", 2025), payload.clone());

        assert_eq!(*cache.lookup(&key("jp", 2025)).unwrap(), payload);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_are_isolated() {
        let cache = MemoryCache::new();
        cache.insert(key("JP", 2025), json!(["jp-2025"]));

        assert!(cache.lookup(&key("JP", 2026)).is_none());
        assert!(cache.lookup(&key("US", 2025)).is_none());
    }

    #[test]
    fn test_reinsert_same_value_is_idempotent() {
        let cache = MemoryCache::new();
        cache.insert(key("US", 2024), json!(["a"]));
        cache.insert(key("US", 2024), json!(["a"]));

        assert_eq!(cache.len(), 1);
        assert_eq!(*cache.lookup(&key("US", 2024)).unwrap(), json!(["a"]));
    }

    #[test]
    fn test_first_write_wins() {
        let cache = MemoryCache::new();
        cache.insert(key("GB", 2030), json!(["first"]));

        let stored = cache.insert(key("GB", 2030), json!(["second"]));

        assert_eq!(*stored, json!(["first"]));
        assert_eq!(*cache.lookup(&key("GB", 2030)).unwrap(), json!(["first"]));
    }

    #[test]
    fn test_concurrent_inserts_same_key() {
        let cache = Arc::new(MemoryCache::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    let stored = cache.insert(key("DE", 2025), json!({"holidays": [1, 2, 3]}));
                    assert_eq!(*stored, json!({"holidays": [1, 2, 3]}));
                    cache.lookup(&key("DE", 2025)).is_some()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(cache.len(), 1);
    }
}
