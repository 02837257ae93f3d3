//! In-process cache for upstream holiday payloads.
//!
//! The router only talks to the [`ResponseCache`] trait, so the unbounded
//! [`MemoryCache`] can be swapped for a bounded or expiring one without
//! touching any handler.

pub mod key;
pub mod memory;

use std::sync::Arc;

use serde_json::Value;

pub use key::CacheKey;
pub use memory::MemoryCache;

/// Lookup/insert interface over cached holiday payloads.
///
/// Implementations must make an insert atomic with respect to concurrent
/// lookups: a reader sees either no entry or the complete payload.
pub trait ResponseCache: Send + Sync {
    /// Return the payload stored under `key`, if any.
    fn lookup(&self, key: &CacheKey) -> Option<Arc<Value>>;

    /// Store `payload` under `key` and return the payload now held for it.
    ///
    /// When `key` is already present the stored payload is kept.
    fn insert(&self, key: CacheKey, payload: Value) -> Arc<Value>;

    /// Number of cached keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
