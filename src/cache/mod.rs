//! Key-value cache consumed by the search pipeline.
//!
//! The store holds two kinds of entries under flat string keys: one record
//! per repository, and a single index set listing the keys believed cached.
//! The two are never updated atomically together; the pipeline validates and
//! repairs on read instead of trusting the index.

use async_trait::async_trait;

mod memory;

pub use memory::MemoryCache;

/// Minimal cache interface. Entries may expire or be evicted at any time
/// outside the caller's control; callers must treat every `get` as fallible.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;

    async fn set(&self, key: &str, value: String);

    async fn delete(&self, key: &str);

    /// Atomic read-or-initialize: returns the existing value if present,
    /// otherwise stores `default` and returns it.
    async fn get_or_set(&self, key: &str, default: String) -> String;
}
