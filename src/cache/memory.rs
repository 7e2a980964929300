use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::CacheStore;

struct Entry {
    value: String,
    inserted_at: Instant,
}

/// In-process TTL cache. Expired entries are evicted lazily on access, so a
/// key can linger in memory past its TTL but is never returned stale.
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
    ttl: Duration,
}

impl MemoryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    fn fresh(&self, entry: &Entry) -> bool {
        entry.inserted_at.elapsed() <= self.ttl
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => return None,
                Some(entry) if self.fresh(entry) => return Some(entry.value.clone()),
                Some(_) => {}
            }
        }
        // Expired: drop it so the map doesn't accumulate dead entries.
        self.entries.write().remove(key);
        None
    }

    async fn set(&self, key: &str, value: String) {
        self.entries.write().insert(
            key.to_string(),
            Entry {
                value,
                inserted_at: Instant::now(),
            },
        );
    }

    async fn delete(&self, key: &str) {
        self.entries.write().remove(key);
    }

    async fn get_or_set(&self, key: &str, default: String) -> String {
        let mut entries = self.entries.write();
        if let Some(entry) = entries.get(key) {
            if self.fresh(entry) {
                return entry.value.clone();
            }
        }
        entries.insert(
            key.to_string(),
            Entry {
                value: default.clone(),
                inserted_at: Instant::now(),
            },
        );
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_lived() -> MemoryCache {
        MemoryCache::new(Duration::from_secs(60))
    }

    #[tokio::test]
    async fn test_set_then_get_returns_value() {
        let cache = long_lived();
        cache.set("k", "v".to_string()).await;
        assert_eq!(cache.get("k").await.as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let cache = long_lived();
        assert!(cache.get("absent").await.is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_entry() {
        let cache = long_lived();
        cache.set("k", "v".to_string()).await;
        cache.delete("k").await;
        assert!(cache.get("k").await.is_none());
    }

    #[tokio::test]
    async fn test_get_or_set_initializes_once() {
        let cache = long_lived();
        let first = cache.get_or_set("k", "a".to_string()).await;
        let second = cache.get_or_set("k", "b".to_string()).await;
        assert_eq!(first, "a");
        assert_eq!(second, "a");
    }

    #[tokio::test]
    async fn test_expired_entry_is_not_returned() {
        let cache = MemoryCache::new(Duration::from_millis(10));
        cache.set("k", "v".to_string()).await;
        std::thread::sleep(Duration::from_millis(25));
        assert!(cache.get("k").await.is_none());
    }

    #[tokio::test]
    async fn test_get_or_set_replaces_expired_entry() {
        let cache = MemoryCache::new(Duration::from_millis(10));
        cache.set("k", "old".to_string()).await;
        std::thread::sleep(Duration::from_millis(25));
        let value = cache.get_or_set("k", "new".to_string()).await;
        assert_eq!(value, "new");
    }
}
