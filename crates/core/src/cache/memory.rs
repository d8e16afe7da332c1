//! Bounded in-memory cache tier with a fixed time-to-live.
//!
//! Thin wrapper over `moka::future::Cache` so the service owns explicitly
//! constructed cache instances with per-instance capacity and TTL instead of
//! process-wide statics.

use std::time::Duration;

use moka::future::Cache;

/// Bounded TTL cache for one tool's normalized responses.
#[derive(Clone, Debug)]
pub struct MemoryCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    inner: Cache<String, T>,
}

impl<T> MemoryCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a cache holding at most `capacity` entries, each expiring
    /// `ttl` after insertion.
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        Self { inner: Cache::builder().max_capacity(capacity).time_to_live(ttl).build() }
    }

    /// Look up a key. Expired entries are never returned.
    pub async fn get(&self, key: &str) -> Option<T> {
        self.inner.get(key).await
    }

    /// Insert a value under the given key.
    pub async fn insert(&self, key: String, value: T) {
        self.inner.insert(key, value).await;
    }

    /// Drop all entries.
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_get() {
        let cache: MemoryCache<String> = MemoryCache::new(16, Duration::from_secs(60));
        cache.insert("key".into(), "value".into()).await;
        assert_eq!(cache.get("key").await.as_deref(), Some("value"));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let cache: MemoryCache<String> = MemoryCache::new(16, Duration::from_secs(60));
        assert!(cache.get("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_ttl_expiry() {
        let cache: MemoryCache<u64> = MemoryCache::new(16, Duration::from_millis(100));
        cache.insert("key".into(), 1).await;
        assert_eq!(cache.get("key").await, Some(1));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(cache.get("key").await.is_none());
    }

    #[tokio::test]
    async fn test_invalidate_all() {
        let cache: MemoryCache<u64> = MemoryCache::new(16, Duration::from_secs(60));
        cache.insert("a".into(), 1).await;
        cache.insert("b".into(), 2).await;

        cache.invalidate_all();

        assert!(cache.get("a").await.is_none());
        assert!(cache.get("b").await.is_none());
    }
}
