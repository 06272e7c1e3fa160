//! In-memory cache provider using moka.
//!
//! Wraps `moka::future::Cache` to provide an async-safe, lock-free in-memory
//! cache with automatic eviction and per-entry time-to-live.
//!
//! # Why moka?
//!
//! - Lock-free reads (common case)
//! - Concurrent writes without blocking
//! - Built-in time-to-live handling; expired entries read as absent
//! - Memory-bounded with configurable limits

use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::cache::traits::{BoxFuture, Cache, CacheError};

/// In-memory cache provider using moka.
///
/// Entries are weighed by their payload size; once the weighted size exceeds
/// `max_size_bytes`, moka evicts least-recently-used entries. When a TTL is
/// configured, each entry expires that long after its most recent write.
pub struct MemoryCacheProvider {
    cache: MokaCache<String, Vec<u8>>,
}

impl MemoryCacheProvider {
    /// Create a new memory cache provider.
    ///
    /// # Arguments
    ///
    /// * `max_size_bytes` - Maximum cache size in bytes
    /// * `ttl` - Optional time-to-live applied from each write
    pub fn new(max_size_bytes: u64, ttl: Option<Duration>) -> Self {
        let mut builder = MokaCache::builder()
            // Weight each entry by its payload size
            .weigher(|_key: &String, value: &Vec<u8>| -> u32 {
                value.len().min(u32::MAX as usize) as u32
            })
            .max_capacity(max_size_bytes);

        if let Some(ttl_duration) = ttl {
            builder = builder.time_to_live(ttl_duration);
        }

        Self {
            cache: builder.build(),
        }
    }

    /// Run pending maintenance tasks (eviction, expiry bookkeeping).
    ///
    /// Moka is eventually consistent; tests call this to sync `entry_count`.
    pub async fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks().await;
    }
}

impl Cache for MemoryCacheProvider {
    fn set(&self, key: &str, value: Vec<u8>) -> BoxFuture<'_, Result<(), CacheError>> {
        let key = key.to_string();
        Box::pin(async move {
            self.cache.insert(key, value).await;
            Ok(())
        })
    }

    fn get(&self, key: &str) -> BoxFuture<'_, Result<Option<Vec<u8>>, CacheError>> {
        let key = key.to_string();
        Box::pin(async move { Ok(self.cache.get(&key).await) })
    }

    fn delete(&self, key: &str) -> BoxFuture<'_, Result<bool, CacheError>> {
        let key = key.to_string();
        Box::pin(async move {
            let existed = self.cache.contains_key(&key);
            self.cache.remove(&key).await;
            Ok(existed)
        })
    }

    fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let provider = MemoryCacheProvider::new(1_000_000, None);

        provider.set("key1", vec![1, 2, 3]).await.unwrap();

        let value = provider.get("key1").await.unwrap();
        assert_eq!(value, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let provider = MemoryCacheProvider::new(1_000_000, None);

        let value = provider.get("nonexistent").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_set_overwrites_unconditionally() {
        let provider = MemoryCacheProvider::new(1_000_000, None);

        provider.set("key1", vec![1, 2, 3]).await.unwrap();
        provider.set("key1", vec![4, 5, 6, 7]).await.unwrap();
        provider.run_pending_tasks().await;

        let value = provider.get("key1").await.unwrap();
        assert_eq!(value, Some(vec![4, 5, 6, 7]));
        assert_eq!(provider.entry_count(), 1);
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let provider = MemoryCacheProvider::new(1_000_000, None);

        provider.set("key1", vec![1, 2, 3]).await.unwrap();
        let deleted = provider.delete("key1").await.unwrap();

        assert!(deleted);
        assert!(provider.get("key1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let provider = MemoryCacheProvider::new(1_000_000, None);

        let deleted = provider.delete("nonexistent").await.unwrap();
        assert!(!deleted);
    }

    #[tokio::test]
    async fn test_expired_entry_reads_as_absent() {
        let provider = MemoryCacheProvider::new(1_000_000, Some(Duration::from_millis(50)));

        provider.set("key1", vec![1, 2, 3]).await.unwrap();

        // Value should exist immediately
        assert!(provider.get("key1").await.unwrap().is_some());

        // Wait for TTL to expire
        tokio::time::sleep(Duration::from_millis(100)).await;
        provider.run_pending_tasks().await;

        // Value should be gone
        assert!(provider.get("key1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_restarts_ttl() {
        let provider = MemoryCacheProvider::new(1_000_000, Some(Duration::from_millis(100)));

        provider.set("key1", vec![1]).await.unwrap();
        tokio::time::sleep(Duration::from_millis(60)).await;

        // Rewrite before expiry; the clock restarts from this write.
        provider.set("key1", vec![2]).await.unwrap();
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert_eq!(provider.get("key1").await.unwrap(), Some(vec![2]));
    }

    #[tokio::test]
    async fn test_concurrent_access() {
        use std::sync::Arc;

        let provider = Arc::new(MemoryCacheProvider::new(10_000_000, None));
        let mut handles = Vec::new();

        for i in 0..50 {
            let provider = Arc::clone(&provider);
            handles.push(tokio::spawn(async move {
                let key = format!("key{}", i);
                let data = vec![i as u8; 100];

                provider.set(&key, data.clone()).await.unwrap();
                let result = provider.get(&key).await.unwrap();
                assert_eq!(result, Some(data));
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        provider.run_pending_tasks().await;
        assert_eq!(provider.entry_count(), 50);
    }
}
