//! Core traits for the short-lived response cache.
//!
//! The `Cache` trait provides a domain-agnostic key-value interface. Backends
//! implement this trait so callers can swap implementations behind a
//! consistent interface; domain concepts like bucket coordinates are handled
//! by a decorator layer ([`BucketCacheClient`](crate::cache::BucketCacheClient)).
//!
//! # Design Principles
//!
//! - **String keys**: human-readable in logs, flexible for any domain
//! - **`Vec<u8>` values**: raw bytes, no serialization opinions imposed
//! - **Fixed expiration**: the time-to-live is set when the backend is built
//!   and applies from each write; there is no sliding expiration
//! - **Dyn-compatible**: uses `Pin<Box<dyn Future>>` so callers can hold
//!   `Arc<dyn Cache>` trait objects

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// I/O error talking to the cache backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure.
    #[error("cache backend error: {0}")]
    Backend(String),
}

/// Boxed future type for dyn-compatible async methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Generic key-value cache with per-entry expiration.
///
/// Entries expire a fixed duration after each write; an expired entry reads
/// as absent, with no eviction callback. Implementations must be
/// `Send + Sync` for use across async tasks.
pub trait Cache: Send + Sync {
    /// Store a value under the given key, replacing any existing entry
    /// unconditionally and restarting its time-to-live.
    fn set(&self, key: &str, value: Vec<u8>) -> BoxFuture<'_, Result<(), CacheError>>;

    /// Retrieve a value by key.
    ///
    /// Returns `Ok(None)` for keys that were never written or whose entry
    /// has expired.
    fn get(&self, key: &str) -> BoxFuture<'_, Result<Option<Vec<u8>>, CacheError>>;

    /// Delete a value by key.
    ///
    /// Returns `true` if the key existed and was deleted.
    fn delete(&self, key: &str) -> BoxFuture<'_, Result<bool, CacheError>>;

    /// Current number of live entries.
    fn entry_count(&self) -> u64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_error_display() {
        let err = CacheError::Backend("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_cache_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let cache_err: CacheError = io_err.into();
        assert!(matches!(cache_err, CacheError::Io(_)));
    }
}
