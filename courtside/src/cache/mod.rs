//! Short-lived response cache.
//!
//! A two-layer design borrowed from the cache service pattern:
//!
//! - [`traits::Cache`] - generic key/value interface with per-entry TTL
//! - [`providers`] - backend implementations (moka in-memory)
//! - [`clients`] - domain decorators ([`BucketCacheClient`]) translating
//!   bucket coordinates to keys and failing open on backend errors

pub mod clients;
pub mod providers;
pub mod traits;

pub use clients::BucketCacheClient;
pub use providers::MemoryCacheProvider;
pub use traits::{BoxFuture, Cache, CacheError};
