//! Per-key single-flight guard.
//!
//! Serializes the miss path of concurrent lookups for the same bucket so
//! identical queries share one provider call and one set of store writes.
//! The winner populates the cache while waiters queue on the key's mutex;
//! each waiter re-checks the cache after acquiring and is served from the
//! winner's write.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Per-key async mutex registry.
///
/// Keys are created on first acquisition and removed when the last holder
/// or waiter releases, so the map only holds entries for buckets with
/// in-flight misses.
#[derive(Debug, Default)]
pub struct SingleFlight {
    locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

/// Guard for an acquired key. Releases the key's mutex on drop and removes
/// the map entry if no other task holds or awaits it.
pub struct FlightGuard {
    locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
    key: String,
    guard: Option<OwnedMutexGuard<()>>,
    waited: bool,
}

impl FlightGuard {
    /// Whether this acquisition queued behind another holder of the key.
    pub fn waited(&self) -> bool {
        self.waited
    }
}

impl SingleFlight {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the mutex for `key`, waiting if another task holds it.
    pub async fn acquire(&self, key: &str) -> FlightGuard {
        let lock = self
            .locks
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        let (guard, waited) = match Arc::clone(&lock).try_lock_owned() {
            Ok(guard) => (guard, false),
            Err(_) => (lock.lock_owned().await, true),
        };
        FlightGuard {
            locks: Arc::clone(&self.locks),
            key: key.to_string(),
            guard: Some(guard),
            waited,
        }
    }

    /// Number of keys with an in-flight holder or waiter.
    pub fn in_flight(&self) -> usize {
        self.locks.len()
    }
}

impl Drop for FlightGuard {
    fn drop(&mut self) {
        // Release the mutex first, then drop the map entry unless another
        // task still holds a clone of the lock (holder or queued waiter).
        self.guard.take();
        self.locks
            .remove_if(&self.key, |_, lock| Arc::strong_count(lock) <= 1);
    }
}
