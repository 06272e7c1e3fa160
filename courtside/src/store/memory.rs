//! In-memory POI store stub.
//!
//! Mirrors the Postgres store's observable behavior (bounding-box filter,
//! surrogate ids, insert-time stamping, no deduplication) over a `Vec`.
//! Used by the pipeline tests and available for local development without a
//! database.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::poi::Poi;
use super::traits::{PoiStore, StoreError};

/// POI store over an in-memory `Vec`.
#[derive(Debug)]
pub struct MemoryPoiStore {
    rows: Mutex<Vec<Poi>>,
    next_id: AtomicI64,
}

impl MemoryPoiStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Total number of rows, duplicates included.
    pub async fn row_count(&self) -> usize {
        self.rows.lock().await.len()
    }

    /// Copy of every row, in insertion order.
    pub async fn all_rows(&self) -> Vec<Poi> {
        self.rows.lock().await.clone()
    }
}

#[async_trait]
impl PoiStore for MemoryPoiStore {
    async fn find_near(
        &self,
        lat: f64,
        lng: f64,
        tolerance: f64,
    ) -> Result<Vec<Poi>, StoreError> {
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .filter(|p| {
                (p.latitude - lat).abs() <= tolerance && (p.longitude - lng).abs() <= tolerance
            })
            .cloned()
            .collect())
    }

    async fn insert_all(&self, pois: &[Poi]) -> Result<(), StoreError> {
        if pois.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let mut rows = self.rows.lock().await;
        for poi in pois {
            let mut row = poi.clone();
            row.id = Some(self.next_id.fetch_add(1, Ordering::Relaxed));
            row.last_updated = now;
            rows.push(row);
        }
        Ok(())
    }
}
