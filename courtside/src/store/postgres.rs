//! Postgres-backed POI store.
//!
//! Expected schema (migrations are managed outside this crate):
//!
//! ```sql
//! CREATE TABLE tennis_courts (
//!     id           BIGSERIAL PRIMARY KEY,
//!     name         TEXT NOT NULL,
//!     address      TEXT NOT NULL,
//!     latitude     DOUBLE PRECISION NOT NULL,
//!     longitude    DOUBLE PRECISION NOT NULL,
//!     last_updated TIMESTAMPTZ NOT NULL
//! );
//! ```
//!
//! There is deliberately no uniqueness constraint on (name, latitude,
//! longitude); `insert_all` is append-only.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use super::poi::Poi;
use super::traits::{PoiStore, StoreError};

/// POI store over a Postgres connection pool.
pub struct PostgresPoiStore {
    pool: PgPool,
}

impl PostgresPoiStore {
    /// Create a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PoiStore for PostgresPoiStore {
    async fn find_near(
        &self,
        lat: f64,
        lng: f64,
        tolerance: f64,
    ) -> Result<Vec<Poi>, StoreError> {
        let sql = r#"
            SELECT id, name, address, latitude, longitude, last_updated
            FROM tennis_courts
            WHERE latitude BETWEEN $1 AND $2
              AND longitude BETWEEN $3 AND $4
        "#;

        let rows = sqlx::query_as::<_, Poi>(sql)
            .bind(lat - tolerance)
            .bind(lat + tolerance)
            .bind(lng - tolerance)
            .bind(lng + tolerance)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn insert_all(&self, pois: &[Poi]) -> Result<(), StoreError> {
        if pois.is_empty() {
            return Ok(());
        }

        // One timestamp per batch: every row from a single provider response
        // carries the same last_updated.
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        for poi in pois {
            sqlx::query(
                r#"
                INSERT INTO tennis_courts (name, address, latitude, longitude, last_updated)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(&poi.name)
            .bind(&poi.address)
            .bind(poi.latitude)
            .bind(poi.longitude)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
