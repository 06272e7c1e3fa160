//! Persistent point-of-interest store
//!
//! The durable tier of the lookup pipeline: a table of previously discovered
//! tennis courts queried by proximity. The [`PoiStore`] trait is the seam;
//! [`PostgresPoiStore`] is the production backend and [`MemoryPoiStore`] a
//! behavior-matching stub for tests and local development.

mod memory;
mod poi;
mod postgres;
mod traits;

pub use memory::MemoryPoiStore;
pub use poi::Poi;
pub use postgres::PostgresPoiStore;
pub use traits::{PoiStore, StoreError};
