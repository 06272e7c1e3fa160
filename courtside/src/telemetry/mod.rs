//! Lookup pipeline telemetry.
//!
//! Lock-free atomic counters record which tier answered each request and how
//! often the external provider is reached. Counters are written by the
//! pipeline and read as point-in-time snapshots:
//!
//! ```text
//! Lookup tiers ─────► LookupMetrics ─────► MetricsSnapshot ─────► Views
//!                     (atomic counters)    (point-in-time copy)
//! ```

mod metrics;
mod snapshot;

pub use metrics::LookupMetrics;
pub use snapshot::MetricsSnapshot;
