//! Courtside - nearby tennis court lookup
//!
//! This library answers "find nearby tennis courts" queries by combining
//! three tiers, consulted in strict priority order:
//!
//! 1. a persistent store of previously discovered courts ([`store`])
//! 2. a short-lived cache of raw provider responses, keyed by a coarse
//!    geographic bucket ([`cache`], [`coord`])
//! 3. an external nearby-search API, invoked only on a full miss
//!    ([`provider`])
//!
//! The [`lookup`] module ties the tiers together and is the crate's core;
//! [`telemetry`] records which tier answered each request. The HTTP surface
//! lives in the separate `courtside-server` binary crate.

pub mod cache;
pub mod coord;
pub mod lookup;
pub mod provider;
pub mod store;
pub mod telemetry;

pub use lookup::{LookupConfig, LookupError, LookupOrchestrator, SearchResponse};
