//! TTL cache for certification statuses.
//!
//! Bounded in-memory cache with configurable capacity and expiration,
//! shared across concurrent request handlers.

mod cache;

pub use cache::{CacheConfig, CacheStats, CertCache};
