//! In-memory TTL cache for certification statuses.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use certgate_core::constants::{DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL_SECONDS};
use certgate_core::types::CertStatus;

/// Cache entry with TTL.
#[derive(Clone)]
struct CacheEntry {
    status: CertStatus,
    inserted_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() >= self.ttl
    }
}

/// Cache configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries
    pub capacity: usize,
    /// Entry TTL in seconds
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
            ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
        }
    }
}

/// Bounded in-memory cache mapping public keys to certification statuses.
///
/// Thread-safe; expiry is checked lazily at read time, eviction happens at
/// write time. When full and a new key arrives, already-expired entries are
/// dropped first; if none exist the least-recently-inserted entry is
/// evicted. Entries are only removed by expiry or eviction: there is no
/// manual invalidation.
pub struct CertCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    config: CacheConfig,
}

impl CertCache {
    /// Creates a new cache with default configuration.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates a cache with custom configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(config.capacity)),
            config,
        }
    }

    /// Gets the cached status for a public key.
    ///
    /// Returns `None` for unknown and expired keys; an expired entry is
    /// purged as a side effect.
    pub fn get(&self, key: &str) -> Option<CertStatus> {
        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => return None,
                Some(e) if !e.is_expired() => return Some(e.status.clone()),
                Some(_) => {}
            }
        }

        // Expired: purge under the write lock. Re-check first, a concurrent
        // put may have refreshed the entry between the two locks.
        let mut entries = self.entries.write();
        match entries.get(key) {
            Some(e) if e.is_expired() => {
                entries.remove(key);
                None
            }
            Some(e) => Some(e.status.clone()),
            None => None,
        }
    }

    /// Caches a status with the configured TTL.
    ///
    /// Overwriting an existing key resets its expiry and never evicts.
    pub fn put(&self, key: &str, status: CertStatus) {
        self.put_with_ttl(key, status, Duration::from_secs(self.config.ttl_seconds));
    }

    /// Caches a status with a custom TTL.
    pub fn put_with_ttl(&self, key: &str, status: CertStatus, ttl: Duration) {
        let mut entries = self.entries.write();

        if entries.len() >= self.config.capacity && !entries.contains_key(key) {
            entries.retain(|_, e| !e.is_expired());
        }
        if entries.len() >= self.config.capacity && !entries.contains_key(key) {
            if let Some(oldest_key) = entries
                .iter()
                .min_by_key(|(_, e)| e.inserted_at)
                .map(|(k, _)| k.clone())
            {
                entries.remove(&oldest_key);
            }
        }

        entries.insert(
            key.to_string(),
            CacheEntry {
                status,
                inserted_at: Instant::now(),
                ttl,
            },
        );
    }

    /// Returns the number of cached entries, expired included.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.read();
        let expired = entries.values().filter(|e| e.is_expired()).count();
        CacheStats {
            total_entries: entries.len(),
            expired_entries: expired,
            valid_entries: entries.len().saturating_sub(expired),
            capacity: self.config.capacity,
        }
    }
}

impl Default for CertCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics.
#[derive(Clone, Debug, Serialize)]
pub struct CacheStats {
    /// Entries currently held, expired included.
    pub total_entries: usize,
    /// Entries past their TTL but not yet purged.
    pub expired_entries: usize,
    /// Entries that a `get` would still return.
    pub valid_entries: usize,
    /// Configured capacity bound.
    pub capacity: usize,
}
