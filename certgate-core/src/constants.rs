//! Service constants for certgate.
//!
//! Cache bounds and query defaults match the behavior of the original
//! deployment; all of them can be overridden through the environment
//! (see `certgate-api`).

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE PARAMETERS
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum number of entries the certification cache retains.
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Time-to-live of a cache entry in seconds (2 hours).
/// After this, a cached status is treated as a miss and re-queried.
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 7200;

// ═══════════════════════════════════════════════════════════════════════════════
// QUERY PARAMETERS
// ═══════════════════════════════════════════════════════════════════════════════

/// Default path of the node-query script.
pub const DEFAULT_QUERY_SCRIPT: &str = "./get-account-info.sh";

/// Upper bound on a single script invocation, in seconds.
/// An invocation exceeding this is killed and treated as a failed query.
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 30;

// ═══════════════════════════════════════════════════════════════════════════════
// STATUS LITERALS
// ═══════════════════════════════════════════════════════════════════════════════

/// Status returned and cached when a key is not certified or the
/// query could not determine certification.
pub const NOT_CERTIFIED: &str = "not-certified";

// ═══════════════════════════════════════════════════════════════════════════════
// SERVER DEFAULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Default port for the HTTP server.
pub const DEFAULT_PORT: u16 = 4000;

/// Default bind address for the HTTP server.
pub const DEFAULT_BIND: &str = "0.0.0.0";
