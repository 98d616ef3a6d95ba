//! DTOs for API requests and responses.

use serde::{Deserialize, Serialize};

use certgate_cache::CacheStats;
use certgate_core::types::CertStatus;

/// Request body for the certification lookup.
#[derive(Debug, Deserialize)]
pub struct IsCertifiedRequest {
    /// Public key to look up. Required and non-empty.
    #[serde(default)]
    pub public_key: Option<String>,
}

/// Response for the certification lookup.
#[derive(Debug, Serialize)]
pub struct IsCertifiedResponse {
    /// Certification status, `"not-certified"` when unknown
    pub status: CertStatus,
}

/// Response for the health check.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the server is running
    pub status: String,
    /// Crate version
    pub version: String,
    /// Seconds since the server started
    pub uptime_seconds: u64,
    /// Certification cache statistics
    pub cache: CacheStats,
}
