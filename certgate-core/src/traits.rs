//! Common traits for certgate.
//!
//! These traits define the interfaces that different implementations can
//! satisfy, enabling modularity and testing.

use async_trait::async_trait;

use crate::error::Result;

// ═══════════════════════════════════════════════════════════════════════════════
// CERTIFICATION SOURCE TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface for looking up the certification status of a public key.
///
/// Implementations might use:
/// - A node-query script (production, see `certgate-query`)
/// - A scripted in-memory source (for testing the HTTP layer)
///
/// The raw result is returned as-is; the caller is responsible for
/// normalizing it (see [`crate::types::CertStatus::from_query_output`]).
/// Implementations must not hold any shared lock while the lookup is in
/// flight: the lookup may block for the duration of a subprocess or
/// network round trip.
#[async_trait]
pub trait CertificationSource: Send + Sync {
    /// Queries the certification status of `public_key`.
    ///
    /// Returns the raw, un-normalized result text on success.
    async fn query(&self, public_key: &str) -> Result<String>;
}
