//! API route handlers.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::{debug, info, warn};

use certgate_core::types::CertStatus;

use crate::dto::*;
use crate::error::ApiError;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

/// POST /is-certified
///
/// Consults the cache first; on a miss the certification source is invoked
/// with no cache lock held, and the normalized result is cached for the
/// configured TTL. A failed query is indistinguishable from a genuine
/// negative in the response, but is logged with its diagnostics here.
pub async fn is_certified(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IsCertifiedRequest>,
) -> Result<Json<IsCertifiedResponse>> {
    let public_key = match req.public_key.as_deref() {
        Some(pk) if !pk.is_empty() => pk.to_string(),
        _ => return Err(ApiError::bad_request("Public key is required")),
    };

    if let Some(status) = state.cache.get(&public_key) {
        debug!(%public_key, status = %status, "Cache hit");
        return Ok(Json(IsCertifiedResponse { status }));
    }

    let status = match state.source.query(&public_key).await {
        Ok(raw) => CertStatus::from_query_output(&raw),
        Err(err) => {
            warn!(
                %public_key,
                error = %err,
                "Certification query failed, caching not-certified"
            );
            CertStatus::not_certified()
        }
    };

    state.cache.put(&public_key, status.clone());
    info!(%public_key, status = %status, "Cached certification status");

    Ok(Json(IsCertifiedResponse { status }))
}

/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        cache: state.cache.stats(),
    })
}
