//! API route configuration.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Certification lookup
        .route("/is-certified", post(handlers::is_certified))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use certgate_core::error::CertgateError;
    use certgate_core::traits::CertificationSource;
    use crate::state::ApiConfig;

    /// Scripted certification source that counts invocations.
    struct MockSource {
        reply: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl MockSource {
        fn replying(reply: &'static str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(reply),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CertificationSource for MockSource {
        async fn query(&self, _public_key: &str) -> certgate_core::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Some(reply) => Ok(reply.to_string()),
                None => Err(CertgateError::QueryFailed("node unreachable".into())),
            }
        }
    }

    fn test_config() -> ApiConfig {
        ApiConfig {
            node_address: "http://node:7777".into(),
            contract_hash: "hash-1234".into(),
            query_script: "./get-account-info.sh".into(),
            query_timeout_secs: 5,
            cache_capacity: 16,
            cache_ttl_seconds: 3600,
        }
    }

    fn test_app(source: Arc<MockSource>) -> Router {
        let state = Arc::new(AppState::with_source(test_config(), source));
        create_router(state)
    }

    fn lookup_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/is-certified")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = test_app(MockSource::replying("True"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["cache"]["capacity"], 16);
    }

    #[tokio::test]
    async fn test_lookup_returns_query_result() {
        let app = test_app(MockSource::replying("True\n"));

        let response = app
            .oneshot(lookup_request(json!({"public_key": "abc"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "True"}));
    }

    #[tokio::test]
    async fn test_lookup_second_request_hits_cache() {
        let source = MockSource::replying("True");
        let app = test_app(source.clone());

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(lookup_request(json!({"public_key": "abc"})))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_json(response).await, json!({"status": "True"}));
        }

        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_lookup_missing_public_key() {
        let source = MockSource::replying("True");
        let app = test_app(source.clone());

        let response = app.oneshot(lookup_request(json!({}))).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Public key is required"})
        );
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_lookup_empty_public_key() {
        let app = test_app(MockSource::replying("True"));

        let response = app
            .oneshot(lookup_request(json!({"public_key": ""})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Public key is required"})
        );
    }

    #[tokio::test]
    async fn test_lookup_query_failure_is_not_certified() {
        let source = MockSource::failing();
        let app = test_app(source.clone());

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(lookup_request(json!({"public_key": "abc"})))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_json(response).await, json!({"status": "not-certified"}));
        }

        // The failure result was cached; the script was not retried
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_lookup_normalizes_false_literal() {
        let app = test_app(MockSource::replying("False"));

        let response = app
            .oneshot(lookup_request(json!({"public_key": "abc"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "not-certified"}));
    }

    #[tokio::test]
    async fn test_lookup_distinct_keys_query_separately() {
        let source = MockSource::replying("True");
        let app = test_app(source.clone());

        for key in ["abc", "def"] {
            let response = app
                .clone()
                .oneshot(lookup_request(json!({"public_key": key})))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        assert_eq!(source.calls(), 2);
    }
}
