//! Shared helpers for API integration tests: a full app router with stubbed
//! pipeline collaborators, plus request plumbing.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use pawprints_api::auth::jwt::{generate_access_token, JwtConfig};
use pawprints_api::config::ServerConfig;
use pawprints_api::routes;
use pawprints_api::state::AppState;
use pawprints_core::types::DbId;
use pawprints_db::repositories::CalendarRepo;
use pawprints_notify::EmailError;
use pawprints_openai::images::ImagesError;
use pawprints_openai::vision::VisionError;
use pawprints_pipeline::adapters::PgGenerationStore;
use pawprints_pipeline::ports::{
    CompletionNotifier, ImageSynthesizer, MonthArtifactStore, SubjectDescriber,
};
use pawprints_pipeline::{Orchestrator, PipelineConfig};
use pawprints_storage::StorageError;

/// Shared JWT secret for test tokens.
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// `Authorization` header value for a test user.
pub fn bearer(user_id: DbId, email: &str) -> String {
    let token = generate_access_token(user_id, email, &test_config().jwt)
        .expect("token generation should not fail");
    format!("Bearer {token}")
}

// ---------------------------------------------------------------------------
// Stubbed pipeline collaborators
// ---------------------------------------------------------------------------

/// Describer returning a fixed description for every photo.
struct StubDescriber;

#[async_trait]
impl SubjectDescriber for StubDescriber {
    async fn describe(&self, _photo_url: &str) -> Result<String, VisionError> {
        Ok("a small tan terrier with pointed ears".to_string())
    }
}

/// Synthesizer returning fixed bytes instantly.
struct StubSynthesizer;

#[async_trait]
impl ImageSynthesizer for StubSynthesizer {
    async fn synthesize(&self, _prompt: &str) -> Result<Vec<u8>, ImagesError> {
        Ok(vec![0x89, 0x50, 0x4E, 0x47])
    }
}

/// Artifact store skipping the blob upload but writing the real row, so the
/// read path sees exactly what production would.
struct StubArtifacts {
    pool: PgPool,
}

#[async_trait]
impl MonthArtifactStore for StubArtifacts {
    async fn store_month(
        &self,
        generation_id: DbId,
        month: u32,
        _bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        let key = pawprints_core::calendar::artifact_key(generation_id, month);
        let url = format!("https://cdn.test/{key}");
        CalendarRepo::upsert(&self.pool, generation_id, month as i32, &url).await?;
        Ok(url)
    }
}

/// Notifier that swallows deliveries.
struct StubNotifier;

#[async_trait]
impl CompletionNotifier for StubNotifier {
    async fn deliver(
        &self,
        _to_email: &str,
        _calendar_title: &str,
        _status: &str,
        _months_succeeded: u32,
    ) -> Result<(), EmailError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build the full application router with all middleware layers, using the
/// given database pool and stubbed external services.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let orchestrator = Arc::new(Orchestrator::new(
        Arc::new(PgGenerationStore::new(pool.clone())),
        Arc::new(StubDescriber),
        Arc::new(StubSynthesizer),
        Arc::new(StubArtifacts { pool: pool.clone() }),
        Arc::new(StubNotifier),
        PipelineConfig::immediate(),
    ));

    let state = AppState {
        pool,
        config: Arc::new(config),
        orchestrator,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request plumbing
// ---------------------------------------------------------------------------

/// Send one request to the app and return `(status, parsed JSON body)`.
pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    auth: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = auth {
        builder = builder.header("authorization", value);
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request construction should not fail");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should produce a response");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();

    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}
