//! Shared test plumbing: a stub provider, the full middleware stack, and
//! small HTTP helpers driving the router via `tower::ServiceExt`.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use techweek_api::config::ServerConfig;
use techweek_api::routes;
use techweek_api::state::AppState;
use techweek_lifecycle::LifecycleService;
use techweek_luma::{
    CreateRemoteEvent, CreatedEvent, EventProvider, HostResult, LumaError, RemoteEvent, Visibility,
};
use techweek_notify::EmailQueue;

/// Always-reachable [`EventProvider`] handing out sequential IDs.
#[derive(Default)]
pub struct StubProvider {
    next_id: AtomicU64,
    /// When set, `update_visibility` fails with a 500, so publish aborts.
    pub fail_visibility: AtomicBool,
}

impl StubProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait::async_trait]
impl EventProvider for StubProvider {
    async fn create_event(&self, _input: &CreateRemoteEvent) -> Result<CreatedEvent, LumaError> {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(CreatedEvent {
            url: format!("https://lu.ma/evt-{n}"),
            api_id: format!("evt-{n}"),
            created_at: Utc::now(),
        })
    }

    async fn get_event(&self, api_id: &str) -> Result<RemoteEvent, LumaError> {
        Err(LumaError::NotFound {
            event_id: api_id.to_string(),
        })
    }

    async fn update_visibility(
        &self,
        _api_id: &str,
        _visibility: Visibility,
    ) -> Result<(), LumaError> {
        if self.fail_visibility.load(Ordering::SeqCst) {
            return Err(LumaError::Api {
                status: 500,
                body: "stub provider failure".to_string(),
            });
        }
        Ok(())
    }

    async fn add_hosts(
        &self,
        _api_id: &str,
        emails: &[String],
    ) -> Result<Vec<HostResult>, LumaError> {
        Ok(emails
            .iter()
            .map(|email| HostResult {
                email: email.clone(),
                success: true,
                error: None,
            })
            .collect())
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the application router with the default stub provider.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, StubProvider::new())
}

/// Build the full application router with all middleware layers, using the
/// given database pool and provider.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses. Email delivery is suppressed.
pub fn build_test_app_with(pool: PgPool, provider: Arc<dyn EventProvider>) -> Router {
    let lifecycle =
        LifecycleService::new(pool.clone(), provider, EmailQueue::new(pool.clone(), None));

    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        lifecycle,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
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

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a bodyless POST request.
pub async fn post(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid submission payload for POST /api/v1/events.
pub fn sample_submission(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "A monthly community meetup about Rust.",
        "commune": "Providencia",
        "format": "meetup",
        "capacity": 80,
        "organizer_name": "Ana",
        "organizer_email": "ana@example.com",
        "start_at": "2025-11-17T21:00:00Z",
        "end_at": "2025-11-18T00:00:00Z"
    })
}
