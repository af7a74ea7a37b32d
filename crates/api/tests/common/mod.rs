//! Common test utilities for integration tests.
//!
//! Every test gets its own seeded in-memory store, so tests never share state.

// Not every helper is used by every test binary.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use domain::services::{LeadRelay, MockLeadRelay};
use franchise_cms_api::{
    app::create_app,
    config::{
        AdminConfig, Config, LoggingConfig, RelayConfig, SecurityConfig, ServerConfig,
        SiteBehaviorConfig, StorageBackend, StorageConfig,
    },
};
use persistence::Store;
use std::sync::{Arc, OnceLock};
use tower::ServiceExt;

pub const TEST_ADMIN_PASSWORD: &str = "chai-admin-test";
pub const TEST_SESSION_SECRET: &str = "test-session-secret-at-least-32-characters";

/// Argon2 hashing is slow; hash the test password once per test binary.
fn test_password_hash() -> String {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| {
        shared::password::hash_admin_password(TEST_ADMIN_PASSWORD)
            .expect("Failed to hash test password")
    })
    .clone()
}

/// Create a test configuration backed by the in-memory store.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
            base_url: "https://jaitea.com".to_string(),
        },
        storage: StorageConfig {
            backend: StorageBackend::Memory,
            data_dir: "data".into(),
            max_value_bytes: persistence::store::DEFAULT_MAX_VALUE_BYTES,
        },
        logging: LoggingConfig {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig {
            cors_origins: vec![],
            hsts_enabled: false,
        },
        admin: AdminConfig {
            password_hash: test_password_hash(),
            session_secret: TEST_SESSION_SECRET.to_string(),
            session_ttl_secs: 3600,
        },
        relay: RelayConfig::default(),
        site: SiteBehaviorConfig::default(),
    }
}

/// A store that has gone through first-run seeding.
pub fn seeded_store() -> Store {
    let store = Store::in_memory();
    store
        .initialize_if_empty()
        .expect("Failed to seed test store");
    store
}

/// Create a test app with the given config, store and relay.
pub fn create_test_app_with(config: Config, store: Store, relay: Arc<dyn LeadRelay>) -> Router {
    create_app(config, store, relay)
}

/// Create a test app over a freshly seeded store with a succeeding relay.
pub fn create_test_app() -> (Router, Store) {
    let store = seeded_store();
    let app = create_app(test_config(), store.clone(), Arc::new(MockLeadRelay::new()));
    (app, store)
}

/// Parse response body as JSON.
pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}

/// Create a GET request, optionally carrying an admin bearer token.
pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

/// Create a JSON request, optionally carrying an admin bearer token.
pub fn json_request(
    method: Method,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Log in with the test password and return the session token.
pub async fn login_token(app: &Router) -> String {
    let request = json_request(
        Method::POST,
        "/api/v1/admin/login",
        serde_json::json!({ "password": TEST_ADMIN_PASSWORD }),
        None,
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK, "login failed");

    let body = parse_response_body(response).await;
    body["token"].as_str().unwrap().to_string()
}

/// Resolve a site path and return the status with the parsed body.
pub async fn resolve(
    app: &Router,
    path: &str,
    token: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let uri = format!("/api/v1/site/resolve?path={}", path);
    let response = app.clone().oneshot(get_request(&uri, token)).await.unwrap();
    let status = response.status();
    (status, parse_response_body(response).await)
}

/// A valid draft body for the admin page endpoints.
pub fn page_draft(slug: &str, title: &str, is_published: bool) -> serde_json::Value {
    serde_json::json!({
        "slug": slug,
        "title": title,
        "content": format!("<p>{}</p>", title),
        "is_published": is_published,
        "page_type": "page",
        "seo": {
            "title": format!("{} | JAITEA", title),
            "description": format!("All about {}", title),
            "robots": "index, follow"
        }
    })
}
