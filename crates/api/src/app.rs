use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use domain::services::LeadRelay;
use persistence::Store;
use shared::session::SessionConfig;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, require_admin, security_headers_middleware, trace_id,
};
use crate::routes::{
    admin, admin_leads, admin_pages, admin_settings, blog, health, leads, site,
};
use crate::services::AdminAuthService;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Arc<Config>,
    /// `None` when the relay is disabled in config.
    pub relay: Option<Arc<dyn LeadRelay>>,
    pub sessions: Arc<SessionConfig>,
    pub auth: AdminAuthService,
}

impl AppState {
    pub fn new(config: Config, store: Store, relay: Arc<dyn LeadRelay>) -> Self {
        let sessions = Arc::new(SessionConfig::new(
            &config.admin.session_secret,
            config.admin.session_ttl_secs,
        ));
        let auth = AdminAuthService::new(&config.admin.password_hash, sessions.clone());

        Self {
            store,
            relay: config.relay.enabled.then_some(relay),
            config: Arc::new(config),
            sessions,
            auth,
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        // Development default: allow any origin.
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

pub fn create_app(config: Config, store: Store, relay: Arc<dyn LeadRelay>) -> Router {
    let state = AppState::new(config, store, relay);
    let config = state.config.clone();

    // Admin routes (require a valid admin session)
    let admin_routes = Router::new()
        .route("/api/v1/admin/stats", get(admin::get_stats))
        .route(
            "/api/v1/admin/pages",
            get(admin_pages::list_pages).post(admin_pages::create_page),
        )
        .route(
            "/api/v1/admin/pages/:id",
            get(admin_pages::get_page)
                .put(admin_pages::update_page)
                .delete(admin_pages::delete_page),
        )
        .route("/api/v1/admin/leads", get(admin_leads::list_leads))
        .route(
            "/api/v1/admin/leads/:id/status",
            patch(admin_leads::update_lead_status),
        )
        .route(
            "/api/v1/admin/settings",
            get(admin_settings::get_settings).put(admin_settings::update_settings),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler))
        .route("/api/v1/site/resolve", get(site::resolve))
        .route("/api/v1/site/config", get(site::get_site_config))
        .route("/api/v1/blog", get(blog::list_posts))
        .route("/api/v1/leads", post(leads::submit))
        .route("/api/v1/admin/login", post(admin::login));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors_layer(&config.security.cors_origins))
        .with_state(state)
}
