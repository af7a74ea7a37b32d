//! Public site endpoints: route resolution and site-wide configuration.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use domain::models::{
    HomeContent, NavigationLink, Page, PageType, SeoMetadata, SiteConfig, BRAND_NAME,
    FRANCHISE_BENEFITS, NAVIGATION_LINKS,
};
use domain::services::seo::{
    admin_seo, blog_index_seo, default_home_seo, franchise_seo, not_found_seo,
};
use domain::services::{page_url, resolve_route, Resolution, ResolveOptions, SeoHead, StaticRoute};
use persistence::repositories::{PageRepository, SiteConfigRepository};
use persistence::{Store, StoreError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::OptionalAdminSession;
use crate::services::run_blocking;

/// Slug of the page rendered with an embedded office map.
const CONTACT_SLUG: &str = "/contact";

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_path() -> String {
    "/".to_string()
}

/// What the client should render for a path.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    Home {
        home: HomeContent,
    },
    Franchise {
        benefits: Vec<&'static str>,
    },
    BlogIndex {
        posts: Vec<Page>,
    },
    Page {
        page: Box<Page>,
        show_contact_map: bool,
    },
    AdminLogin,
    Admin {
        screen: StaticRoute,
    },
    Redirect {
        to: &'static str,
    },
    NotFound,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ResolveResponse {
    pub path: String,
    pub view: View,
    pub seo: SeoHead,
}

/// GET /api/v1/site/resolve?path=/about
///
/// Static routes win over stored pages; anything else is looked up by exact
/// slug. Unknown paths answer 404 with a non-indexable not-found view.
pub async fn resolve(
    State(state): State<AppState>,
    session: OptionalAdminSession,
    Query(query): Query<ResolveQuery>,
) -> Result<(StatusCode, Json<ResolveResponse>), ApiError> {
    let options = ResolveOptions {
        has_admin_session: session.is_present(),
        enforce_publish_gate: state.config.site.enforce_publish_gate,
    };
    let store = state.store.clone();
    let path = query.path.clone();

    let (status, view, seo) = run_blocking(move || resolve_view(&store, &path, options)).await?;

    debug!(path = %query.path, status = status.as_u16(), "Route resolved");

    let url = page_url(&state.config.server.base_url, &query.path);
    Ok((
        status,
        Json(ResolveResponse {
            seo: SeoHead::build(&seo, &url),
            path: query.path,
            view,
        }),
    ))
}

/// Maps a path to its view and SEO metadata. Runs on the blocking pool.
fn resolve_view(
    store: &Store,
    path: &str,
    options: ResolveOptions,
) -> Result<(StatusCode, View, SeoMetadata), StoreError> {
    let pages = PageRepository::new(store.clone());
    let resolution = resolve_route(path, options, |slug| pages.get_page_by_slug(slug))?;

    let resolved = match resolution {
        Resolution::Static(StaticRoute::Home) => {
            let seo = pages
                .get_page_by_slug(StaticRoute::Home.path())?
                .map(|page| page.seo)
                .unwrap_or_else(default_home_seo);
            let config = SiteConfigRepository::new(store.clone()).get_config()?;
            (StatusCode::OK, View::Home { home: config.home }, seo)
        }
        Resolution::Static(StaticRoute::Franchise) => (
            StatusCode::OK,
            View::Franchise {
                benefits: FRANCHISE_BENEFITS.to_vec(),
            },
            franchise_seo(),
        ),
        Resolution::Static(StaticRoute::BlogIndex) => (
            StatusCode::OK,
            View::BlogIndex {
                posts: pages.list_published(PageType::Blog)?,
            },
            blog_index_seo(),
        ),
        Resolution::Static(StaticRoute::AdminLogin) => {
            (StatusCode::OK, View::AdminLogin, admin_seo("Admin Login"))
        }
        Resolution::Static(screen) => (
            StatusCode::OK,
            View::Admin { screen },
            admin_seo("Admin Console"),
        ),
        Resolution::Page(page) => {
            let seo = page.seo.clone();
            let show_contact_map = page.slug == CONTACT_SLUG;
            (
                StatusCode::OK,
                View::Page {
                    page,
                    show_contact_map,
                },
                seo,
            )
        }
        Resolution::Redirect { to } => {
            (StatusCode::OK, View::Redirect { to }, admin_seo("Admin Login"))
        }
        Resolution::NotFound => (StatusCode::NOT_FOUND, View::NotFound, not_found_seo()),
    };

    Ok(resolved)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SiteConfigResponse {
    pub brand: &'static str,
    pub navigation: Vec<NavigationLink>,
    pub config: SiteConfig,
}

/// GET /api/v1/site/config
///
/// Brand, navigation and the editable site config used by header, footer and
/// contact blocks.
pub async fn get_site_config(
    State(state): State<AppState>,
) -> Result<Json<SiteConfigResponse>, ApiError> {
    let repo = SiteConfigRepository::new(state.store.clone());
    let config = run_blocking(move || repo.get_config()).await?;

    Ok(Json(SiteConfigResponse {
        brand: BRAND_NAME,
        navigation: NAVIGATION_LINKS.to_vec(),
        config,
    }))
}
