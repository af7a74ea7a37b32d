//! Route resolution for public and admin navigation.
//!
//! A path resolves in this order:
//! 1. Static routes (fixed table, always win)
//! 2. Stored pages, by exact slug match
//! 3. Not found
//!
//! A stored page whose slug equals a static path is therefore unreachable.

use serde::Serialize;

use crate::models::Page;

/// Path of the admin login screen; protected admin routes redirect here.
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

/// Routes rendered by dedicated views rather than stored content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StaticRoute {
    Home,
    Franchise,
    BlogIndex,
    AdminDashboard,
    AdminLogin,
    AdminLeads,
    AdminPages,
    AdminSettings,
}

impl StaticRoute {
    pub const ALL: [StaticRoute; 8] = [
        StaticRoute::Home,
        StaticRoute::Franchise,
        StaticRoute::BlogIndex,
        StaticRoute::AdminDashboard,
        StaticRoute::AdminLogin,
        StaticRoute::AdminLeads,
        StaticRoute::AdminPages,
        StaticRoute::AdminSettings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            StaticRoute::Home => "/",
            StaticRoute::Franchise => "/franchise",
            StaticRoute::BlogIndex => "/blog",
            StaticRoute::AdminDashboard => "/admin",
            StaticRoute::AdminLogin => ADMIN_LOGIN_PATH,
            StaticRoute::AdminLeads => "/admin/leads",
            StaticRoute::AdminPages => "/admin/pages",
            StaticRoute::AdminSettings => "/admin/settings",
        }
    }

    /// Exact, case-sensitive lookup in the static table.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Whether the route sits behind the admin session guard.
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            StaticRoute::AdminDashboard
                | StaticRoute::AdminLeads
                | StaticRoute::AdminPages
                | StaticRoute::AdminSettings
        )
    }
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Static(StaticRoute),
    Page(Box<Page>),
    Redirect { to: &'static str },
    NotFound,
}

/// Request-dependent inputs to resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    /// Whether the request carries a valid admin session.
    pub has_admin_session: bool,
    /// When set, unpublished pages resolve to not found.
    pub enforce_publish_gate: bool,
}

/// Resolves `path` against the static table and, failing that, `find_page`.
///
/// `find_page` is only consulted for non-static paths and receives the path
/// unchanged: no trailing-slash or case normalization happens here.
pub fn resolve_route<E, F>(
    path: &str,
    options: ResolveOptions,
    find_page: F,
) -> Result<Resolution, E>
where
    F: FnOnce(&str) -> Result<Option<Page>, E>,
{
    if let Some(route) = StaticRoute::from_path(path) {
        if route.requires_admin() && !options.has_admin_session {
            return Ok(Resolution::Redirect {
                to: ADMIN_LOGIN_PATH,
            });
        }
        return Ok(Resolution::Static(route));
    }

    match find_page(path)? {
        Some(page) if options.enforce_publish_gate && !page.is_published => {
            Ok(Resolution::NotFound)
        }
        Some(page) => Ok(Resolution::Page(Box::new(page))),
        None => Ok(Resolution::NotFound),
    }
}
