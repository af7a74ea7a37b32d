//! Domain services for the franchise site.
//!
//! Services contain logic that operates on domain models without touching
//! storage or the network directly.

pub mod lead_relay;
pub mod route_resolution;
pub mod seo;

pub use lead_relay::{LeadRelay, LeadRelayPayload, MockLeadRelay, RelayError};
pub use route_resolution::{
    resolve_route, Resolution, ResolveOptions, StaticRoute, ADMIN_LOGIN_PATH,
};
pub use seo::{page_url, SeoHead};
