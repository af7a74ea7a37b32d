//! Domain models for the franchise site.

pub mod lead;
pub mod page;
pub mod session;
pub mod site;
pub mod site_config;
pub mod stats;

pub use lead::{
    Lead, LeadStatus, LeadType, ListLeadsQuery, ListLeadsResponse, NewLead,
    UpdateLeadStatusRequest,
};
pub use page::{ListPagesResponse, Page, PageDraft, PageType, RobotsDirective, SeoMetadata};
pub use session::{LoginRequest, LoginResponse};
pub use site::{NavigationLink, BRAND_NAME, FRANCHISE_BENEFITS, NAVIGATION_LINKS};
pub use site_config::{ContactInfo, HomeContent, HomeStat, SiteConfig};
pub use stats::{AdminStats, PLACEHOLDER_SEO_SCORE};
