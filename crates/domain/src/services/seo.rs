//! SEO head computation.
//!
//! Turns stored `SeoMetadata` into the full set of head tags a client writes
//! into the document: title, description, canonical link, robots, Open Graph
//! and JSON-LD.

use serde::Serialize;

use crate::models::{RobotsDirective, SeoMetadata};

/// Head tags for one rendered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SeoHead {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub robots: RobotsDirective,
    pub og_title: String,
    pub og_description: String,
    pub og_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_ld: Option<String>,
}

impl SeoHead {
    /// Builds head tags for a view served at `page_url`.
    ///
    /// The canonical link falls back to the page URL when the metadata has none.
    /// The Open Graph title mirrors the document title.
    pub fn build(seo: &SeoMetadata, page_url: &str) -> Self {
        let title = seo.title.clone();

        Self {
            title: title.clone(),
            description: seo.description.clone(),
            canonical_url: seo
                .canonical_url
                .clone()
                .unwrap_or_else(|| page_url.to_string()),
            robots: seo.robots,
            og_title: title,
            og_description: seo.description.clone(),
            og_url: page_url.to_string(),
            og_image: seo.og_image.clone(),
            json_ld: seo.json_ld.clone(),
        }
    }

    pub fn is_indexable(&self) -> bool {
        self.robots.is_indexable()
    }
}

/// Joins the configured site base URL and a path into an absolute URL.
pub fn page_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Metadata for the not-found view. Never indexable.
pub fn not_found_seo() -> SeoMetadata {
    SeoMetadata {
        robots: RobotsDirective::NoindexNofollow,
        ..SeoMetadata::basic("404 Not Found", "Page not found")
    }
}

/// Home metadata used when no page is stored under `/`.
pub fn default_home_seo() -> SeoMetadata {
    SeoMetadata::basic("JAITEA - Best Tea Franchise", "Join JAITEA")
}

pub fn blog_index_seo() -> SeoMetadata {
    SeoMetadata::basic(
        "Blog & Insights - JAITEA Franchise",
        "Latest news, trends, and business insights from the tea industry.",
    )
}

pub fn franchise_seo() -> SeoMetadata {
    SeoMetadata::basic(
        "Apply for Franchise | JAITEA",
        "Start your own business with JAITEA. Low investment franchise model.",
    )
}

/// Admin screens are never indexed.
pub fn admin_seo(title: &str) -> SeoMetadata {
    SeoMetadata {
        robots: RobotsDirective::NoindexNofollow,
        ..SeoMetadata::basic(title, "JAITEA partner console")
    }
}
