//! Page domain model.
//!
//! A page is any stored content unit: a standalone marketing page, a blog post
//! or a service page. The slug is its natural key for route resolution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::validate_slug;
use validator::Validate;

/// Kind of stored content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    #[default]
    Page,
    Blog,
    Service,
}

impl std::fmt::Display for PageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageType::Page => write!(f, "page"),
            PageType::Blog => write!(f, "blog"),
            PageType::Service => write!(f, "service"),
        }
    }
}

/// Robots directive. Only the two combinations the site emits are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RobotsDirective {
    #[default]
    #[serde(rename = "index, follow")]
    IndexFollow,
    #[serde(rename = "noindex, nofollow")]
    NoindexNofollow,
}

impl RobotsDirective {
    pub fn as_str(&self) -> &'static str {
        match self {
            RobotsDirective::IndexFollow => "index, follow",
            RobotsDirective::NoindexNofollow => "noindex, nofollow",
        }
    }

    pub fn is_indexable(&self) -> bool {
        matches!(self, RobotsDirective::IndexFollow)
    }
}

impl std::fmt::Display for RobotsDirective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SEO metadata embedded in a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct SeoMetadata {
    #[validate(length(min = 1, max = 200, message = "SEO title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 1000, message = "SEO description must be at most 1000 characters"))]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Canonical URL must be a valid URL"))]
    pub canonical_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,

    #[serde(default)]
    pub robots: RobotsDirective,

    /// Raw structured-data payload, emitted verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_ld: Option<String>,
}

impl SeoMetadata {
    /// Indexable metadata with just a title and description.
    pub fn basic(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            canonical_url: None,
            og_image: None,
            robots: RobotsDirective::IndexFollow,
            json_ld: None,
        }
    }
}

/// A stored page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Page {
    pub id: String,
    pub slug: String,
    pub title: String,
    /// Raw markup rendered as-is by the client.
    pub content: String,
    pub is_published: bool,
    pub page_type: PageType,
    pub seo: SeoMetadata,
    pub last_modified: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
}

impl Page {
    /// Builds a stored page from an editor draft.
    pub fn from_draft(draft: PageDraft, id: String, last_modified: DateTime<Utc>) -> Self {
        Self {
            id,
            slug: draft.slug,
            title: draft.title,
            content: draft.content,
            is_published: draft.is_published,
            page_type: draft.page_type,
            seo: draft.seo,
            last_modified,
            author: draft.author,
            category: draft.category,
            tags: draft.tags,
            featured_image: draft.featured_image,
        }
    }

    /// Returns the editable part of the page, keeping its id.
    pub fn to_draft(&self) -> PageDraft {
        PageDraft {
            id: self.id.clone(),
            slug: self.slug.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
            is_published: self.is_published,
            page_type: self.page_type,
            seo: self.seo.clone(),
            author: self.author.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            featured_image: self.featured_image.clone(),
        }
    }
}

/// Editor payload for saving a page.
///
/// An empty `id` means create; otherwise the page with that id is replaced.
/// `last_modified` is never accepted from the caller.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct PageDraft {
    #[serde(default)]
    pub id: String,

    #[validate(custom(function = "validate_slug"))]
    pub slug: String,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub is_published: bool,

    #[serde(default)]
    pub page_type: PageType,

    #[validate(nested)]
    pub seo: SeoMetadata,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub featured_image: Option<String>,
}

impl PageDraft {
    /// Whether saving this draft creates a new page.
    pub fn is_new(&self) -> bool {
        self.id.trim().is_empty()
    }
}

/// Response listing pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListPagesResponse {
    pub pages: Vec<Page>,
    pub total: usize,
}
