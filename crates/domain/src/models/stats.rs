//! Admin dashboard statistics.

use serde::{Deserialize, Serialize};

use super::lead::{Lead, LeadStatus};
use super::page::{Page, PageType};

/// SEO quality score shown on the dashboard. Not derived from content yet.
pub const PLACEHOLDER_SEO_SCORE: u32 = 92;

/// Aggregate counts over the current pages and leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AdminStats {
    pub total_pages: usize,
    pub total_blogs: usize,
    pub total_services: usize,
    pub total_leads: usize,
    pub new_leads: usize,
    pub seo_score: u32,
}

impl AdminStats {
    /// Computes stats from the given collections. Nothing is cached.
    pub fn compute(pages: &[Page], leads: &[Lead]) -> Self {
        let count_type = |t: PageType| pages.iter().filter(|p| p.page_type == t).count();

        Self {
            total_pages: count_type(PageType::Page),
            total_blogs: count_type(PageType::Blog),
            total_services: count_type(PageType::Service),
            total_leads: leads.len(),
            new_leads: leads
                .iter()
                .filter(|l| l.status == LeadStatus::New)
                .count(),
            seo_score: PLACEHOLDER_SEO_SCORE,
        }
    }
}
