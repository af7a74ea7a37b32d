//! Repository implementations over the key-value store.

pub mod lead;
pub mod page;
pub mod site_config;
pub mod stats;

use thiserror::Error;

use crate::store::StoreError;

pub use lead::LeadRepository;
pub use page::PageRepository;
pub use site_config::SiteConfigRepository;
pub use stats::StatsRepository;

/// Errors raised by repository mutations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Slug '{slug}' is already used by page {existing_id}")]
    SlugConflict { slug: String, existing_id: String },
}
