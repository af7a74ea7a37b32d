//! Site configuration repository.

use domain::models::SiteConfig;
use tracing::info;

use crate::keys::CONFIG_KEY;
use crate::store::{Store, StoreError};

/// Repository for the single site-wide configuration object.
#[derive(Clone, Debug)]
pub struct SiteConfigRepository {
    store: Store,
}

impl SiteConfigRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// The stored config, or the built-in default when absent or unreadable.
    pub fn get_config(&self) -> Result<SiteConfig, StoreError> {
        self.store.read_or(CONFIG_KEY, SiteConfig::default())
    }

    /// Replaces the whole config.
    pub fn save_config(&self, config: &SiteConfig) -> Result<(), StoreError> {
        let _guard = self.store.lock_writes()?;
        self.store.write(CONFIG_KEY, config)?;
        info!("Site config saved");
        Ok(())
    }
}
