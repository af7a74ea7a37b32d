//! Dashboard statistics over the stored collections.

use domain::models::{AdminStats, Lead, Page};

use crate::keys::{LEADS_KEY, PAGES_KEY};
use crate::store::{Store, StoreError};

#[derive(Clone, Debug)]
pub struct StatsRepository {
    store: Store,
}

impl StatsRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Recomputed from the current pages and leads on every call.
    pub fn compute_stats(&self) -> Result<AdminStats, StoreError> {
        let pages: Vec<Page> = self.store.read(PAGES_KEY)?;
        let leads: Vec<Lead> = self.store.read(LEADS_KEY)?;
        Ok(AdminStats::compute(&pages, &leads))
    }
}
