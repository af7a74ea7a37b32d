//! Lead repository.

use chrono::Utc;
use domain::models::{Lead, LeadStatus, NewLead};
use tracing::info;
use uuid::Uuid;

use crate::keys::LEADS_KEY;
use crate::store::{Store, StoreError};

/// Repository for captured leads. Leads are kept most recent first.
#[derive(Clone, Debug)]
pub struct LeadRepository {
    store: Store,
}

impl LeadRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn list_leads(&self) -> Result<Vec<Lead>, StoreError> {
        self.store.read(LEADS_KEY)
    }

    pub fn list_by_status(&self, status: LeadStatus) -> Result<Vec<Lead>, StoreError> {
        Ok(self
            .list_leads()?
            .into_iter()
            .filter(|l| l.status == status)
            .collect())
    }

    /// Stores a new lead at the front of the list with status `NEW`.
    pub fn add_lead(&self, input: NewLead) -> Result<Lead, StoreError> {
        let _guard = self.store.lock_writes()?;
        let mut leads: Vec<Lead> = self.store.read(LEADS_KEY)?;

        let lead = Lead {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            message: input.message,
            lead_type: input.lead_type,
            status: LeadStatus::New,
            created_at: Utc::now(),
        };
        leads.insert(0, lead.clone());

        self.store.write(LEADS_KEY, &leads)?;

        info!(lead_id = %lead.id, lead_type = %lead.lead_type, "Lead captured");
        Ok(lead)
    }

    /// Sets a lead's status. Any transition is allowed.
    ///
    /// Returns `None` without writing when no lead has `id`.
    pub fn update_lead_status(
        &self,
        id: &str,
        status: LeadStatus,
    ) -> Result<Option<Lead>, StoreError> {
        let _guard = self.store.lock_writes()?;
        let mut leads: Vec<Lead> = self.store.read(LEADS_KEY)?;

        let Some(lead) = leads.iter_mut().find(|l| l.id == id) else {
            return Ok(None);
        };
        let previous = lead.status;
        lead.status = status;
        let updated = lead.clone();

        self.store.write(LEADS_KEY, &leads)?;

        info!(
            lead_id = %id,
            from = %previous,
            to = %status,
            "Lead status updated"
        );
        Ok(Some(updated))
    }
}
