//! Report repository: tenant-scoped, ordered reads over a [`TransactionRepository`]

use chrono::NaiveDate;

use crate::traits::*;
use crate::types::*;
use crate::utils::validation::{parse_as_date, validate_party_ids};

/// Reads the entries and parties a balance summary is computed from
#[derive(Debug, Clone)]
pub struct ReportRepository<R: TransactionRepository> {
    storage: R,
}

impl<R: TransactionRepository> ReportRepository<R> {
    /// Create a new report repository over a storage backend
    pub fn new(storage: R) -> Self {
        Self { storage }
    }

    /// Access the underlying storage
    pub fn storage(&self) -> &R {
        &self.storage
    }

    async fn ensure_tenant(&self, tenant_id: TenantId) -> ReportResult<()> {
        if self.storage.tenant_exists(tenant_id).await? {
            Ok(())
        } else {
            Err(ReportError::NotFound(format!("Tenant {}", tenant_id)))
        }
    }

    /// Entries up to `as_date`, sorted by date then creation order
    pub async fn get_party_entries(
        &self,
        tenant_id: TenantId,
        party_type: PartyType,
        as_date: NaiveDate,
    ) -> ReportResult<Vec<LedgerEntry>> {
        self.ensure_tenant(tenant_id).await?;

        let mut entries = self
            .storage
            .get_party_entries(tenant_id, party_type, as_date)
            .await?;
        entries.retain(|entry| entry.date <= as_date);
        entries.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

        Ok(entries)
    }

    /// Same as [`get_party_entries`](Self::get_party_entries) with the date given as a string
    pub async fn get_party_entries_as_of(
        &self,
        tenant_id: TenantId,
        party_type: PartyType,
        as_date: &str,
    ) -> ReportResult<Vec<LedgerEntry>> {
        let as_date = parse_as_date(as_date)?;
        self.get_party_entries(tenant_id, party_type, as_date).await
    }

    /// Parties sorted by display name; every requested ID must exist
    pub async fn get_parties(
        &self,
        tenant_id: TenantId,
        party_type: PartyType,
        party_ids: Option<&[PartyId]>,
    ) -> ReportResult<Vec<Party>> {
        if let Some(ids) = party_ids {
            validate_party_ids(ids)?;
        }
        self.ensure_tenant(tenant_id).await?;

        let mut parties = self
            .storage
            .get_parties(tenant_id, party_type, party_ids)
            .await?;

        if let Some(ids) = party_ids {
            parties.retain(|party| ids.contains(&party.id));
            if let Some(missing) = ids.iter().find(|id| !parties.iter().any(|p| p.id == **id)) {
                return Err(ReportError::NotFound(format!(
                    "{:?} {} for tenant {}",
                    party_type, missing, tenant_id
                )));
            }
        }

        parties.sort_by(|a, b| {
            a.display_name
                .to_lowercase()
                .cmp(&b.display_name.to_lowercase())
                .then(a.id.cmp(&b.id))
        });

        Ok(parties)
    }
}
