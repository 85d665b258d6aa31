//! In-memory storage and settings implementations for testing

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

#[derive(Debug, Default)]
struct TenantBook {
    parties: HashMap<PartyId, Party>,
    entries: Vec<LedgerEntry>,
    next_entry_id: u64,
}

fn poisoned() -> ReportError {
    ReportError::Storage("memory storage lock poisoned".to_string())
}

/// In-memory storage implementation for testing and development
///
/// Clones share the same underlying data, so a test can keep a handle for
/// seeding after moving a clone into a service.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    tenants: Arc<RwLock<HashMap<TenantId, TenantBook>>>,
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tenant with an empty book
    pub fn add_tenant(&self, tenant_id: TenantId) -> ReportResult<()> {
        self.tenants
            .write()
            .map_err(|_| poisoned())?
            .entry(tenant_id)
            .or_default();
        Ok(())
    }

    /// Insert or replace a party
    pub fn add_party(&self, tenant_id: TenantId, party: Party) -> ReportResult<()> {
        let mut tenants = self.tenants.write().map_err(|_| poisoned())?;
        let book = tenants
            .get_mut(&tenant_id)
            .ok_or_else(|| ReportError::NotFound(format!("Tenant {}", tenant_id)))?;
        book.parties.insert(party.id, party);
        Ok(())
    }

    /// Append an entry, assigning the next creation-order id
    pub fn record_entry(&self, tenant_id: TenantId, mut entry: LedgerEntry) -> ReportResult<u64> {
        let mut tenants = self.tenants.write().map_err(|_| poisoned())?;
        let book = tenants
            .get_mut(&tenant_id)
            .ok_or_else(|| ReportError::NotFound(format!("Tenant {}", tenant_id)))?;
        if !book.parties.contains_key(&entry.party_id) {
            return Err(ReportError::NotFound(format!(
                "Party {} for tenant {}",
                entry.party_id, tenant_id
            )));
        }

        book.next_entry_id += 1;
        entry.id = book.next_entry_id;
        book.entries.push(entry);
        Ok(book.next_entry_id)
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) -> ReportResult<()> {
        self.tenants.write().map_err(|_| poisoned())?.clear();
        Ok(())
    }
}

#[async_trait]
impl TransactionRepository for MemoryStorage {
    async fn tenant_exists(&self, tenant_id: TenantId) -> ReportResult<bool> {
        Ok(self
            .tenants
            .read()
            .map_err(|_| poisoned())?
            .contains_key(&tenant_id))
    }

    async fn get_party_entries(
        &self,
        tenant_id: TenantId,
        party_type: PartyType,
        to_date: NaiveDate,
    ) -> ReportResult<Vec<LedgerEntry>> {
        let tenants = self.tenants.read().map_err(|_| poisoned())?;
        let book = tenants
            .get(&tenant_id)
            .ok_or_else(|| ReportError::NotFound(format!("Tenant {}", tenant_id)))?;

        Ok(book
            .entries
            .iter()
            .filter(|entry| entry.date <= to_date)
            .filter(|entry| {
                book.parties
                    .get(&entry.party_id)
                    .is_some_and(|party| party.party_type == party_type)
            })
            .cloned()
            .collect())
    }

    async fn get_parties(
        &self,
        tenant_id: TenantId,
        party_type: PartyType,
        party_ids: Option<&[PartyId]>,
    ) -> ReportResult<Vec<Party>> {
        let tenants = self.tenants.read().map_err(|_| poisoned())?;
        let book = tenants
            .get(&tenant_id)
            .ok_or_else(|| ReportError::NotFound(format!("Tenant {}", tenant_id)))?;

        Ok(book
            .parties
            .values()
            .filter(|party| party.party_type == party_type)
            .filter(|party| party_ids.is_none_or(|ids| ids.contains(&party.id)))
            .cloned()
            .collect())
    }
}

/// In-memory tenant settings, keyed by `(group, key)`
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    tenants: Arc<RwLock<HashMap<TenantId, HashMap<(String, String), String>>>>,
}

impl MemorySettings {
    /// Create an empty settings store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tenant without any settings
    pub fn add_tenant(&self, tenant_id: TenantId) -> ReportResult<()> {
        self.tenants
            .write()
            .map_err(|_| poisoned())?
            .entry(tenant_id)
            .or_default();
        Ok(())
    }

    /// Set a value, registering the tenant if needed
    pub fn set(&self, tenant_id: TenantId, group: &str, key: &str, value: &str) -> ReportResult<()> {
        self.tenants
            .write()
            .map_err(|_| poisoned())?
            .entry(tenant_id)
            .or_default()
            .insert((group.to_string(), key.to_string()), value.to_string());
        Ok(())
    }
}

#[async_trait]
impl SettingsReader for MemorySettings {
    async fn get_setting(
        &self,
        tenant_id: TenantId,
        group: &str,
        key: &str,
    ) -> ReportResult<Option<String>> {
        let tenants = self.tenants.read().map_err(|_| poisoned())?;
        let settings = tenants
            .get(&tenant_id)
            .ok_or_else(|| ReportError::NotFound(format!("Tenant {}", tenant_id)))?;

        Ok(settings
            .get(&(group.to_string(), key.to_string()))
            .cloned())
    }
}
