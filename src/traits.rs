//! Traits for storage and tenancy abstraction

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::types::*;

/// Storage abstraction for ledger entries and party records
///
/// This trait allows the statement service to work with any storage backend
/// (PostgreSQL, MySQL, SQLite, in-memory, etc.) by implementing these methods.
/// Implementations return rows in whatever order the store yields them;
/// ordering is applied by [`ReportRepository`](crate::repository::ReportRepository).
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Whether the tenant is known to the store
    async fn tenant_exists(&self, tenant_id: TenantId) -> ReportResult<bool>;

    /// List entries of the given party type posted on or before `to_date`
    async fn get_party_entries(
        &self,
        tenant_id: TenantId,
        party_type: PartyType,
        to_date: NaiveDate,
    ) -> ReportResult<Vec<LedgerEntry>>;

    /// List parties of the given type, optionally restricted to `party_ids`
    async fn get_parties(
        &self,
        tenant_id: TenantId,
        party_type: PartyType,
        party_ids: Option<&[PartyId]>,
    ) -> ReportResult<Vec<Party>>;
}

/// Read access to per-tenant settings
#[async_trait]
pub trait SettingsReader: Send + Sync {
    /// Get a setting value; `Ok(None)` when the tenant exists but the key is unset
    async fn get_setting(
        &self,
        tenant_id: TenantId,
        group: &str,
        key: &str,
    ) -> ReportResult<Option<String>>;
}
