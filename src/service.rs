//! Balance summary service: the single entry point for statement computation

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, Instrument};
use uuid::Uuid;

use crate::config::ReportConfig;
use crate::ledger::Ledger;
use crate::report::*;
use crate::repository::ReportRepository;
use crate::tenancy::TenantContext;
use crate::traits::*;
use crate::types::*;
use crate::utils::validation::{parse_as_date, validate_number_format, validate_party_ids};

/// Computed balance summary returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSummaryStatement {
    /// One row per included party, in display-name order
    pub data: Vec<ReportRow>,
    /// Totals over `data`
    pub total: TotalRow,
    pub columns: Vec<ColumnDescriptor>,
    /// Effective query after applying overrides
    pub query: ReportQuery,
}

/// Tag every entry with the report's accounting-normal balance
pub fn annotate_entries(entries: Vec<LedgerEntry>, account_normal: EntryType) -> Vec<LedgerEntry> {
    entries
        .into_iter()
        .map(|entry| entry.with_account_normal(account_normal))
        .collect()
}

/// Computes vendor and customer balance summaries for tenants
pub struct BalanceSummaryService<R: TransactionRepository, S: SettingsReader> {
    repository: ReportRepository<R>,
    settings: S,
    config: ReportConfig,
}

impl<R: TransactionRepository, S: SettingsReader> BalanceSummaryService<R, S> {
    /// Create a service with default report configuration
    pub fn new(storage: R, settings: S) -> Self {
        Self::with_config(storage, settings, ReportConfig::default())
    }

    /// Create a service with explicit report defaults
    pub fn with_config(storage: R, settings: S, config: ReportConfig) -> Self {
        Self {
            repository: ReportRepository::new(storage),
            settings,
            config,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Default query, dated today
    pub fn default_query(&self) -> ReportQuery {
        self.config.default_query(Local::now().date_naive())
    }

    /// Vendor balance summary
    pub async fn compute_balance_summary(
        &self,
        tenant_id: TenantId,
        overrides: ReportQueryOverrides,
    ) -> ReportResult<BalanceSummaryStatement> {
        self.compute(tenant_id, PartyType::Vendor, overrides).await
    }

    /// Customer balance summary
    pub async fn compute_customer_balance_summary(
        &self,
        tenant_id: TenantId,
        overrides: ReportQueryOverrides,
    ) -> ReportResult<BalanceSummaryStatement> {
        self.compute(tenant_id, PartyType::Customer, overrides).await
    }

    /// Balance summary for any party type
    pub async fn compute(
        &self,
        tenant_id: TenantId,
        party_type: PartyType,
        overrides: ReportQueryOverrides,
    ) -> ReportResult<BalanceSummaryStatement> {
        let filter = self.default_query().apply_overrides(overrides);
        let span = tracing::info_span!(
            "balance_summary",
            request_id = %Uuid::new_v4(),
            tenant_id,
            report = party_type.report_name()
        );

        async {
            info!(?filter, "trying to calculate the report");

            self.run(tenant_id, party_type, filter.clone())
                .await
                .inspect_err(|e| {
                    error!(tenant_id, ?filter, error = %e, code = e.error_code(), "report computation failed")
                })
        }
        .instrument(span)
        .await
    }

    async fn run(
        &self,
        tenant_id: TenantId,
        party_type: PartyType,
        filter: ReportQuery,
    ) -> ReportResult<BalanceSummaryStatement> {
        let tenant = TenantContext::resolve(&self.settings, tenant_id).await?;

        let as_date = parse_as_date(&filter.as_date)?;
        if let Some(ids) = &filter.party_ids {
            validate_party_ids(ids)?;
        }
        validate_number_format(&filter.number_format)?;

        let entries = self
            .repository
            .get_party_entries(tenant_id, party_type, as_date)
            .await?;
        let entries = annotate_entries(entries, party_type.account_normal());

        let parties = self
            .repository
            .get_parties(tenant_id, party_type, filter.party_ids.as_deref())
            .await?;

        debug!(
            entries = entries.len(),
            parties = parties.len(),
            base_currency = %tenant.base_currency,
            "loaded report data"
        );

        let ledger = Ledger::new(entries);
        let report =
            BalanceSummaryReport::new(party_type, &ledger, &parties, &filter, &tenant.base_currency)?;

        Ok(BalanceSummaryStatement {
            data: report.rows(),
            total: report.total(),
            columns: report.columns(),
            query: filter,
        })
    }
}
