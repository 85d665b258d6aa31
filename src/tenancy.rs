//! Per-request tenant context

use serde::{Deserialize, Serialize};

use crate::traits::SettingsReader;
use crate::types::*;
use crate::utils::validation::validate_currency_code;

/// Settings group holding organization-wide options
pub const ORGANIZATION_GROUP: &str = "organization";
/// Key of the organization's base currency
pub const BASE_CURRENCY_KEY: &str = "base_currency";

/// Tenant facts resolved once per request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantContext {
    pub tenant_id: TenantId,
    pub base_currency: String,
}

impl TenantContext {
    /// Resolve the tenant's base currency from its organization settings
    pub async fn resolve<S: SettingsReader + ?Sized>(
        settings: &S,
        tenant_id: TenantId,
    ) -> ReportResult<Self> {
        let base_currency = settings
            .get_setting(tenant_id, ORGANIZATION_GROUP, BASE_CURRENCY_KEY)
            .await?
            .map(|value| value.trim().to_uppercase())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                ReportError::Configuration(format!(
                    "Tenant {} has no {}.{} setting; complete the organization setup",
                    tenant_id, ORGANIZATION_GROUP, BASE_CURRENCY_KEY
                ))
            })?;
        validate_currency_code(&base_currency)?;

        Ok(Self {
            tenant_id,
            base_currency,
        })
    }
}
