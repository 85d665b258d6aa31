//! Core types and data structures for statement generation

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tenant identifier
pub type TenantId = u64;

/// Vendor or customer identifier
pub type PartyId = u64;

/// Sides of a ledger entry, also used as the accounting-normal balance of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Debit side
    Debit,
    /// Credit side
    Credit,
}

impl EntryType {
    /// The opposite side of this entry type
    pub fn opposite(self) -> Self {
        match self {
            EntryType::Debit => EntryType::Credit,
            EntryType::Credit => EntryType::Debit,
        }
    }
}

/// Kinds of parties a balance summary can be computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyType {
    /// Suppliers; payables are credit-normal
    Vendor,
    /// Clients; receivables are debit-normal
    Customer,
}

impl PartyType {
    /// Returns the accounting-normal balance every entry of this report type is tagged with
    pub fn account_normal(self) -> EntryType {
        match self {
            PartyType::Vendor => EntryType::Credit,
            PartyType::Customer => EntryType::Debit,
        }
    }

    /// Name of the balance summary report for this party type
    pub fn report_name(self) -> &'static str {
        match self {
            PartyType::Vendor => "vendor_balance_summary",
            PartyType::Customer => "customer_balance_summary",
        }
    }

    /// Label of the party name column
    pub fn name_label(self) -> &'static str {
        match self {
            PartyType::Vendor => "Vendor name",
            PartyType::Customer => "Customer name",
        }
    }
}

/// A single ledger line affecting one party's subledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    /// Creation order assigned by storage
    pub id: u64,
    /// Date the entry was posted
    pub date: NaiveDate,
    /// Side the amount was posted to
    pub entry_type: EntryType,
    /// Posted amount, always non-negative
    pub amount: BigDecimal,
    /// Account being affected (e.g. accounts payable)
    pub account_id: String,
    /// Party the entry belongs to
    pub party_id: PartyId,
    /// Accounting-normal balance; set by the report service, not read from storage
    pub account_normal: EntryType,
    /// Source document type (Bill, BillPayment, SaleInvoice, ...)
    pub reference_type: Option<String>,
    /// Source document number
    pub reference_number: Option<String>,
}

impl LedgerEntry {
    /// Create a new entry; `account_normal` starts as the posted side
    pub fn new(
        date: NaiveDate,
        entry_type: EntryType,
        amount: BigDecimal,
        account_id: String,
        party_id: PartyId,
    ) -> Self {
        Self {
            id: 0,
            date,
            entry_type,
            amount,
            account_id,
            party_id,
            account_normal: entry_type,
            reference_type: None,
            reference_number: None,
        }
    }

    /// Create a credit entry
    pub fn credit(date: NaiveDate, amount: BigDecimal, account_id: String, party_id: PartyId) -> Self {
        Self::new(date, EntryType::Credit, amount, account_id, party_id)
    }

    /// Create a debit entry
    pub fn debit(date: NaiveDate, amount: BigDecimal, account_id: String, party_id: PartyId) -> Self {
        Self::new(date, EntryType::Debit, amount, account_id, party_id)
    }

    /// Attach the source document
    pub fn with_reference(mut self, reference_type: &str, reference_number: Option<String>) -> Self {
        self.reference_type = Some(reference_type.to_string());
        self.reference_number = reference_number;
        self
    }

    /// Return a copy tagged with the given accounting-normal balance
    pub fn with_account_normal(mut self, account_normal: EntryType) -> Self {
        self.account_normal = account_normal;
        self
    }

    /// Signed effect of this entry on the party balance
    pub fn signed_amount(&self) -> BigDecimal {
        if self.entry_type == self.account_normal {
            self.amount.clone()
        } else {
            -self.amount.clone()
        }
    }
}

/// Vendor or customer record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    /// Unique identifier
    pub id: PartyId,
    /// Vendor or customer
    pub party_type: PartyType,
    /// Name shown on reports
    pub display_name: String,
    /// Currency the party trades in, if different from the base currency
    pub currency_code: Option<String>,
    /// Opening balance recorded when the party was created
    pub opening_balance: BigDecimal,
    /// Balance as last stored by the application
    pub balance: BigDecimal,
    /// Inactive parties are still reported
    pub active: bool,
}

impl Party {
    /// Create a new active party with zero balances
    pub fn new(id: PartyId, party_type: PartyType, display_name: String) -> Self {
        Self {
            id,
            party_type,
            display_name,
            currency_code: None,
            opening_balance: BigDecimal::from(0),
            balance: BigDecimal::from(0),
            active: true,
        }
    }

    /// Create a vendor
    pub fn vendor(id: PartyId, display_name: &str) -> Self {
        Self::new(id, PartyType::Vendor, display_name.to_string())
    }

    /// Create a customer
    pub fn customer(id: PartyId, display_name: &str) -> Self {
        Self::new(id, PartyType::Customer, display_name.to_string())
    }
}

/// Errors that can occur while computing a statement
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReportError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ReportError {
    /// HTTP status code equivalent for transports
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::Configuration(_) => 422,
            Self::Storage(_) => 500,
        }
    }

    /// Stable error code for API responses
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }
}

/// Result type for statement operations
pub type ReportResult<T> = Result<T, ReportError>;
