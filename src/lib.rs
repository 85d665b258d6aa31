//! # Financial Statements
//!
//! Multi-tenant financial statement generation from ledger entries.
//!
//! ## Features
//!
//! - **Ledger queries**: party, account and date filters with balances signed by accounting-normal side
//! - **Balance summaries**: vendor (credit-normal) and customer (debit-normal) reports
//! - **Number formatting**: precision, thousands, negative styles and percentage-of-column
//! - **Storage abstraction**: trait-based storage and tenant settings, with in-memory implementations
//!
//! ## Quick Start
//!
//! ```rust
//! use financial_statements::utils::{MemorySettings, MemoryStorage};
//! use financial_statements::{BalanceSummaryService, ReportQueryOverrides};
//!
//! // let storage = YourStorageImplementation::new();
//! let service = BalanceSummaryService::new(MemoryStorage::new(), MemorySettings::new());
//! let _overrides = ReportQueryOverrides::default().as_date("2024-12-31").none_zero(true);
//! // let statement = service.compute_balance_summary(tenant_id, overrides).await?;
//! # let _ = service;
//! ```

pub mod config;
pub mod ledger;
pub mod report;
pub mod repository;
pub mod service;
pub mod tenancy;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::ReportConfig;
pub use ledger::*;
pub use report::*;
pub use repository::ReportRepository;
pub use service::*;
pub use tenancy::*;
pub use traits::*;
pub use types::*;

// Re-export entry patterns for convenience
pub use ledger::patterns;
