//! Vendor balance summary example

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use financial_statements::utils::{MemorySettings, MemoryStorage};
use financial_statements::{
    patterns, BalanceSummaryService, Party, ReportConfig, ReportQueryOverrides, BASE_CURRENCY_KEY,
    ORGANIZATION_GROUP,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let tenant_id = 1;
    let storage = MemoryStorage::new();
    let settings = MemorySettings::new();
    settings.set(tenant_id, ORGANIZATION_GROUP, BASE_CURRENCY_KEY, "USD")?;
    storage.add_tenant(tenant_id)?;

    let mut acme = Party::vendor(1, "Acme Supplies");
    acme.opening_balance = BigDecimal::from(1200);
    storage.add_party(tenant_id, acme.clone())?;
    storage.add_party(tenant_id, Party::vendor(2, "Bolt Hardware"))?;
    storage.add_party(tenant_id, Party::vendor(3, "Cobalt Logistics"))?;

    let day = |m, d| NaiveDate::from_ymd_opt(2024, m, d).ok_or("invalid date");

    storage.record_entry(tenant_id, patterns::opening_balance(&acme, day(1, 1)?)?)?;
    storage.record_entry(
        tenant_id,
        patterns::bill(1, day(1, 15)?, BigDecimal::from(3400), Some("BILL-0001".to_string()))?,
    )?;
    storage.record_entry(
        tenant_id,
        patterns::bill_payment(1, day(2, 1)?, BigDecimal::from(2000), Some("PAY-0001".to_string()))?,
    )?;
    storage.record_entry(
        tenant_id,
        patterns::bill(2, day(2, 3)?, BigDecimal::from(980), Some("BILL-0002".to_string()))?,
    )?;
    storage.record_entry(
        tenant_id,
        patterns::vendor_credit(2, day(2, 10)?, BigDecimal::from(1100), Some("VC-0001".to_string()))?,
    )?;

    let service = BalanceSummaryService::with_config(storage, settings, ReportConfig::load()?);
    let statement = service
        .compute_balance_summary(tenant_id, ReportQueryOverrides::default().as_date("2024-02-29"))
        .await?;

    println!("Vendor balance summary as of {}\n", statement.query.as_date);
    for row in &statement.data {
        let share = row
            .percentage_of_column
            .as_ref()
            .map(|p| p.formatted_amount.as_str())
            .unwrap_or("");
        println!("  {:<20} {:>14} {:>9}", row.name, row.total.formatted_amount, share);
    }
    println!("  {:<20} {:>14}", "Total", statement.total.total.formatted_amount);

    println!("\n{}", serde_json::to_string_pretty(&statement)?);

    Ok(())
}
