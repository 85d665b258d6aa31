//! Integration tests for financial-statements

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use financial_statements::{
    patterns,
    utils::{MemorySettings, MemoryStorage},
    BalanceSummaryService, ColumnFormat, EntryType, NegativeFormat, NumberFormat, FormatMoney,
    Party, ReportConfig, ReportError, ReportQueryOverrides, ReportRepository, BASE_CURRENCY_KEY,
    ORGANIZATION_GROUP,
};

const TENANT: u64 = 1;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

fn settings(currency: Option<&str>) -> MemorySettings {
    let settings = MemorySettings::new();
    settings.add_tenant(TENANT).unwrap();
    if let Some(currency) = currency {
        settings
            .set(TENANT, ORGANIZATION_GROUP, BASE_CURRENCY_KEY, currency)
            .unwrap();
    }
    settings
}

/// V1 owes 100 (credit), V2 nets to zero
fn two_vendor_storage() -> MemoryStorage {
    let storage = MemoryStorage::new();
    storage.add_tenant(TENANT).unwrap();
    storage.add_party(TENANT, Party::vendor(1, "V1")).unwrap();
    storage.add_party(TENANT, Party::vendor(2, "V2")).unwrap();

    storage
        .record_entry(
            TENANT,
            patterns::bill(1, date(1, 10), BigDecimal::from(100), Some("B-1".to_string())).unwrap(),
        )
        .unwrap();
    storage
        .record_entry(
            TENANT,
            patterns::bill(2, date(1, 11), BigDecimal::from(40), None).unwrap(),
        )
        .unwrap();
    storage
        .record_entry(
            TENANT,
            patterns::bill_payment(2, date(1, 12), BigDecimal::from(40), None).unwrap(),
        )
        .unwrap();
    storage
}

#[tokio::test]
async fn test_two_vendor_scenario() {
    let service = BalanceSummaryService::new(two_vendor_storage(), settings(Some("USD")));

    let statement = service
        .compute_balance_summary(TENANT, ReportQueryOverrides::default().as_date("2024-01-31"))
        .await
        .unwrap();

    assert_eq!(statement.data.len(), 2);
    assert_eq!(statement.data[0].name, "V1");
    assert_eq!(statement.data[0].total.amount, BigDecimal::from(100));
    assert_eq!(statement.data[0].total.currency_code, "USD");
    assert_eq!(statement.data[1].total.amount, BigDecimal::from(0));

    let v1 = statement.data[0].percentage_of_column.as_ref().unwrap();
    let v2 = statement.data[1].percentage_of_column.as_ref().unwrap();
    assert_eq!(v1.amount, BigDecimal::from(1));
    assert_eq!(v1.formatted_amount, "100.00%");
    assert_eq!(v2.amount, BigDecimal::from(0));
    assert_eq!(v2.formatted_amount, "0.00%");

    assert_eq!(statement.total.total.formatted_amount, "$100.00");
    assert_eq!(statement.columns.len(), 3);
    assert_eq!(statement.columns[2].format, ColumnFormat::Percentage);
}

#[tokio::test]
async fn test_two_vendor_scenario_none_zero() {
    let service = BalanceSummaryService::new(two_vendor_storage(), settings(Some("USD")));

    let statement = service
        .compute_balance_summary(
            TENANT,
            ReportQueryOverrides::default()
                .as_date("2024-01-31")
                .none_zero(true),
        )
        .await
        .unwrap();

    assert_eq!(statement.data.len(), 1);
    assert_eq!(statement.data[0].id, 1);
    assert!(statement.query.none_zero);
}

#[tokio::test]
async fn test_missing_base_currency_is_configuration_error() {
    let service = BalanceSummaryService::new(two_vendor_storage(), settings(None));

    let result = service
        .compute_balance_summary(TENANT, ReportQueryOverrides::default())
        .await;

    let error = result.unwrap_err();
    assert!(matches!(error, ReportError::Configuration(_)));
    assert_eq!(error.status_code(), 422);
}

#[tokio::test]
async fn test_unparsable_as_date_is_validation_error() {
    let service = BalanceSummaryService::new(two_vendor_storage(), settings(Some("USD")));

    let result = service
        .compute_balance_summary(TENANT, ReportQueryOverrides::default().as_date("not-a-date"))
        .await;

    assert!(matches!(result, Err(ReportError::Validation(_))));
}

#[tokio::test]
async fn test_unknown_tenant_and_party() {
    let settings = settings(Some("USD"));
    settings
        .set(7, ORGANIZATION_GROUP, BASE_CURRENCY_KEY, "USD")
        .unwrap();
    let service = BalanceSummaryService::new(two_vendor_storage(), settings);

    let result = service
        .compute_balance_summary(7, ReportQueryOverrides::default())
        .await;
    assert!(matches!(result, Err(ReportError::NotFound(_))));

    let result = service
        .compute_balance_summary(TENANT, ReportQueryOverrides::default().party_ids(vec![1, 99]))
        .await;
    assert!(matches!(result, Err(ReportError::NotFound(_))));

    let result = service
        .compute_balance_summary(TENANT, ReportQueryOverrides::default().party_ids(vec![0]))
        .await;
    assert!(matches!(result, Err(ReportError::Validation(_))));
}

#[tokio::test]
async fn test_effective_query_echoes_defaults_with_overrides() {
    let service = BalanceSummaryService::new(two_vendor_storage(), settings(Some("USD")));
    let number_format = NumberFormat {
        precision: 0,
        divide_on_1000: false,
        show_zero: true,
        format_money: FormatMoney::Always,
        negative_format: NegativeFormat::Parentheses,
    };

    let statement = service
        .compute_balance_summary(
            TENANT,
            ReportQueryOverrides::default()
                .as_date("2024-01-31")
                .number_format(number_format.clone())
                .party_ids(vec![2]),
        )
        .await
        .unwrap();

    let mut expected = service.default_query();
    expected.as_date = "2024-01-31".to_string();
    expected.number_format = number_format;
    expected.party_ids = Some(vec![2]);
    assert_eq!(statement.query, expected);

    assert_eq!(statement.data.len(), 1);
    assert_eq!(statement.data[0].total.formatted_amount, "$0");
}

#[tokio::test]
async fn test_idempotent_computation() {
    let service = BalanceSummaryService::new(two_vendor_storage(), settings(Some("USD")));
    let overrides = ReportQueryOverrides::default().as_date("2024-01-31");

    let first = service
        .compute_balance_summary(TENANT, overrides.clone())
        .await
        .unwrap();
    let second = service
        .compute_balance_summary(TENANT, overrides)
        .await
        .unwrap();

    assert_eq!(first.data, second.data);
    assert_eq!(first.columns, second.columns);
}

#[tokio::test]
async fn test_as_of_date_excludes_later_entries() {
    let service = BalanceSummaryService::new(two_vendor_storage(), settings(Some("USD")));

    let statement = service
        .compute_balance_summary(
            TENANT,
            ReportQueryOverrides::default()
                .as_date("2024-01-11")
                .none_transactions(true),
        )
        .await
        .unwrap();

    assert_eq!(statement.data.len(), 2);
    assert_eq!(statement.data[1].total.amount, BigDecimal::from(40));

    let statement = service
        .compute_balance_summary(
            TENANT,
            ReportQueryOverrides::default()
                .as_date("2024-01-05")
                .none_transactions(true),
        )
        .await
        .unwrap();
    assert!(statement.data.is_empty());
    assert_eq!(statement.total.total.amount, BigDecimal::from(0));
}

#[tokio::test]
async fn test_customer_balance_summary_is_debit_normal() {
    let storage = MemoryStorage::new();
    storage.add_tenant(TENANT).unwrap();
    storage.add_party(TENANT, Party::customer(20, "Globex")).unwrap();
    storage.add_party(TENANT, Party::customer(21, "Initech")).unwrap();
    storage.add_party(TENANT, Party::vendor(1, "V1")).unwrap();

    storage
        .record_entry(TENANT, patterns::invoice(20, date(2, 1), BigDecimal::from(750), None).unwrap())
        .unwrap();
    storage
        .record_entry(
            TENANT,
            patterns::payment_received(20, date(2, 3), BigDecimal::from(250), None).unwrap(),
        )
        .unwrap();
    storage
        .record_entry(TENANT, patterns::invoice(21, date(2, 4), BigDecimal::from(1500), None).unwrap())
        .unwrap();
    storage
        .record_entry(TENANT, patterns::bill(1, date(2, 4), BigDecimal::from(999), None).unwrap())
        .unwrap();

    let service = BalanceSummaryService::new(storage, settings(Some("EUR")));
    let statement = service
        .compute_customer_balance_summary(TENANT, ReportQueryOverrides::default().as_date("2024-02-28"))
        .await
        .unwrap();

    assert_eq!(statement.data.len(), 2);
    assert_eq!(statement.data[0].total.amount, BigDecimal::from(500));
    assert_eq!(statement.data[1].total.formatted_amount, "1,500.00");
    assert_eq!(statement.total.total.formatted_amount, "€2,000.00");
    assert_eq!(statement.columns[0].label, "Customer name");
}

#[tokio::test]
async fn test_configured_defaults_apply() {
    let config = ReportConfig::from_toml_str(
        r#"
        none_zero = true

        [comparison]
        percentage_of_column = false
        "#,
    )
    .unwrap();
    let service =
        BalanceSummaryService::with_config(two_vendor_storage(), settings(Some("USD")), config);

    let statement = service
        .compute_balance_summary(TENANT, ReportQueryOverrides::default().as_date("2024-01-31"))
        .await
        .unwrap();

    assert_eq!(statement.data.len(), 1);
    assert_eq!(statement.columns.len(), 2);
    assert!(statement.data[0].percentage_of_column.is_none());
}

#[tokio::test]
async fn test_repository_tags_nothing_service_tags_credit() {
    let storage = two_vendor_storage();
    let repository = ReportRepository::new(storage);

    let raw = repository
        .get_party_entries(TENANT, financial_statements::PartyType::Vendor, date(1, 31))
        .await
        .unwrap();
    assert!(raw.iter().any(|e| e.account_normal == EntryType::Debit));

    let annotated = financial_statements::annotate_entries(raw, EntryType::Credit);
    assert!(annotated.iter().all(|e| e.account_normal == EntryType::Credit));
}

#[test]
fn test_statement_wire_shape() {
    let overrides = ReportQueryOverrides::from_json(serde_json::json!({
        "asDate": "2024-01-31",
        "comparison": { "percentageOfColumn": false }
    }))
    .unwrap();

    assert_eq!(overrides.as_date.as_deref(), Some("2024-01-31"));
    assert_eq!(
        overrides.comparison.map(|c| c.percentage_of_column),
        Some(false)
    );
}
