//! Validation utilities

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate};

use crate::report::NumberFormat;
use crate::types::*;

/// Largest supported number of decimal places
pub const MAX_PRECISION: u32 = 8;

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: &BigDecimal) -> ReportResult<()> {
    if *amount <= BigDecimal::from(0) {
        Err(ReportError::Validation(
            "Amount must be positive".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Parse an as-of date given as `YYYY-MM-DD` or an RFC 3339 date-time
pub fn parse_as_date(value: &str) -> ReportResult<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(value)
        .map(|datetime| datetime.date_naive())
        .map_err(|_| ReportError::Validation(format!("Invalid as-of date '{}'", value)))
}

/// Validate that every party ID is a positive integer
pub fn validate_party_ids(party_ids: &[PartyId]) -> ReportResult<()> {
    if party_ids.iter().any(|id| *id == 0) {
        return Err(ReportError::Validation(
            "Party IDs must be positive integers".to_string(),
        ));
    }

    Ok(())
}

/// Validate a configured base currency code (ISO 4217 shape)
pub fn validate_currency_code(code: &str) -> ReportResult<()> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ReportError::Configuration(format!(
            "Base currency '{}' is not a three-letter currency code",
            code
        )));
    }

    Ok(())
}

/// Validate number formatting options
pub fn validate_number_format(number_format: &NumberFormat) -> ReportResult<()> {
    if number_format.precision > MAX_PRECISION {
        return Err(ReportError::Validation(format!(
            "Precision cannot exceed {} decimal places",
            MAX_PRECISION
        )));
    }

    Ok(())
}
