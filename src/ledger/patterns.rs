//! Common subledger entry patterns
//!
//! Each function produces the party-side entry a source document posts to the
//! payables or receivables account. Amounts must be positive.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::types::*;
use crate::utils::validation::validate_positive_amount;

/// Default payables account
pub const ACCOUNTS_PAYABLE: &str = "accounts_payable";
/// Default receivables account
pub const ACCOUNTS_RECEIVABLE: &str = "accounts_receivable";

/// Bill received from a vendor (credit payables)
pub fn bill(
    vendor_id: PartyId,
    date: NaiveDate,
    amount: BigDecimal,
    bill_number: Option<String>,
) -> ReportResult<LedgerEntry> {
    validate_positive_amount(&amount)?;
    Ok(
        LedgerEntry::credit(date, amount, ACCOUNTS_PAYABLE.to_string(), vendor_id)
            .with_reference("Bill", bill_number),
    )
}

/// Payment made against vendor bills (debit payables)
pub fn bill_payment(
    vendor_id: PartyId,
    date: NaiveDate,
    amount: BigDecimal,
    payment_number: Option<String>,
) -> ReportResult<LedgerEntry> {
    validate_positive_amount(&amount)?;
    Ok(
        LedgerEntry::debit(date, amount, ACCOUNTS_PAYABLE.to_string(), vendor_id)
            .with_reference("BillPayment", payment_number),
    )
}

/// Credit note issued by a vendor (debit payables)
pub fn vendor_credit(
    vendor_id: PartyId,
    date: NaiveDate,
    amount: BigDecimal,
    credit_number: Option<String>,
) -> ReportResult<LedgerEntry> {
    validate_positive_amount(&amount)?;
    Ok(
        LedgerEntry::debit(date, amount, ACCOUNTS_PAYABLE.to_string(), vendor_id)
            .with_reference("VendorCredit", credit_number),
    )
}

/// Opening balance of a vendor (we owe) or customer (they owe)
pub fn opening_balance(party: &Party, date: NaiveDate) -> ReportResult<LedgerEntry> {
    validate_positive_amount(&party.opening_balance)?;
    let (entry_type, account) = match party.party_type {
        PartyType::Vendor => (EntryType::Credit, ACCOUNTS_PAYABLE),
        PartyType::Customer => (EntryType::Debit, ACCOUNTS_RECEIVABLE),
    };
    Ok(LedgerEntry::new(
        date,
        entry_type,
        party.opening_balance.clone(),
        account.to_string(),
        party.id,
    )
    .with_reference(opening_reference(party.party_type), None))
}

fn opening_reference(party_type: PartyType) -> &'static str {
    match party_type {
        PartyType::Vendor => "VendorOpeningBalance",
        PartyType::Customer => "CustomerOpeningBalance",
    }
}

/// Invoice issued to a customer (debit receivables)
pub fn invoice(
    customer_id: PartyId,
    date: NaiveDate,
    amount: BigDecimal,
    invoice_number: Option<String>,
) -> ReportResult<LedgerEntry> {
    validate_positive_amount(&amount)?;
    Ok(
        LedgerEntry::debit(date, amount, ACCOUNTS_RECEIVABLE.to_string(), customer_id)
            .with_reference("SaleInvoice", invoice_number),
    )
}

/// Payment received from a customer (credit receivables)
pub fn payment_received(
    customer_id: PartyId,
    date: NaiveDate,
    amount: BigDecimal,
    payment_number: Option<String>,
) -> ReportResult<LedgerEntry> {
    validate_positive_amount(&amount)?;
    Ok(
        LedgerEntry::credit(date, amount, ACCOUNTS_RECEIVABLE.to_string(), customer_id)
            .with_reference("PaymentReceive", payment_number),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_vendor_patterns() {
        let bill = bill(1, date(), BigDecimal::from(900), Some("B-1".to_string())).unwrap();
        let payment = bill_payment(1, date(), BigDecimal::from(400), None).unwrap();

        assert_eq!(bill.entry_type, EntryType::Credit);
        assert_eq!(bill.account_id, ACCOUNTS_PAYABLE);
        assert_eq!(bill.reference_number.as_deref(), Some("B-1"));
        assert_eq!(payment.entry_type, EntryType::Debit);
        assert_eq!(payment.reference_type.as_deref(), Some("BillPayment"));
    }

    #[test]
    fn test_opening_balance_side_follows_party_type() {
        let mut vendor = Party::vendor(3, "Acme Supplies");
        vendor.opening_balance = BigDecimal::from(120);
        let mut customer = Party::customer(4, "Globex");
        customer.opening_balance = BigDecimal::from(80);

        let vendor_entry = opening_balance(&vendor, date()).unwrap();
        let customer_entry = opening_balance(&customer, date()).unwrap();

        assert_eq!(vendor_entry.entry_type, EntryType::Credit);
        assert_eq!(customer_entry.entry_type, EntryType::Debit);
        assert_eq!(customer_entry.account_id, ACCOUNTS_RECEIVABLE);
        assert_eq!(customer_entry.amount, BigDecimal::from(80));
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let result = invoice(2, date(), BigDecimal::from(0), None);
        assert!(matches!(result, Err(ReportError::Validation(_))));

        let vendor = Party::vendor(5, "No Opening");
        assert!(opening_balance(&vendor, date()).is_err());
    }
}
