//! In-memory ledger with balance and aggregation queries

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::*;

/// Balance after applying one entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningBalance {
    pub entry_id: u64,
    pub date: NaiveDate,
    pub balance: BigDecimal,
}

/// Aggregate of a single party's entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartySummary {
    pub balance: BigDecimal,
    pub entry_count: usize,
}

/// Immutable set of ledger entries
///
/// Filters return a new `Ledger`, leaving the receiver untouched, so queries
/// can be chained:
///
/// ```rust
/// use financial_statements::{Ledger, LedgerEntry, EntryType};
/// use bigdecimal::BigDecimal;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let ledger = Ledger::new(vec![
///     LedgerEntry::credit(date, BigDecimal::from(40), "ap".to_string(), 1)
///         .with_account_normal(EntryType::Credit),
/// ]);
///
/// let balance = ledger.where_party(1).where_to_date(date).closing_balance();
/// assert_eq!(balance, BigDecimal::from(40));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    /// Create a ledger from entries in their given order
    pub fn new(entries: Vec<LedgerEntry>) -> Self {
        Self { entries }
    }

    /// All entries in ledger order
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn filter<F>(&self, predicate: F) -> Ledger
    where
        F: Fn(&LedgerEntry) -> bool,
    {
        Ledger::new(
            self.entries
                .iter()
                .filter(|entry| predicate(entry))
                .cloned()
                .collect(),
        )
    }

    /// Entries belonging to one party
    pub fn where_party(&self, party_id: PartyId) -> Ledger {
        self.filter(|entry| entry.party_id == party_id)
    }

    /// Entries belonging to any of the given parties
    pub fn where_parties(&self, party_ids: &[PartyId]) -> Ledger {
        self.filter(|entry| party_ids.contains(&entry.party_id))
    }

    /// Entries posted to one account
    pub fn where_account(&self, account_id: &str) -> Ledger {
        self.filter(|entry| entry.account_id == account_id)
    }

    /// Entries dated on or after `from_date`
    pub fn where_from_date(&self, from_date: NaiveDate) -> Ledger {
        self.filter(|entry| entry.date >= from_date)
    }

    /// Entries dated on or before `to_date`
    pub fn where_to_date(&self, to_date: NaiveDate) -> Ledger {
        self.filter(|entry| entry.date <= to_date)
    }

    /// Calculate total debits
    pub fn total_debits(&self) -> BigDecimal {
        self.entries
            .iter()
            .filter(|e| e.entry_type == EntryType::Debit)
            .map(|e| &e.amount)
            .sum()
    }

    /// Calculate total credits
    pub fn total_credits(&self) -> BigDecimal {
        self.entries
            .iter()
            .filter(|e| e.entry_type == EntryType::Credit)
            .map(|e| &e.amount)
            .sum()
    }

    /// Sum of all entries, each signed by its accounting-normal balance
    pub fn closing_balance(&self) -> BigDecimal {
        self.entries.iter().map(LedgerEntry::signed_amount).sum()
    }

    /// Balance after each entry, in ledger order
    pub fn running_balances(&self) -> Vec<RunningBalance> {
        let mut balance = BigDecimal::from(0);
        self.entries
            .iter()
            .map(|entry| {
                balance += entry.signed_amount();
                RunningBalance {
                    entry_id: entry.id,
                    date: entry.date,
                    balance: balance.clone(),
                }
            })
            .collect()
    }

    /// Balance and entry count per party, computed in one pass
    pub fn party_summaries(&self) -> HashMap<PartyId, PartySummary> {
        let mut summaries: HashMap<PartyId, PartySummary> = HashMap::new();

        for entry in &self.entries {
            let summary = summaries.entry(entry.party_id).or_insert_with(|| PartySummary {
                balance: BigDecimal::from(0),
                entry_count: 0,
            });
            summary.balance += entry.signed_amount();
            summary.entry_count += 1;
        }

        summaries
    }
}

impl FromIterator<LedgerEntry> for Ledger {
    fn from_iter<I: IntoIterator<Item = LedgerEntry>>(iter: I) -> Self {
        Ledger::new(iter.into_iter().collect())
    }
}
