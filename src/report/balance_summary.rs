//! Vendor and customer balance summary report

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::format::{format_amount, format_percentage};
use super::query::{FormatMoney, ReportQuery};
use crate::ledger::{Ledger, PartySummary};
use crate::types::*;
use crate::utils::validation::parse_as_date;

/// Amount with its display form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportAmount {
    pub amount: BigDecimal,
    pub formatted_amount: String,
    pub currency_code: String,
}

/// Share of the column total, as a fraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPercentage {
    pub amount: BigDecimal,
    pub formatted_amount: String,
}

/// One party line of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub id: PartyId,
    pub name: String,
    pub total: ReportAmount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_of_column: Option<ReportPercentage>,
}

/// Totals line of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalRow {
    pub total: ReportAmount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_of_column: Option<ReportPercentage>,
}

/// Display hint of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnFormat {
    Text,
    Money,
    Percentage,
}

/// Column metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    pub key: String,
    pub label: String,
    pub format: ColumnFormat,
}

impl ColumnDescriptor {
    fn new(key: &str, label: &str, format: ColumnFormat) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            format,
        }
    }
}

/// Pure transform from a ledger and party list to report rows and columns
pub struct BalanceSummaryReport<'a> {
    party_type: PartyType,
    parties: &'a [Party],
    query: &'a ReportQuery,
    base_currency: &'a str,
    as_date: NaiveDate,
    included: Vec<(&'a Party, BigDecimal)>,
}

impl<'a> BalanceSummaryReport<'a> {
    /// Build the report, computing each party's balance as of `query.as_date`
    pub fn new(
        party_type: PartyType,
        ledger: &Ledger,
        parties: &'a [Party],
        query: &'a ReportQuery,
        base_currency: &'a str,
    ) -> ReportResult<Self> {
        let as_date = parse_as_date(&query.as_date)?;
        let summaries = ledger.where_to_date(as_date).party_summaries();

        let included = parties
            .iter()
            .filter_map(|party| {
                let summary = summaries.get(&party.id);
                if query.none_transactions && summary.is_none() {
                    return None;
                }
                let balance = summary
                    .map(|s: &PartySummary| s.balance.clone())
                    .unwrap_or_else(|| BigDecimal::from(0));
                if query.none_zero && balance == BigDecimal::from(0) {
                    return None;
                }
                Some((party, balance))
            })
            .collect();

        Ok(Self {
            party_type,
            parties,
            query,
            base_currency,
            as_date,
            included,
        })
    }

    /// As-of date the balances were computed for
    pub fn as_date(&self) -> NaiveDate {
        self.as_date
    }

    /// Number of parties considered before zero/transaction filtering
    pub fn party_count(&self) -> usize {
        self.parties.len()
    }

    /// Sum of the raw balances of all included rows
    pub fn total_balance(&self) -> BigDecimal {
        self.included.iter().map(|(_, balance)| balance).sum()
    }

    fn amount(&self, amount: BigDecimal, is_total: bool) -> ReportAmount {
        let number_format = &self.query.number_format;
        let with_symbol = match number_format.format_money {
            FormatMoney::Always => true,
            FormatMoney::Total => is_total,
            FormatMoney::None => false,
        };
        let currency = with_symbol.then_some(self.base_currency);

        ReportAmount {
            formatted_amount: format_amount(&amount, number_format, currency),
            amount,
            currency_code: self.base_currency.to_string(),
        }
    }

    fn percentage(&self, balance: &BigDecimal, total: &BigDecimal) -> Option<ReportPercentage> {
        if !self.query.comparison.percentage_of_column {
            return None;
        }

        let amount = if *total == BigDecimal::from(0) {
            BigDecimal::from(0)
        } else {
            balance / total
        };

        Some(ReportPercentage {
            formatted_amount: format_percentage(&amount, &self.query.number_format),
            amount,
        })
    }

    /// Report rows in party order
    pub fn rows(&self) -> Vec<ReportRow> {
        let total = self.total_balance();

        self.included
            .iter()
            .map(|(party, balance)| ReportRow {
                id: party.id,
                name: party.display_name.clone(),
                total: self.amount(balance.clone(), false),
                percentage_of_column: self.percentage(balance, &total),
            })
            .collect()
    }

    /// Totals row
    pub fn total(&self) -> TotalRow {
        let total = self.total_balance();

        TotalRow {
            percentage_of_column: self.percentage(&total, &total),
            total: self.amount(total, true),
        }
    }

    /// Column metadata
    pub fn columns(&self) -> Vec<ColumnDescriptor> {
        let mut columns = vec![
            ColumnDescriptor::new("name", self.party_type.name_label(), ColumnFormat::Text),
            ColumnDescriptor::new("total", "Total", ColumnFormat::Money),
        ];

        if self.query.comparison.percentage_of_column {
            columns.push(ColumnDescriptor::new(
                "percentage_of_column",
                "% of Column",
                ColumnFormat::Percentage,
            ));
        }

        columns
    }
}
