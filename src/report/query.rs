//! Report query options and override merging

use serde::{Deserialize, Serialize};

use crate::types::*;

/// Where the currency symbol is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatMoney {
    /// Only on the totals row
    Total,
    /// On every amount
    Always,
    /// Never
    None,
}

/// How negative amounts are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NegativeFormat {
    /// Leading minus sign, `-1,200.00`
    #[serde(rename = "mines", alias = "minus")]
    Minus,
    /// Wrapped in parentheses, `(1,200.00)`
    #[serde(rename = "parentheses")]
    Parentheses,
}

/// Number formatting options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberFormat {
    pub precision: u32,
    #[serde(alias = "divide_on_1000")]
    pub divide_on_1000: bool,
    #[serde(alias = "show_zero")]
    pub show_zero: bool,
    #[serde(alias = "format_money")]
    pub format_money: FormatMoney,
    #[serde(alias = "negative_format")]
    pub negative_format: NegativeFormat,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            precision: 2,
            divide_on_1000: false,
            show_zero: false,
            format_money: FormatMoney::Total,
            negative_format: NegativeFormat::Minus,
        }
    }
}

/// Comparison columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    #[serde(alias = "percentage_of_column")]
    pub percentage_of_column: bool,
}

impl Default for Comparison {
    fn default() -> Self {
        Self {
            percentage_of_column: true,
        }
    }
}

/// Effective options of one balance summary computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    /// Cutoff date, `YYYY-MM-DD`; kept as given so it can be echoed back
    pub as_date: String,
    pub number_format: NumberFormat,
    pub comparison: Comparison,
    /// Skip parties whose balance is zero
    pub none_zero: bool,
    /// Skip parties without entries up to the as-of date
    pub none_transactions: bool,
    /// Restrict the report to these parties
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "vendorsIds", alias = "customersIds")]
    pub party_ids: Option<Vec<PartyId>>,
}

impl ReportQuery {
    /// Apply caller overrides key by key; nested options are replaced wholesale
    pub fn apply_overrides(mut self, overrides: ReportQueryOverrides) -> Self {
        if let Some(as_date) = overrides.as_date {
            self.as_date = as_date;
        }
        if let Some(number_format) = overrides.number_format {
            self.number_format = number_format;
        }
        if let Some(comparison) = overrides.comparison {
            self.comparison = comparison;
        }
        if let Some(none_zero) = overrides.none_zero {
            self.none_zero = none_zero;
        }
        if let Some(none_transactions) = overrides.none_transactions {
            self.none_transactions = none_transactions;
        }
        if let Some(party_ids) = overrides.party_ids {
            self.party_ids = Some(party_ids);
        }
        self
    }
}

/// Caller-supplied subset of [`ReportQuery`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportQueryOverrides {
    pub as_date: Option<String>,
    pub number_format: Option<NumberFormat>,
    pub comparison: Option<Comparison>,
    pub none_zero: Option<bool>,
    pub none_transactions: Option<bool>,
    #[serde(alias = "vendorsIds", alias = "customersIds")]
    pub party_ids: Option<Vec<PartyId>>,
}

impl ReportQueryOverrides {
    /// Parse overrides from a JSON request body
    pub fn from_json(value: serde_json::Value) -> ReportResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| ReportError::Validation(format!("Invalid report query: {}", e)))
    }

    pub fn as_date(mut self, as_date: &str) -> Self {
        self.as_date = Some(as_date.to_string());
        self
    }

    pub fn number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = Some(number_format);
        self
    }

    pub fn percentage_of_column(mut self, enabled: bool) -> Self {
        self.comparison = Some(Comparison {
            percentage_of_column: enabled,
        });
        self
    }

    pub fn none_zero(mut self, none_zero: bool) -> Self {
        self.none_zero = Some(none_zero);
        self
    }

    pub fn none_transactions(mut self, none_transactions: bool) -> Self {
        self.none_transactions = Some(none_transactions);
        self
    }

    pub fn party_ids(mut self, party_ids: Vec<PartyId>) -> Self {
        self.party_ids = Some(party_ids);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn defaults() -> ReportQuery {
        ReportQuery {
            as_date: "2024-06-30".to_string(),
            number_format: NumberFormat::default(),
            comparison: Comparison::default(),
            none_zero: false,
            none_transactions: false,
            party_ids: None,
        }
    }

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let merged = defaults().apply_overrides(ReportQueryOverrides::default());
        assert_eq!(merged, defaults());
    }

    #[test]
    fn test_overrides_replace_only_supplied_keys() {
        let merged = defaults().apply_overrides(
            ReportQueryOverrides::default()
                .none_zero(true)
                .party_ids(vec![3, 1]),
        );

        assert!(merged.none_zero);
        assert_eq!(merged.party_ids, Some(vec![3, 1]));
        assert_eq!(merged.as_date, "2024-06-30");
        assert_eq!(merged.number_format, NumberFormat::default());
        assert!(merged.comparison.percentage_of_column);
    }

    #[test]
    fn test_nested_options_replaced_wholesale() {
        let number_format = NumberFormat {
            precision: 0,
            divide_on_1000: true,
            show_zero: true,
            format_money: FormatMoney::None,
            negative_format: NegativeFormat::Parentheses,
        };
        let merged =
            defaults().apply_overrides(ReportQueryOverrides::default().number_format(number_format.clone()));

        assert_eq!(merged.number_format, number_format);
    }

    #[test]
    fn test_overrides_from_json() {
        let overrides = ReportQueryOverrides::from_json(json!({
            "asDate": "2024-01-31",
            "noneZero": true,
            "vendorsIds": [7],
            "numberFormat": {
                "precision": 1,
                "divideOn1000": false,
                "showZero": true,
                "formatMoney": "always",
                "negativeFormat": "parentheses"
            }
        }))
        .unwrap();

        assert_eq!(overrides.as_date.as_deref(), Some("2024-01-31"));
        assert_eq!(overrides.none_zero, Some(true));
        assert_eq!(overrides.party_ids, Some(vec![7]));
        assert_eq!(
            overrides.number_format.unwrap().negative_format,
            NegativeFormat::Parentheses
        );
        assert_eq!(overrides.none_transactions, None);
    }

    #[test]
    fn test_partial_nested_override_rejected() {
        let result = ReportQueryOverrides::from_json(json!({
            "numberFormat": { "precision": 0 }
        }));
        assert!(matches!(result, Err(ReportError::Validation(_))));

        let result = ReportQueryOverrides::from_json(json!({ "noneZero": "yes" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_query_wire_shape() {
        let json = serde_json::to_value(defaults()).unwrap();

        assert_eq!(json["asDate"], "2024-06-30");
        assert_eq!(json["numberFormat"]["divideOn1000"], false);
        assert_eq!(json["numberFormat"]["negativeFormat"], "mines");
        assert_eq!(json["comparison"]["percentageOfColumn"], true);
        assert!(json.get("partyIds").is_none());
    }
}
