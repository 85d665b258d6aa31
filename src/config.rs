//! Report defaults configuration

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::report::{Comparison, NumberFormat, ReportQuery};

/// Defaults applied to every report query before caller overrides
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Default number formatting
    #[serde(default)]
    pub number_format: NumberFormat,
    /// Default comparison columns
    #[serde(default)]
    pub comparison: Comparison,
    /// Skip zero balances by default
    #[serde(default)]
    pub none_zero: bool,
    /// Skip parties without entries by default
    #[serde(default)]
    pub none_transactions: bool,
}

impl ReportConfig {
    /// Loads configuration from `config/reports.toml` and `FINSTMT__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/reports").required(false))
            .add_source(config::Environment::with_prefix("FINSTMT").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Default query for a computation run on `today`
    pub fn default_query(&self, today: NaiveDate) -> ReportQuery {
        ReportQuery {
            as_date: today.format("%Y-%m-%d").to_string(),
            number_format: self.number_format.clone(),
            comparison: self.comparison.clone(),
            none_zero: self.none_zero,
            none_transactions: self.none_transactions,
            party_ids: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{FormatMoney, NegativeFormat};

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        let query = config.default_query(NaiveDate::from_ymd_opt(2024, 7, 4).unwrap());

        assert_eq!(query.as_date, "2024-07-04");
        assert_eq!(query.number_format.precision, 2);
        assert!(!query.number_format.divide_on_1000);
        assert!(!query.number_format.show_zero);
        assert_eq!(query.number_format.format_money, FormatMoney::Total);
        assert_eq!(query.number_format.negative_format, NegativeFormat::Minus);
        assert!(query.comparison.percentage_of_column);
        assert!(!query.none_zero);
        assert!(!query.none_transactions);
        assert!(query.party_ids.is_none());
    }

    #[test]
    fn test_from_toml() {
        let config = ReportConfig::from_toml_str(
            r#"
            none_zero = true

            [number_format]
            precision = 0
            divide_on_1000 = true
            show_zero = true
            format_money = "always"
            negative_format = "parentheses"

            [comparison]
            percentage_of_column = false
            "#,
        )
        .unwrap();

        assert!(config.none_zero);
        assert!(!config.none_transactions);
        assert_eq!(config.number_format.precision, 0);
        assert!(config.number_format.divide_on_1000);
        assert_eq!(config.number_format.negative_format, NegativeFormat::Parentheses);
        assert!(!config.comparison.percentage_of_column);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ReportConfig::from_toml_str("").unwrap();
        assert_eq!(config, ReportConfig::default());
    }
}
