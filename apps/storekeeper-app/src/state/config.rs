//! # Configuration State
//!
//! Application configuration fixed at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. JSON handed over by the UI host ([`ConfigState::from_json`])
//! 2. Defaults (this file)
//!
//! Missing JSON keys fall back to their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use storekeeper_core::DATABASE_FILE_NAME;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigState {
    /// File name of the store inside the data directory.
    /// Default: "storeKeeper.db"
    pub database_name: String,

    /// Directory holding the store. `None` uses the platform data directory.
    pub data_dir: Option<PathBuf>,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Database: `storeKeeper.db` in the platform data directory
    /// - Currency: naira (₦), two decimals
    fn default() -> Self {
        ConfigState {
            database_name: DATABASE_FILE_NAME.to_string(),
            data_dir: None,
            currency_symbol: "₦".to_string(),
            currency_decimals: 2,
        }
    }
}

impl ConfigState {
    /// Parses configuration sent by the UI host.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::from_json(r#"{ "currencySymbol": "$" }"#)?;
    /// assert_eq!(config.database_name, "storeKeeper.db");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Formats a price for the product list.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_price(5000.0), "₦5000.00");
    /// ```
    pub fn format_price(&self, price: f64) -> String {
        format!(
            "{}{}{:.*}",
            if price < 0.0 { "-" } else { "" },
            self.currency_symbol,
            self.currency_decimals as usize,
            price.abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        let config = ConfigState::default();
        assert_eq!(config.format_price(5000.0), "₦5000.00");
        assert_eq!(config.format_price(12.5), "₦12.50");
        assert_eq!(config.format_price(0.0), "₦0.00");
    }

    #[test]
    fn test_format_price_no_decimals() {
        let config = ConfigState {
            currency_decimals: 0,
            ..ConfigState::default()
        };
        assert_eq!(config.format_price(1500.0), "₦1500");
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = ConfigState::from_json(r#"{ "currencySymbol": "$" }"#).unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.database_name, "storeKeeper.db");
        assert_eq!(config.currency_decimals, 2);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_from_json_rejects_bad_types() {
        assert!(ConfigState::from_json(r#"{ "currencyDecimals": "two" }"#).is_err());
    }
}
