//! Core rate table model shared by providers, the converter and the CLI.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// A single currency and its value relative to the base currency.
///
/// `value_in_base` is the value of one unit of this currency expressed in the
/// base currency. A value of `0.0` marks a currency the remote service
/// reported a zero rate for; such a currency cannot be converted into.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyRate {
    pub code: String,
    pub display_name: String,
    pub value_in_base: f64,
}

/// Immutable mapping from currency code to its rate.
///
/// Built exactly once per process run, either fully remote-sourced or fully
/// from the bundled fallback table. Never mixed, never refreshed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    entries: BTreeMap<String, CurrencyRate>,
}

impl RateTable {
    pub fn get(&self, code: &str) -> Option<&CurrencyRate> {
        self.entries.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Currency codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurrencyRate> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CurrencyRate> for RateTable {
    fn from_iter<I: IntoIterator<Item = CurrencyRate>>(iter: I) -> Self {
        RateTable {
            entries: iter
                .into_iter()
                .map(|rate| (rate.code.clone(), rate))
                .collect(),
        }
    }
}

/// Where the rate table came from for this process run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSource {
    Remote,
    Local,
}

impl std::fmt::Display for RateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateSource::Remote => write!(f, "live"),
            RateSource::Local => write!(f, "local fallback"),
        }
    }
}

/// The rate table together with its provenance, passed down to every command.
#[derive(Debug, Clone)]
pub struct RateSnapshot {
    pub table: RateTable,
    pub source: RateSource,
    pub base_currency: String,
    pub fetched_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> RateTable {
        vec![
            CurrencyRate {
                code: "USD".to_string(),
                display_name: "US Dollar".to_string(),
                value_in_base: 15000.0,
            },
            CurrencyRate {
                code: "IDR".to_string(),
                display_name: "Indonesian Rupiah".to_string(),
                value_in_base: 1.0,
            },
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_table_lookup() {
        let table = sample_table();
        assert_eq!(table.len(), 2);
        assert!(table.contains("USD"));
        assert!(!table.contains("XYZ"));
        assert_eq!(table.get("USD").unwrap().value_in_base, 15000.0);
    }

    #[test]
    fn test_codes_are_sorted() {
        let table = sample_table();
        let codes: Vec<_> = table.codes().collect();
        assert_eq!(codes, vec!["IDR", "USD"]);
    }
}
