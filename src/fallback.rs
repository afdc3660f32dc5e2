//! Bundled fallback rates, used whenever the remote fetch fails.
//!
//! Values are the worth of one unit of each currency in Indonesian Rupiah.
//! They are a coarse snapshot, good enough to keep the calculator usable
//! offline; the rates listing labels them as local data.

use crate::rates::{CurrencyRate, RateTable};

const FALLBACK_RATES: &[(&str, &str, f64)] = &[
    ("AED", "UAE Dirham", 4_250.0),
    ("AUD", "Australian Dollar", 10_400.0),
    ("CAD", "Canadian Dollar", 11_400.0),
    ("CHF", "Swiss Franc", 18_200.0),
    ("CNY", "Chinese Yuan", 2_180.0),
    ("EUR", "Euro", 17_000.0),
    ("GBP", "British Pound", 19_800.0),
    ("HKD", "Hong Kong Dollar", 2_000.0),
    ("IDR", "Indonesian Rupiah", 1.0),
    ("INR", "Indian Rupee", 186.0),
    ("JPY", "Japanese Yen", 105.0),
    ("KRW", "South Korean Won", 11.6),
    ("MYR", "Malaysian Ringgit", 3_550.0),
    ("NZD", "New Zealand Dollar", 9_500.0),
    ("PHP", "Philippine Peso", 274.0),
    ("SAR", "Saudi Riyal", 4_160.0),
    ("SGD", "Singapore Dollar", 12_100.0),
    ("THB", "Thai Baht", 450.0),
    ("USD", "US Dollar", 15_600.0),
    ("VND", "Vietnamese Dong", 0.62),
];

pub fn fallback_table() -> RateTable {
    FALLBACK_RATES
        .iter()
        .map(|(code, name, value)| CurrencyRate {
            code: (*code).to_string(),
            display_name: (*name).to_string(),
            value_in_base: *value,
        })
        .collect()
}
