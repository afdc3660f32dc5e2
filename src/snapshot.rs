//! Acquisition policy: one remote attempt, then the bundled fallback.

use chrono::Utc;
use tracing::{debug, warn};

use crate::fallback::fallback_table;
use crate::rate_provider::RateProvider;
use crate::rates::{RateSnapshot, RateSource};

/// Builds the rate snapshot for this run.
///
/// Tries the provider once. Any fetch failure is logged and recovered by
/// substituting the bundled table; it is never surfaced as an error. The
/// snapshot is never refreshed for the lifetime of the process.
pub async fn acquire(provider: &dyn RateProvider, base_currency: &str) -> RateSnapshot {
    match provider.fetch_rates().await {
        Ok(table) => {
            debug!("Using live rates ({} currencies)", table.len());
            RateSnapshot {
                table,
                source: RateSource::Remote,
                base_currency: base_currency.to_string(),
                fetched_at: Utc::now(),
            }
        }
        Err(e) => {
            warn!(error = %e, "Could not fetch live rates, using local fallback");
            RateSnapshot {
                table: fallback_table(),
                source: RateSource::Local,
                base_currency: base_currency.to_string(),
                fetched_at: Utc::now(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate_provider::FetchError;
    use crate::rates::{CurrencyRate, RateTable};
    use async_trait::async_trait;

    struct FixedProvider {
        table: RateTable,
    }

    #[async_trait]
    impl RateProvider for FixedProvider {
        async fn fetch_rates(&self) -> Result<RateTable, FetchError> {
            Ok(self.table.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl RateProvider for FailingProvider {
        async fn fetch_rates(&self) -> Result<RateTable, FetchError> {
            Err(FetchError::Schema("service down".to_string()))
        }
    }

    #[tokio::test]
    async fn test_successful_fetch_is_tagged_remote() {
        let table: RateTable = vec![CurrencyRate {
            code: "IDR".to_string(),
            display_name: "IDR".to_string(),
            value_in_base: 1.0,
        }]
        .into_iter()
        .collect();

        let provider = FixedProvider {
            table: table.clone(),
        };
        let snapshot = acquire(&provider, "IDR").await;

        assert_eq!(snapshot.source, RateSource::Remote);
        assert_eq!(snapshot.table, table);
        assert_eq!(snapshot.base_currency, "IDR");
    }

    #[tokio::test]
    async fn test_failed_fetch_falls_back_to_local_table() {
        let snapshot = acquire(&FailingProvider, "IDR").await;

        assert_eq!(snapshot.source, RateSource::Local);
        assert_eq!(snapshot.table, fallback_table());
    }
}
