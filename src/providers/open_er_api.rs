use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::rate_provider::{FetchError, RateProvider};
use crate::rates::{CurrencyRate, RateTable};

// OpenErApiProvider implementation for RateProvider
//
// Talks to the open.er-api.com v6 endpoint. The payload expresses each rate
// as units of that currency per one unit of the base currency; we invert on
// ingest so the table stores the value of one unit in base currency.
pub struct OpenErApiProvider {
    base_url: String,
    base_currency: String,
}

impl OpenErApiProvider {
    pub fn new(base_url: &str, base_currency: &str) -> Self {
        OpenErApiProvider {
            base_url: base_url.to_string(),
            base_currency: base_currency.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenErApiResponse {
    result: String,
    rates: Option<HashMap<String, f64>>,
}

#[async_trait]
impl RateProvider for OpenErApiProvider {
    #[instrument(
        name = "OpenErApiFetch",
        skip(self),
        fields(base = %self.base_currency)
    )]
    async fn fetch_rates(&self) -> Result<RateTable, FetchError> {
        let url = format!("{}/v6/latest/{}", self.base_url, self.base_currency);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder().user_agent("kurs/0.2").build()?;
        let response = client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let text = response.text().await?;
        let data: OpenErApiResponse = serde_json::from_str(&text)?;

        if data.result != "success" {
            return Err(FetchError::Schema(format!(
                "result = {:?} for base currency {}",
                data.result, self.base_currency
            )));
        }
        let rates = data.rates.ok_or_else(|| {
            FetchError::Schema(format!(
                "missing rates mapping for base currency {}",
                self.base_currency
            ))
        })?;

        debug!("Received {} rates", rates.len());

        // Invert each rate; a zero rate maps to a zero value instead of a
        // division by zero and is rejected later at conversion time.
        let table = rates
            .into_iter()
            .map(|(code, rate)| CurrencyRate {
                display_name: code.clone(),
                code,
                value_in_base: if rate != 0.0 { 1.0 / rate } else { 0.0 },
            })
            .collect();

        Ok(table)
    }
}
