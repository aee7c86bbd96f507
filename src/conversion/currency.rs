//! Currency conversion against an external rate provider.
//!
//! Every conversion asks the provider for fresh rates. Rates are never
//! cached, and a failed lookup is reported as `Ok(None)`, never as an error.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::CurrencyConfig;
use crate::error::{ExerciseError, ExerciseResult};

use super::round_measure;

/// Exchange rates keyed by upper-case currency code.
pub type RateTable = HashMap<String, Decimal>;

/// A source of exchange rates relative to a base currency.
pub trait RateProvider: Send + Sync {
    /// Returns the latest rates for converting one unit of `base_currency`.
    fn latest_rates(&self, base_currency: &str) -> ExerciseResult<RateTable>;
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    data: RateTable,
}

/// Parses a rate provider response body.
///
/// The body must be a JSON object with a top-level `data` map from currency
/// code to rate.
///
/// # Examples
///
/// ```
/// use boundary_exercises::conversion::parse_rates;
///
/// let rates = parse_rates(r#"{"data": {"EUR": 0.92, "DKK": 6.87}}"#).unwrap();
/// assert_eq!(rates.len(), 2);
/// assert!(parse_rates(r#"{"rates": {}}"#).is_err());
/// ```
pub fn parse_rates(body: &str) -> ExerciseResult<RateTable> {
    serde_json::from_str::<RatesResponse>(body)
        .map(|response| response.data)
        .map_err(|e| ExerciseError::RateLookup {
            message: format!("malformed rate response: {e}"),
        })
}

/// A [`RateProvider`] backed by an HTTP endpoint.
///
/// Issues `GET {api_url}?apikey={api_key}&base_currency={base}` and bounds the
/// request by the configured timeout.
#[derive(Debug, Clone)]
pub struct HttpRateProvider {
    api_url: String,
    api_key: String,
    timeout: Duration,
}

impl HttpRateProvider {
    /// Creates a provider from the currency section of the configuration.
    pub fn new(config: &CurrencyConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    fn fetch(&self, base_currency: &str) -> Result<String, reqwest::Error> {
        // One client per lookup; the blocking client must not outlive the
        // thread that made the call.
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        client
            .get(&self.api_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("base_currency", base_currency),
            ])
            .send()?
            .error_for_status()?
            .text()
    }
}

impl RateProvider for HttpRateProvider {
    fn latest_rates(&self, base_currency: &str) -> ExerciseResult<RateTable> {
        debug!(url = %self.api_url, base_currency, "Fetching exchange rates");
        let body = self
            .fetch(base_currency)
            .map_err(|e| ExerciseError::RateLookup {
                message: e.to_string(),
            })?;
        parse_rates(&body)
    }
}

/// A currency converter for a fixed base currency.
#[derive(Clone)]
pub struct Currency {
    base: String,
    provider: Arc<dyn RateProvider>,
}

impl std::fmt::Debug for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Currency").field("base", &self.base).finish()
    }
}

impl Currency {
    /// Creates a converter for `base`, which must be a 3-character code.
    ///
    /// The code is stored upper-cased.
    pub fn new(base: &str, provider: Arc<dyn RateProvider>) -> ExerciseResult<Self> {
        Ok(Self {
            base: normalize_code(base)?,
            provider,
        })
    }

    /// The upper-case base currency code.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Converts `amount` of the base currency into `target`.
    ///
    /// The amount is rounded to 2 decimals first. Converting into the base
    /// currency returns the rounded amount without a rate lookup.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(value))` - the converted amount, rounded to 2 decimals
    /// * `Ok(None)` - no rate was available for `target`
    /// * `Err(InvalidCurrencyCode)` - `target` is not a 3-character code
    pub fn convert(&self, amount: Decimal, target: &str) -> ExerciseResult<Option<Decimal>> {
        let amount = round_measure(amount);
        let target = normalize_code(target)?;
        if target == self.base {
            return Ok(Some(amount));
        }

        let rates = match self.provider.latest_rates(&self.base) {
            Ok(rates) => rates,
            Err(e) => {
                warn!(base = %self.base, target = %target, error = %e, "Rate lookup failed");
                return Ok(None);
            }
        };
        let Some(rate) = rates.get(&target) else {
            warn!(base = %self.base, target = %target, "Target currency missing from rates");
            return Ok(None);
        };
        match amount.checked_mul(*rate) {
            Some(converted) => Ok(Some(round_measure(converted))),
            None => {
                warn!(base = %self.base, target = %target, "Currency conversion overflowed");
                Ok(None)
            }
        }
    }
}

fn normalize_code(code: &str) -> ExerciseResult<String> {
    if code.chars().count() != 3 {
        return Err(ExerciseError::InvalidCurrencyCode {
            code: code.to_string(),
        });
    }
    Ok(code.to_uppercase())
}
