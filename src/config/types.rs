//! Configuration types for the unit converters.
//!
//! Every field has a default, so an empty YAML document is a valid
//! configuration.

use serde::Deserialize;
use std::path::PathBuf;

/// Default endpoint for exchange rate lookups.
pub const DEFAULT_RATES_URL: &str = "https://api.freecurrencyapi.com/v1/latest";

/// Default timeout for a single rate lookup, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default location of the grade reference store.
pub const DEFAULT_GRADE_DATABASE: &str = "grades.db";

/// Settings for the currency rate provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// URL of the latest-rates endpoint.
    pub api_url: String,
    /// API key sent as the `apikey` query parameter.
    pub api_key: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_RATES_URL.to_string(),
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Settings for the grade reference store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GradeConfig {
    /// Path of the SQLite database file.
    pub database_path: PathBuf,
}

impl Default for GradeConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_GRADE_DATABASE),
        }
    }
}

/// Complete converter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Currency rate provider settings.
    pub currency: CurrencyConfig,
    /// Grade store settings.
    pub grades: GradeConfig,
}
