//! Application state for the converter API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::conversion::{GradeStore, HttpRateProvider, RateProvider};
use crate::error::ExerciseResult;

/// Shared application state.
///
/// Holds the opened grade store and the rate provider used by currency
/// conversions.
#[derive(Clone)]
pub struct AppState {
    grades: Arc<GradeStore>,
    rates: Arc<dyn RateProvider>,
}

impl AppState {
    /// Creates the state from configuration.
    ///
    /// Opens (and if needed seeds) the grade store at the configured path and
    /// builds an HTTP rate provider from the currency settings.
    pub fn new(config: ConfigLoader) -> ExerciseResult<Self> {
        let grades = GradeStore::open(&config.grades().database_path)?;
        let rates = HttpRateProvider::new(config.currency());
        Ok(Self::with_parts(grades, Arc::new(rates)))
    }

    /// Creates the state from already built parts.
    pub fn with_parts(grades: GradeStore, rates: Arc<dyn RateProvider>) -> Self {
        Self {
            grades: Arc::new(grades),
            rates,
        }
    }

    /// Returns a shared handle to the grade store.
    pub fn grades(&self) -> Arc<GradeStore> {
        Arc::clone(&self.grades)
    }

    /// Returns a shared handle to the rate provider.
    pub fn rates(&self) -> Arc<dyn RateProvider> {
        Arc::clone(&self.rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConverterConfig, GradeConfig};
    use tempfile::TempDir;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_new_opens_configured_grade_store() {
        let dir = TempDir::new().unwrap();
        let database_path = dir.path().join("grades.db");
        let config = ConverterConfig {
            grades: GradeConfig {
                database_path: database_path.clone(),
            },
            ..ConverterConfig::default()
        };

        let state = AppState::new(ConfigLoader::new(config)).unwrap();
        assert_eq!(state.grades().path(), database_path.as_path());
        assert!(database_path.exists());
        assert_eq!(state.grades().mappings().unwrap().len(), 7);
    }
}
