//! Configuration loading from YAML.

use std::fs;
use std::path::Path;

use crate::error::{ExerciseError, ExerciseResult};

use super::types::{ConverterConfig, CurrencyConfig, GradeConfig};

/// Loads and provides access to converter configuration.
///
/// # Example
///
/// ```no_run
/// use boundary_exercises::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/converter.yaml").unwrap();
/// println!("Rates from {}", loader.currency().api_url);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ConverterConfig,
}

impl ConfigLoader {
    /// Wraps an already built configuration.
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file cannot be read (`ConfigNotFound`)
    /// - The file is not valid YAML for [`ConverterConfig`] (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> ExerciseResult<Self> {
        let config = Self::load_yaml::<ConverterConfig>(path.as_ref())?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ExerciseResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ExerciseError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ExerciseError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the full configuration.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Returns the currency rate provider settings.
    pub fn currency(&self) -> &CurrencyConfig {
        &self.config.currency
    }

    /// Returns the grade store settings.
    pub fn grades(&self) -> &GradeConfig {
        &self.config.grades
    }
}
