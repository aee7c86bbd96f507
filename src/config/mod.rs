//! Configuration loading for the unit converters.
//!
//! The converter configuration names the currency rate endpoint and the
//! location of the grade reference store.
//!
//! # Example
//!
//! ```no_run
//! use boundary_exercises::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/converter.yaml").unwrap();
//! println!("Grades stored in {}", config.grades().database_path.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ConverterConfig, CurrencyConfig, DEFAULT_GRADE_DATABASE, DEFAULT_RATES_URL,
    DEFAULT_TIMEOUT_SECS, GradeConfig,
};
