//! Error types for the boundary exercises.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every domain or validation failure an exercise can report.
//!
//! Lookups against external data (currency rates, grade rows) do not use this
//! type to report a miss. They return `Ok(None)` instead, so "answer not
//! available" stays distinguishable from "caller misused the API".

use thiserror::Error;

/// The main error type for the boundary exercises.
///
/// # Example
///
/// ```
/// use boundary_exercises::error::ExerciseError;
///
/// let error = ExerciseError::NonPositiveAmount;
/// assert_eq!(error.to_string(), "Amount cannot be zero or negative");
/// ```
#[derive(Debug, Error)]
pub enum ExerciseError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A division had a zero divisor.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// A decimal operation overflowed.
    #[error("Arithmetic overflow during {operation}")]
    ArithmeticOverflow {
        /// The operation that overflowed.
        operation: String,
    },

    /// A character outside the Roman numeral alphabet was found.
    #[error("Invalid Roman numeral character: {character}")]
    InvalidRomanCharacter {
        /// The offending character.
        character: char,
    },

    /// V, L or D appeared twice in a row.
    #[error("{symbol} cannot be repeated.")]
    RomanSymbolNotRepeatable {
        /// The repeated symbol.
        symbol: char,
    },

    /// A symbol appeared more than three times in a row.
    #[error("{symbol} cannot be repeated more than 3 times.")]
    RomanRepeatLimit {
        /// The repeated symbol.
        symbol: char,
    },

    /// A smaller symbol preceded a larger one outside the subtractive pairs.
    #[error("Invalid subtractive combination: {pair}")]
    InvalidSubtractivePair {
        /// The two adjacent symbols.
        pair: String,
    },

    /// The numeral evaluated above 3999.
    #[error("Value exceeds maximum representable Roman numeral (3999).")]
    RomanValueTooLarge {
        /// The value that was computed.
        value: u32,
    },

    /// A password was shorter than the minimum length.
    #[error("Password must be at least {min} characters long.")]
    PasswordTooShort {
        /// The minimum accepted length.
        min: usize,
    },

    /// A password was longer than the maximum length.
    #[error("Password must be at most {max} characters long.")]
    PasswordTooLong {
        /// The maximum accepted length.
        max: usize,
    },

    /// An order amount was zero or negative.
    #[error("Amount cannot be zero or negative")]
    NonPositiveAmount,

    /// An order amount was positive but below the minimum order.
    #[error("Amount must be at least {minimum}")]
    BelowMinimumAmount {
        /// The minimum accepted amount.
        minimum: i64,
    },

    /// A purchase amount was negative.
    #[error("Amount cannot be negative")]
    NegativeAmount,

    /// A frame dimension fell outside its accepted range.
    #[error("{dimension} must be between {min} and {max} cm inclusive.")]
    DimensionOutOfRange {
        /// The dimension name ("Width" or "Height").
        dimension: String,
        /// The smallest accepted value.
        min: u32,
        /// The largest accepted value.
        max: u32,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A length or weight system token was not recognised.
    #[error("System must be 'Metric' or 'Imperial', got '{system}'")]
    UnsupportedMeasurementSystem {
        /// The rejected token.
        system: String,
    },

    /// A temperature scale token was not recognised.
    #[error("Scale must be 'C' (Celsius), 'F' (Fahrenheit), or 'K' (Kelvin), got '{scale}'")]
    UnsupportedTemperatureScale {
        /// The rejected token.
        scale: String,
    },

    /// A currency code did not have exactly three characters.
    #[error("Currency code must be 3 letters (e.g., 'USD', 'EUR', 'DKK'), got '{code}'")]
    InvalidCurrencyCode {
        /// The rejected code.
        code: String,
    },

    /// The rate provider could not produce a rate table.
    #[error("Rate lookup failed: {message}")]
    RateLookup {
        /// A description of the failure.
        message: String,
    },

    /// A grading country was not recognised.
    #[error("Country must be 'Denmark' or 'America', got '{country}'")]
    UnsupportedGradingCountry {
        /// The rejected country.
        country: String,
    },

    /// A Danish grade query was not an integer.
    #[error("Danish grade must be an integer, got '{grade}'")]
    InvalidGrade {
        /// The rejected grade.
        grade: String,
    },

    /// The grade reference store could not be read or written.
    #[error("Grade store error: {message}")]
    GradeStore {
        /// A description of the storage failure.
        message: String,
    },
}

impl ExerciseError {
    /// Builds an [`ExerciseError::InvalidEmployee`] for the given field.
    pub fn invalid_employee(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidEmployee {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<rusqlite::Error> for ExerciseError {
    fn from(error: rusqlite::Error) -> Self {
        Self::GradeStore {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return ExerciseError.
pub type ExerciseResult<T> = Result<T, ExerciseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = ExerciseError::ConfigNotFound {
            path: "/missing/converter.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/converter.yaml"
        );
    }

    #[test]
    fn test_cartridge_messages_are_exact() {
        assert_eq!(
            ExerciseError::NonPositiveAmount.to_string(),
            "Amount cannot be zero or negative"
        );
        assert_eq!(
            ExerciseError::BelowMinimumAmount { minimum: 5 }.to_string(),
            "Amount must be at least 5"
        );
    }

    #[test]
    fn test_dimension_out_of_range_displays_bounds() {
        let error = ExerciseError::DimensionOutOfRange {
            dimension: "Width".to_string(),
            min: 30,
            max: 100,
        };
        assert_eq!(
            error.to_string(),
            "Width must be between 30 and 100 cm inclusive."
        );
    }

    #[test]
    fn test_invalid_employee_displays_field_and_message() {
        let error =
            ExerciseError::invalid_employee("date_of_birth", "must be at least 18 years old");
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'date_of_birth': must be at least 18 years old"
        );
    }

    #[test]
    fn test_roman_errors_name_the_symbol() {
        assert_eq!(
            ExerciseError::RomanRepeatLimit { symbol: 'I' }.to_string(),
            "I cannot be repeated more than 3 times."
        );
        assert_eq!(
            ExerciseError::InvalidSubtractivePair {
                pair: "IL".to_string()
            }
            .to_string(),
            "Invalid subtractive combination: IL"
        );
    }

    #[test]
    fn test_sqlite_errors_become_grade_store_errors() {
        let error: ExerciseError = rusqlite::Error::InvalidQuery.into();
        assert!(matches!(error, ExerciseError::GradeStore { .. }));
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ExerciseError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_division_by_zero() -> ExerciseResult<()> {
            Err(ExerciseError::DivisionByZero)
        }

        fn propagates_error() -> ExerciseResult<()> {
            returns_division_by_zero()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
