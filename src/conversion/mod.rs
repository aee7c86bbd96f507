//! Unit converters.
//!
//! Length, weight and temperature conversions are pure. Currency conversion
//! consults a [`RateProvider`] on every call and grade conversion reads a
//! small SQLite reference table through an explicitly opened [`GradeStore`].
//!
//! Converted values are rounded to [`MEASURE_DECIMALS`] decimal places.

mod currency;
mod grade;
mod scale;
mod temperature;

use rust_decimal::Decimal;

use crate::error::{ExerciseError, ExerciseResult};

pub use currency::{Currency, HttpRateProvider, RateProvider, RateTable, parse_rates};
pub use grade::{GradeMapping, GradeStore, GradingCountry, SEED_GRADES};
pub use scale::{CM_PER_INCH, Length, MeasurementSystem, POUNDS_PER_KG, Weight};
pub use temperature::{KELVIN_OFFSET, Temperature, TemperatureScale};

/// Number of decimal places every converter rounds to.
pub const MEASURE_DECIMALS: u32 = 2;

/// Rounds half to even at [`MEASURE_DECIMALS`] places.
pub(crate) fn round_measure(value: Decimal) -> Decimal {
    value.round_dp(MEASURE_DECIMALS)
}

/// Turns the result of a checked decimal operation into an [`ExerciseResult`].
pub(crate) fn checked(value: Option<Decimal>, operation: &str) -> ExerciseResult<Decimal> {
    value.ok_or_else(|| ExerciseError::ArithmeticOverflow {
        operation: operation.to_string(),
    })
}
