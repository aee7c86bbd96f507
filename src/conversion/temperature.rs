//! Temperature conversion between Celsius, Fahrenheit and Kelvin.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ExerciseError, ExerciseResult};

use super::{checked, round_measure};

/// Offset between Celsius and Kelvin.
pub const KELVIN_OFFSET: Decimal = Decimal::from_parts(27_315, 0, 0, false, 2);

const FAHRENHEIT_OFFSET: Decimal = Decimal::from_parts(32, 0, 0, false, 0);
const NINE: Decimal = Decimal::from_parts(9, 0, 0, false, 0);
const FIVE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// A temperature scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureScale {
    /// Degrees Celsius ("C").
    Celsius,
    /// Degrees Fahrenheit ("F").
    Fahrenheit,
    /// Kelvin ("K").
    Kelvin,
}

impl TemperatureScale {
    /// The single-letter symbol for the scale.
    pub fn symbol(&self) -> char {
        match self {
            Self::Celsius => 'C',
            Self::Fahrenheit => 'F',
            Self::Kelvin => 'K',
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for TemperatureScale {
    type Err = ExerciseError;

    /// Parses "C", "F" or "K", case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_uppercase().as_str() {
            "C" => Ok(Self::Celsius),
            "F" => Ok(Self::Fahrenheit),
            "K" => Ok(Self::Kelvin),
            _ => Err(ExerciseError::UnsupportedTemperatureScale {
                scale: value.to_string(),
            }),
        }
    }
}

/// A temperature measure on a given scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Temperature {
    measure: Decimal,
    scale: TemperatureScale,
}

impl Temperature {
    /// Builds a temperature from a measure and a scale symbol.
    ///
    /// The measure is rounded to 2 decimals.
    pub fn new(measure: Decimal, scale: &str) -> ExerciseResult<Self> {
        Ok(Self::with_scale(measure, scale.parse()?))
    }

    /// Builds a temperature from a measure and an already parsed scale.
    pub fn with_scale(measure: Decimal, scale: TemperatureScale) -> Self {
        Self {
            measure: round_measure(measure),
            scale,
        }
    }

    /// The stored measure.
    pub fn measure(&self) -> Decimal {
        self.measure
    }

    /// The scale of the stored measure.
    pub fn scale(&self) -> TemperatureScale {
        self.scale
    }

    /// Converts to the scale named by `destination_scale` ("C", "F" or "K").
    ///
    /// # Examples
    ///
    /// ```
    /// use boundary_exercises::conversion::Temperature;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let temp = Temperature::new(Decimal::from(25), "C").unwrap();
    /// assert_eq!(temp.convert("F").unwrap(), Decimal::from(77));
    /// assert_eq!(temp.convert("K").unwrap(), Decimal::from_str("298.15").unwrap());
    /// assert!(temp.convert("X").is_err());
    /// ```
    pub fn convert(&self, destination_scale: &str) -> ExerciseResult<Decimal> {
        self.convert_to(destination_scale.parse()?)
    }

    /// Converts to `destination`, rounded to 2 decimals.
    ///
    /// Converting to the stored scale returns the stored measure untouched.
    pub fn convert_to(&self, destination: TemperatureScale) -> ExerciseResult<Decimal> {
        use TemperatureScale::{Celsius, Fahrenheit, Kelvin};

        let m = self.measure;
        let converted = match (self.scale, destination) {
            (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => return Ok(m),
            (Celsius, Fahrenheit) => celsius_to_fahrenheit(m),
            (Celsius, Kelvin) => m.checked_add(KELVIN_OFFSET),
            (Fahrenheit, Celsius) => fahrenheit_to_celsius(m),
            (Fahrenheit, Kelvin) => {
                fahrenheit_to_celsius(m).and_then(|c| c.checked_add(KELVIN_OFFSET))
            }
            (Kelvin, Celsius) => m.checked_sub(KELVIN_OFFSET),
            (Kelvin, Fahrenheit) => m.checked_sub(KELVIN_OFFSET).and_then(celsius_to_fahrenheit),
        };
        Ok(round_measure(checked(converted, "temperature conversion")?))
    }
}

fn celsius_to_fahrenheit(celsius: Decimal) -> Option<Decimal> {
    celsius
        .checked_mul(NINE)?
        .checked_div(FIVE)?
        .checked_add(FAHRENHEIT_OFFSET)
}

fn fahrenheit_to_celsius(fahrenheit: Decimal) -> Option<Decimal> {
    fahrenheit
        .checked_sub(FAHRENHEIT_OFFSET)?
        .checked_mul(FIVE)?
        .checked_div(NINE)
}
