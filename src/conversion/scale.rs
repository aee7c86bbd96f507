//! Length and weight conversion between metric and imperial units.
//!
//! Lengths convert between centimetres and inches, weights between kilograms
//! and pounds. The input measure is rounded to 2 decimals when the converter is
//! built and the result is rounded again, so a round trip only matches the
//! original to within about 0.1.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ExerciseError, ExerciseResult};

use super::{checked, round_measure};

/// Centimetres per inch.
pub const CM_PER_INCH: Decimal = Decimal::from_parts(254, 0, 0, false, 2);

/// Pounds per kilogram.
pub const POUNDS_PER_KG: Decimal = Decimal::from_parts(220_462, 0, 0, false, 5);

/// The unit system a length or weight is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementSystem {
    /// Centimetres and kilograms.
    Metric,
    /// Inches and pounds.
    Imperial,
}

impl MeasurementSystem {
    /// The opposite system.
    pub fn other(&self) -> Self {
        match self {
            Self::Metric => Self::Imperial,
            Self::Imperial => Self::Metric,
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => f.write_str("Metric"),
            Self::Imperial => f.write_str("Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = ExerciseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            _ => Err(ExerciseError::UnsupportedMeasurementSystem {
                system: value.to_string(),
            }),
        }
    }
}

/// A length in centimetres (metric) or inches (imperial).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Length {
    measure: Decimal,
    system: MeasurementSystem,
}

impl Length {
    /// Builds a length from a measure and a system name ("Metric" or "Imperial",
    /// case-insensitive).
    pub fn new(measure: Decimal, system: &str) -> ExerciseResult<Self> {
        Ok(Self::with_system(measure, system.parse()?))
    }

    /// Builds a length from a measure and an already parsed system.
    pub fn with_system(measure: Decimal, system: MeasurementSystem) -> Self {
        Self {
            measure: round_measure(measure),
            system,
        }
    }

    /// The stored measure, rounded to 2 decimals.
    pub fn measure(&self) -> Decimal {
        self.measure
    }

    /// The system the stored measure is expressed in.
    pub fn system(&self) -> MeasurementSystem {
        self.system
    }

    /// Converts to the other system, rounded to 2 decimals.
    ///
    /// # Examples
    ///
    /// ```
    /// use boundary_exercises::conversion::Length;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let inches = Length::new(Decimal::from(100), "Metric").unwrap().convert().unwrap();
    /// assert_eq!(inches, Decimal::from_str("39.37").unwrap());
    /// ```
    pub fn convert(&self) -> ExerciseResult<Decimal> {
        let result = match self.system {
            MeasurementSystem::Metric => self.measure.checked_div(CM_PER_INCH),
            MeasurementSystem::Imperial => self.measure.checked_mul(CM_PER_INCH),
        };
        Ok(round_measure(checked(result, "length conversion")?))
    }
}

/// A weight in kilograms (metric) or pounds (imperial).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weight {
    measure: Decimal,
    system: MeasurementSystem,
}

impl Weight {
    /// Builds a weight from a measure and a system name ("Metric" or "Imperial",
    /// case-insensitive).
    pub fn new(measure: Decimal, system: &str) -> ExerciseResult<Self> {
        Ok(Self::with_system(measure, system.parse()?))
    }

    /// Builds a weight from a measure and an already parsed system.
    pub fn with_system(measure: Decimal, system: MeasurementSystem) -> Self {
        Self {
            measure: round_measure(measure),
            system,
        }
    }

    /// The stored measure, rounded to 2 decimals.
    pub fn measure(&self) -> Decimal {
        self.measure
    }

    /// The system the stored measure is expressed in.
    pub fn system(&self) -> MeasurementSystem {
        self.system
    }

    /// Converts to the other system, rounded to 2 decimals.
    pub fn convert(&self) -> ExerciseResult<Decimal> {
        let result = match self.system {
            MeasurementSystem::Metric => self.measure.checked_mul(POUNDS_PER_KG),
            MeasurementSystem::Imperial => self.measure.checked_div(POUNDS_PER_KG),
        };
        Ok(round_measure(checked(result, "weight conversion")?))
    }
}
