//! Printer cartridge order discounts.
//!
//! Orders must be for at least [`MINIMUM_CARTRIDGES`] cartridges; orders of
//! [`BULK_DISCOUNT_THRESHOLD`] or more get a 20% discount.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ExerciseError, ExerciseResult};

/// The smallest accepted order.
pub const MINIMUM_CARTRIDGES: i64 = 5;

/// Orders at or above this size get the bulk discount.
pub const BULK_DISCOUNT_THRESHOLD: i64 = 100;

/// The discount granted for a cartridge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartridgeDiscount {
    /// Orders from 5 to 99 cartridges.
    NoDiscount,
    /// Orders of 100 cartridges or more.
    TwentyPercent,
}

impl CartridgeDiscount {
    /// The customer-facing message, spelled exactly as printed on receipts.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoDiscount => "no discound",
            Self::TwentyPercent => "you get 20% discound",
        }
    }
}

impl fmt::Display for CartridgeDiscount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Determines the discount for an order of `amount` cartridges.
///
/// # Errors
///
/// - [`ExerciseError::NonPositiveAmount`] for zero or negative amounts
/// - [`ExerciseError::BelowMinimumAmount`] for 1 to 4 cartridges
///
/// # Examples
///
/// ```
/// use boundary_exercises::calculation::cartridges;
///
/// assert_eq!(cartridges(99).unwrap().message(), "no discound");
/// assert_eq!(cartridges(100).unwrap().message(), "you get 20% discound");
/// assert_eq!(cartridges(4).unwrap_err().to_string(), "Amount must be at least 5");
/// ```
pub fn cartridges(amount: i64) -> ExerciseResult<CartridgeDiscount> {
    if amount <= 0 {
        return Err(ExerciseError::NonPositiveAmount);
    }
    if amount < MINIMUM_CARTRIDGES {
        return Err(ExerciseError::BelowMinimumAmount {
            minimum: MINIMUM_CARTRIDGES,
        });
    }
    if amount >= BULK_DISCOUNT_THRESHOLD {
        return Ok(CartridgeDiscount::TwentyPercent);
    }
    Ok(CartridgeDiscount::NoDiscount)
}
