//! E-shop payment discounts.
//!
//! Purchases up to 300 kr get no discount, purchases up to 800 kr get 5%,
//! and anything above 800 kr gets 10%. Both boundaries are inclusive on the
//! lower tier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ExerciseError, ExerciseResult};

/// Upper bound (inclusive) of the no-discount tier, in kroner.
pub const NO_DISCOUNT_LIMIT: Decimal = Decimal::from_parts(300, 0, 0, false, 0);

/// Upper bound (inclusive) of the 5% tier, in kroner.
pub const FIVE_PERCENT_LIMIT: Decimal = Decimal::from_parts(800, 0, 0, false, 0);

/// The price owed after the purchase discount is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalPrice {
    /// The discounted price, rounded to 2 decimal places.
    pub final_price: Decimal,
    /// The discount percentage that was applied (0, 5 or 10).
    pub discount_percent: Decimal,
}

/// Returns the discount percentage for a purchase amount in kroner.
///
/// # Errors
///
/// Returns [`ExerciseError::NegativeAmount`] for negative amounts.
pub fn calculate_purchase_discount(amount_kr: Decimal) -> ExerciseResult<Decimal> {
    if amount_kr < Decimal::ZERO {
        return Err(ExerciseError::NegativeAmount);
    }
    let percent = if amount_kr <= NO_DISCOUNT_LIMIT {
        Decimal::ZERO
    } else if amount_kr <= FIVE_PERCENT_LIMIT {
        Decimal::from(5)
    } else {
        Decimal::from(10)
    };
    Ok(percent)
}

/// Calculates the final price after the purchase discount.
///
/// # Examples
///
/// ```
/// use boundary_exercises::calculation::calculate_final_price;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let price = calculate_final_price(Decimal::from_str("300.01").unwrap()).unwrap();
/// assert_eq!(price.final_price, Decimal::from_str("285.01").unwrap());
/// assert_eq!(price.discount_percent, Decimal::from(5));
/// ```
pub fn calculate_final_price(amount_kr: Decimal) -> ExerciseResult<FinalPrice> {
    let discount_percent = calculate_purchase_discount(amount_kr)?;
    let final_price = amount_kr
        .checked_mul(discount_percent)
        .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
        .and_then(|discount_amount| amount_kr.checked_sub(discount_amount))
        .ok_or_else(|| ExerciseError::ArithmeticOverflow {
            operation: "final price".to_string(),
        })?;
    Ok(FinalPrice {
        final_price: final_price.round_dp(2),
        discount_percent,
    })
}
