//! Four-function arithmetic over decimals.
//!
//! Every operation uses checked decimal arithmetic, so overflow is reported
//! as an error instead of panicking.

use rust_decimal::Decimal;

use crate::error::{ExerciseError, ExerciseResult};

fn overflow(operation: &str) -> ExerciseError {
    ExerciseError::ArithmeticOverflow {
        operation: operation.to_string(),
    }
}

/// Adds two numbers.
///
/// # Examples
///
/// ```
/// use boundary_exercises::calculation::add;
/// use rust_decimal::Decimal;
///
/// assert_eq!(add(Decimal::from(4), Decimal::from(13)).unwrap(), Decimal::from(17));
/// ```
pub fn add(a: Decimal, b: Decimal) -> ExerciseResult<Decimal> {
    a.checked_add(b).ok_or_else(|| overflow("addition"))
}

/// Subtracts `b` from `a`.
pub fn subtract(a: Decimal, b: Decimal) -> ExerciseResult<Decimal> {
    a.checked_sub(b).ok_or_else(|| overflow("subtraction"))
}

/// Multiplies two numbers.
pub fn multiply(a: Decimal, b: Decimal) -> ExerciseResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| overflow("multiplication"))
}

/// Divides `a` by `b`.
///
/// # Errors
///
/// Returns [`ExerciseError::DivisionByZero`] when `b` is zero.
///
/// # Examples
///
/// ```
/// use boundary_exercises::calculation::divide;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = divide(Decimal::from(5), Decimal::from(2)).unwrap();
/// assert_eq!(result, Decimal::from_str("2.5").unwrap());
/// assert!(divide(Decimal::from(10), Decimal::ZERO).is_err());
/// ```
pub fn divide(a: Decimal, b: Decimal) -> ExerciseResult<Decimal> {
    if b.is_zero() {
        return Err(ExerciseError::DivisionByZero);
    }
    a.checked_div(b).ok_or_else(|| overflow("division"))
}
