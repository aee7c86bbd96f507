//! Airline fare discount policy.

use chrono::Weekday;
use rust_decimal::Decimal;

/// Passengers this age or younger fly free.
pub const FREE_TRAVEL_MAX_AGE: u32 = 2;

/// Passengers younger than this get the child discount.
pub const ADULT_AGE: u32 = 18;

/// Stays of at least this many days earn the extra discount.
pub const LONG_STAY_DAYS: u32 = 6;

const CHILD_DISCOUNT: Decimal = Decimal::from_parts(4, 0, 0, false, 1);
const INDIA_DISCOUNT: Decimal = Decimal::from_parts(2, 0, 0, false, 1);
const STANDARD_DISCOUNT: Decimal = Decimal::from_parts(25, 0, 0, false, 2);
const LONG_STAY_DISCOUNT: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Calculates a passenger's fare discount as a fraction between 0 and 1.
///
/// - Age 2 and under: 1.0 (free).
/// - Age 3 to 17: 0.4 for every destination.
/// - Adults: 0.2 to India (case-insensitive) or 0.25 elsewhere, unless the
///   departure is on a Monday or Friday; plus 0.1 for stays of 6 days or more.
///
/// # Examples
///
/// ```
/// use boundary_exercises::calculation::calculate_fare_discount;
/// use chrono::Weekday;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let discount = calculate_fare_discount(18, "USA", Weekday::Thu, 7);
/// assert_eq!(discount, Decimal::from_str("0.35").unwrap());
/// ```
pub fn calculate_fare_discount(
    age: u32,
    destination: &str,
    departure_day: Weekday,
    stay_duration_days: u32,
) -> Decimal {
    if age <= FREE_TRAVEL_MAX_AGE {
        return Decimal::ONE;
    }
    if age < ADULT_AGE {
        return CHILD_DISCOUNT;
    }

    let mut discount = match departure_day {
        Weekday::Mon | Weekday::Fri => Decimal::ZERO,
        _ if destination.eq_ignore_ascii_case("india") => INDIA_DISCOUNT,
        _ => STANDARD_DISCOUNT,
    };
    if stay_duration_days >= LONG_STAY_DAYS {
        discount += LONG_STAY_DISCOUNT;
    }
    discount
}
