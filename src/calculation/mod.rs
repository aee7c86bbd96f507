//! Decision functions for the boundary exercises.
//!
//! This module contains the stateless calculators: four-function arithmetic,
//! Roman numeral parsing, printer cartridge discounts, e-shop payment discounts,
//! picture framing prices, driver's license evaluation and the airline fare
//! discount policy.

mod airline_discount;
mod calculator;
mod drivers_license;
mod eshop;
mod framing;
mod printer_cartridges;
mod roman_numerals;

pub use airline_discount::{ADULT_AGE, FREE_TRAVEL_MAX_AGE, LONG_STAY_DAYS, calculate_fare_discount};
pub use calculator::{add, divide, multiply, subtract};
pub use drivers_license::{
    LicenseDecision, MAX_PRACTICAL_ERRORS, THEORY_PASS_SCORE, evaluate_candidate,
};
pub use eshop::{
    FIVE_PERCENT_LIMIT, FinalPrice, NO_DISCOUNT_LIMIT, calculate_final_price,
    calculate_purchase_discount,
};
pub use framing::{
    LARGE_FRAME_AREA_CM2, LARGE_FRAME_PRICE, STANDARD_FRAME_PRICE, calculate_framing_price,
};
pub use printer_cartridges::{
    BULK_DISCOUNT_THRESHOLD, CartridgeDiscount, MINIMUM_CARTRIDGES, cartridges,
};
pub use roman_numerals::{MAX_ROMAN_VALUE, roman_to_decimal};
