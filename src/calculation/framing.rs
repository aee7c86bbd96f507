//! Picture framing prices.

use rust_decimal::Decimal;

use crate::error::{ExerciseError, ExerciseResult};

const MIN_WIDTH_CM: u32 = 30;
const MAX_WIDTH_CM: u32 = 100;
const MIN_HEIGHT_CM: u32 = 30;
const MAX_HEIGHT_CM: u32 = 60;

/// Frames with an area above this many square centimetres cost the large price.
pub const LARGE_FRAME_AREA_CM2: Decimal = Decimal::from_parts(1600, 0, 0, false, 0);

/// Price in kroner for frames up to [`LARGE_FRAME_AREA_CM2`].
pub const STANDARD_FRAME_PRICE: Decimal = Decimal::from_parts(3000, 0, 0, false, 0);

/// Price in kroner for frames above [`LARGE_FRAME_AREA_CM2`].
pub const LARGE_FRAME_PRICE: Decimal = Decimal::from_parts(3500, 0, 0, false, 0);

fn check_dimension(dimension: &str, value: Decimal, min: u32, max: u32) -> ExerciseResult<()> {
    if value < Decimal::from(min) || value > Decimal::from(max) {
        return Err(ExerciseError::DimensionOutOfRange {
            dimension: dimension.to_string(),
            min,
            max,
        });
    }
    Ok(())
}

/// Calculates the framing price for a picture.
///
/// Width must be 30-100 cm and height 30-60 cm, both inclusive. An area strictly
/// greater than 1600 cm² costs 3500 kr, otherwise 3000 kr.
///
/// # Examples
///
/// ```
/// use boundary_exercises::calculation::calculate_framing_price;
/// use rust_decimal::Decimal;
///
/// let exact = calculate_framing_price(Decimal::from(40), Decimal::from(40)).unwrap();
/// assert_eq!(exact, Decimal::from(3000));
///
/// let above = calculate_framing_price(Decimal::from(40), Decimal::from(41)).unwrap();
/// assert_eq!(above, Decimal::from(3500));
/// ```
pub fn calculate_framing_price(width_cm: Decimal, height_cm: Decimal) -> ExerciseResult<Decimal> {
    check_dimension("Width", width_cm, MIN_WIDTH_CM, MAX_WIDTH_CM)?;
    check_dimension("Height", height_cm, MIN_HEIGHT_CM, MAX_HEIGHT_CM)?;

    let area = width_cm * height_cm;
    if area > LARGE_FRAME_AREA_CM2 {
        Ok(LARGE_FRAME_PRICE)
    } else {
        Ok(STANDARD_FRAME_PRICE)
    }
}
