//! Roman numeral parsing.
//!
//! Numerals are evaluated in a single left-to-right scan that tracks the
//! previous symbol's value and how many times the current symbol has repeated.

use crate::error::{ExerciseError, ExerciseResult};

/// The largest value a Roman numeral may evaluate to.
pub const MAX_ROMAN_VALUE: u32 = 3999;

fn symbol_value(symbol: char) -> Option<u64> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Returns true if `lesser` may directly precede `greater` in subtractive notation.
fn is_subtractive_pair(lesser: char, greater: char) -> bool {
    matches!(
        (lesser, greater),
        ('I', 'V') | ('I', 'X') | ('X', 'L') | ('X', 'C') | ('C', 'D') | ('C', 'M')
    )
}

/// Converts a Roman numeral to its decimal value.
///
/// # Rules
///
/// - Only `I V X L C D M` are accepted.
/// - `V`, `L` and `D` never repeat; other symbols repeat at most 3 times in a row.
/// - A larger symbol may follow a smaller one only for `IV IX XL XC CD CM`.
/// - The result may not exceed [`MAX_ROMAN_VALUE`].
///
/// An empty string evaluates to 0.
///
/// # Examples
///
/// ```
/// use boundary_exercises::calculation::roman_to_decimal;
///
/// assert_eq!(roman_to_decimal("MCDXLIV").unwrap(), 1444);
/// assert!(roman_to_decimal("IIII").is_err());
/// assert!(roman_to_decimal("IC").is_err());
/// ```
pub fn roman_to_decimal(roman: &str) -> ExerciseResult<u32> {
    let mut total: u64 = 0;
    let mut prev_value: u64 = 0;
    let mut repeat_count = 1;
    let mut last_symbol: Option<char> = None;

    for symbol in roman.chars() {
        let value = symbol_value(symbol)
            .ok_or(ExerciseError::InvalidRomanCharacter { character: symbol })?;

        if last_symbol == Some(symbol) {
            repeat_count += 1;
            if matches!(symbol, 'V' | 'L' | 'D') {
                return Err(ExerciseError::RomanSymbolNotRepeatable { symbol });
            }
            if repeat_count > 3 {
                return Err(ExerciseError::RomanRepeatLimit { symbol });
            }
        } else {
            repeat_count = 1;
        }

        match last_symbol {
            Some(previous) if value > prev_value => {
                if !is_subtractive_pair(previous, symbol) {
                    return Err(ExerciseError::InvalidSubtractivePair {
                        pair: format!("{previous}{symbol}"),
                    });
                }
                // Undo the previous addition, then subtract it.
                total = total + value - 2 * prev_value;
            }
            _ => total += value,
        }

        prev_value = value;
        last_symbol = Some(symbol);
    }

    match u32::try_from(total) {
        Ok(value) if value <= MAX_ROMAN_VALUE => Ok(value),
        _ => Err(ExerciseError::RomanValueTooLarge {
            value: u32::try_from(total).unwrap_or(u32::MAX),
        }),
    }
}
