//! Modulus-11 check digit.
//!
//! The first nine digits are multiplied by descending weights from 10 to 2
//! and summed. The check digit is `11 - (sum % 11)`, where 11 maps to 0 and
//! 10 marks the prefix as unusable.
//!
//! Worked example for `401 023 213`:
//!
//! ```text
//! 4*10 + 0*9 + 1*8 + 0*7 + 2*6 + 3*5 + 2*4 + 1*3 + 3*2 = 92
//! 92 % 11 = 4
//! 11 - 4  = 7   ->  401 023 2137
//! ```

use tracing::trace;

use crate::error::NumberError;

/// Positional weights applied to digits 1 through 9.
pub const WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];

const MODULUS: u32 = 11;

/// Computes the check digit from the leading nine digit values.
///
/// Returns `None` when the computed value is 10; such prefixes are never
/// issued.
pub(crate) fn compute(digits: &[u32]) -> Option<u8> {
    let sum: u32 = digits.iter().zip(WEIGHTS).map(|(d, w)| d * w).sum();

    match MODULUS - (sum % MODULUS) {
        11 => Some(0),
        10 => {
            trace!(sum, "prefix yields check digit 10");
            None
        }
        // 1..=9
        n => Some(n as u8),
    }
}

/// Computes the check digit for a nine-digit prefix.
///
/// Returns `Ok(None)` when the prefix cannot carry a valid check digit.
///
/// # Example
///
/// ```
/// assert_eq!(nhsno_number::check_digit("401023213"), Ok(Some(7)));
/// assert_eq!(nhsno_number::check_digit("000000006"), Ok(None));
/// ```
pub fn check_digit(first_nine: &str) -> Result<Option<u8>, NumberError> {
    let actual = first_nine.chars().count();
    if actual != WEIGHTS.len() {
        return Err(NumberError::Length {
            expected: WEIGHTS.len(),
            actual,
        });
    }

    let mut digits = [0u32; 9];
    for (index, c) in first_nine.chars().enumerate() {
        digits[index] = c
            .to_digit(10)
            .ok_or(NumberError::NonDigit { index, found: c })?;
    }

    Ok(compute(&digits))
}
