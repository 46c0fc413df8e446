//! Validation and display formatting of NHS number strings.
//!
//! Every operation accepts either a `&str` or an `Option<&str>`. An absent
//! identifier is always an error. Malformed input (non-digit characters where
//! only digits are allowed) is also an error, while a well-formed number that
//! fails the domain rules is reported as `Ok(false)`.

use tracing::{debug, trace};

use crate::checksum;
use crate::error::NumberError;

/// Length of the canonical form, e.g. `4010232137`.
pub const CANONICAL_LEN: usize = 10;

/// Length of the display form, e.g. `401 023 2137`.
pub const FORMATTED_LEN: usize = 12;

/// Character indices of the group separators in the display form.
const SEPARATOR_INDICES: [usize; 2] = [3, 7];

const SEPARATOR: char = ' ';

/// Checks that `identifier` is a usable NHS number.
///
/// Returns `Ok(false)` for input of the wrong length, constant-digit
/// sequences such as `4444444444`, prefixes whose check digit would be 10,
/// and check digit mismatches.
///
/// # Errors
///
/// [`NumberError::Missing`] if no identifier is given, and
/// [`NumberError::NonDigit`] if a ten-character identifier contains anything
/// other than ASCII digits.
///
/// # Example
///
/// ```
/// assert_eq!(nhsno_number::validate("4010232137"), Ok(true));
/// assert_eq!(nhsno_number::validate("4010232138"), Ok(false));
/// assert!(nhsno_number::validate("40102321x7").is_err());
/// ```
pub fn validate<'a>(identifier: impl Into<Option<&'a str>>) -> Result<bool, NumberError> {
    let identifier = require(identifier.into())?;

    let len = identifier.chars().count();
    if len != CANONICAL_LEN {
        trace!(len, "rejected: wrong length");
        return Ok(false);
    }

    let digits = digit_values(identifier)?;

    if is_constant_digits(&digits) {
        debug!("rejected: constant digit sequence");
        return Ok(false);
    }

    Ok(checksum_valid(&digits))
}

/// Renders a ten-character identifier in the 3-3-4 display form.
///
/// Input of any other length is returned unchanged. The checksum is not
/// checked, so any ten digits can be formatted.
///
/// # Errors
///
/// [`NumberError::Missing`] if no identifier is given, and
/// [`NumberError::NonDigit`] if a ten-character identifier contains anything
/// other than ASCII digits.
pub fn format<'a>(identifier: impl Into<Option<&'a str>>) -> Result<String, NumberError> {
    let identifier = require(identifier.into())?;

    if identifier.chars().count() != CANONICAL_LEN {
        return Ok(identifier.to_string());
    }

    digit_values(identifier)?;

    // All ASCII from here on, so byte offsets are character offsets.
    Ok(format!(
        "{} {} {}",
        &identifier[..3],
        &identifier[3..6],
        &identifier[6..]
    ))
}

/// Removes the group separators from a display-form identifier.
///
/// Anything [`is_formatted`] rejects is returned unchanged. The remaining
/// characters are not checked for digits.
///
/// # Errors
///
/// [`NumberError::Missing`] if no identifier is given.
pub fn strip_formatting<'a>(identifier: impl Into<Option<&'a str>>) -> Result<String, NumberError> {
    let identifier = require(identifier.into())?;

    if is_formatted(identifier)? {
        Ok(identifier.replace(SEPARATOR, ""))
    } else {
        Ok(identifier.to_string())
    }
}

/// Reports whether `identifier` has the 3-3-4 display shape.
///
/// The input must be twelve characters long, and once surrounding whitespace
/// is trimmed it must contain exactly two spaces, at indices 3 and 7. Only
/// the separator positions are inspected; the other characters may be
/// anything.
///
/// # Errors
///
/// [`NumberError::Missing`] if no identifier is given.
pub fn is_formatted<'a>(identifier: impl Into<Option<&'a str>>) -> Result<bool, NumberError> {
    let identifier = require(identifier.into())?;

    if identifier.chars().count() != FORMATTED_LEN {
        return Ok(false);
    }

    let mut separators = identifier
        .trim()
        .chars()
        .enumerate()
        .filter(|&(_, c)| c == SEPARATOR)
        .map(|(index, _)| index);

    let first = separators.next();
    let second = separators.next();
    let extra = separators.next();

    Ok(extra.is_none()
        && first == Some(SEPARATOR_INDICES[0])
        && second == Some(SEPARATOR_INDICES[1]))
}

fn require(identifier: Option<&str>) -> Result<&str, NumberError> {
    identifier.ok_or(NumberError::Missing)
}

/// Converts a canonical-length identifier into digit values.
///
/// Caller must have checked the length.
fn digit_values(identifier: &str) -> Result<[u32; CANONICAL_LEN], NumberError> {
    let mut digits = [0u32; CANONICAL_LEN];
    for (index, c) in identifier.chars().enumerate() {
        let Some(value) = c.to_digit(10) else {
            debug!(index, "rejected: non-digit character");
            return Err(NumberError::NonDigit { index, found: c });
        };
        digits[index] = value;
    }
    Ok(digits)
}

fn is_constant_digits(digits: &[u32; CANONICAL_LEN]) -> bool {
    digits.iter().all(|&d| d == digits[0])
}

fn checksum_valid(digits: &[u32; CANONICAL_LEN]) -> bool {
    let supplied = digits[CANONICAL_LEN - 1];

    match checksum::compute(&digits[..CANONICAL_LEN - 1]) {
        Some(expected) => {
            let valid = u32::from(expected) == supplied;
            if !valid {
                trace!("rejected: check digit mismatch");
            }
            valid
        }
        None => {
            debug!("rejected: check digit would be 10");
            false
        }
    }
}
