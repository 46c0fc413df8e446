//! # nhsno-number
//!
//! Validation, check-digit computation, and display formatting for NHS
//! numbers.
//!
//! ## Number Format
//!
//! An NHS number is ten ASCII digits. The first nine identify the patient
//! and the tenth is a modulus-11 check digit. For display the digits are
//! grouped 3-3-4:
//!
//! - canonical: `4010232137`
//! - formatted: `401 023 2137`
//!
//! Numbers made of a single repeated digit (`444 444 4444`) are never
//! issued and fail validation even when the checksum works out, as do
//! prefixes whose check digit would be 10.
//!
//! ## Outcomes
//!
//! Operations distinguish malformed input from invalid numbers:
//!
//! - `Err(NumberError)` for absent input or non-digit characters
//! - `Ok(false)` for well-formed input that is not a usable number
//!
//! ```
//! use nhsno_number::{format, strip_formatting, validate, NumberError};
//!
//! assert_eq!(validate("4010232137"), Ok(true));
//! assert_eq!(validate("4444444444"), Ok(false));
//! assert_eq!(validate(None), Err(NumberError::Missing));
//!
//! let display = format("4010232137")?;
//! assert_eq!(display, "401 023 2137");
//! assert_eq!(strip_formatting(display.as_str())?, "4010232137");
//! # Ok::<(), NumberError>(())
//! ```

mod checksum;
mod error;
mod number;
mod validate;

pub use checksum::{check_digit, WEIGHTS};
pub use error::NumberError;
pub use number::NhsNumber;
pub use validate::{
    format, is_formatted, strip_formatting, validate, CANONICAL_LEN, FORMATTED_LEN,
};
