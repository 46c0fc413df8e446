//! Error types for NHS number validation and formatting.

use thiserror::Error;

/// Errors raised for malformed input.
///
/// A well-formed number that simply fails validation is not an error;
/// the validator reports that as `Ok(false)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumberError {
    /// No identifier was supplied.
    #[error("identifier is required")]
    Missing,

    /// A character that must be a digit is not one.
    #[error("identifiers must contain digits only: found {found:?} at index {index}")]
    NonDigit { index: usize, found: char },

    /// The input has the wrong number of characters for the operation.
    #[error("expected {expected} digits, got {actual}")]
    Length { expected: usize, actual: usize },

    /// The input is well formed but is not a usable NHS number.
    #[error("invalid NHS number: {0}")]
    Invalid(String),
}

impl NumberError {
    /// Returns true if this error indicates the input was absent.
    pub fn is_missing(&self) -> bool {
        matches!(self, NumberError::Missing)
    }

    /// Returns true if this error indicates a non-digit character.
    pub fn is_non_digit(&self) -> bool {
        matches!(self, NumberError::NonDigit { .. })
    }
}
