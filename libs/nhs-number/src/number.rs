//! A validated NHS number.

use std::fmt;
use std::str::FromStr;

use crate::error::NumberError;
use crate::validate::{self, CANONICAL_LEN};

/// An NHS number that has passed validation.
///
/// Holds the canonical ten digits. `Display` renders the 3-3-4 form, while
/// serde and [`NhsNumber::as_str`] use the canonical form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NhsNumber(String);

impl NhsNumber {
    /// Parses an NHS number in canonical (`4010232137`) or display
    /// (`401 023 2137`) form.
    pub fn parse(s: &str) -> Result<Self, NumberError> {
        let canonical = validate::strip_formatting(s)?;

        if !validate::validate(canonical.as_str())? {
            return Err(NumberError::Invalid(format!(
                "'{}' is not a valid NHS number",
                canonical
            )));
        }

        Ok(Self(canonical))
    }

    /// Returns the canonical ten digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the 3-3-4 display form.
    #[must_use]
    pub fn formatted(&self) -> String {
        format!("{} {} {}", &self.0[..3], &self.0[3..6], &self.0[6..])
    }

    /// Returns the check digit.
    #[must_use]
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[CANONICAL_LEN - 1] - b'0'
    }
}

impl fmt::Display for NhsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for NhsNumber {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for NhsNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<NhsNumber> for String {
    fn from(number: NhsNumber) -> Self {
        number.0
    }
}

impl serde::Serialize for NhsNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NhsNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical() {
        let number = NhsNumber::parse("4010232137").unwrap();
        assert_eq!(number.as_str(), "4010232137");
        assert_eq!(number.check_digit(), 7);
    }

    #[test]
    fn test_parse_formatted() {
        let number: NhsNumber = "943 476 5919".parse().unwrap();
        assert_eq!(number.as_str(), "9434765919");
        assert_eq!(number.check_digit(), 9);
    }

    #[test]
    fn test_display_is_formatted() {
        let number = NhsNumber::parse("4010232137").unwrap();
        assert_eq!(number.to_string(), "401 023 2137");
        assert_eq!(number.formatted(), "401 023 2137");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            NhsNumber::parse("4010232138"),
            Err(NumberError::Invalid(_))
        ));
        assert!(matches!(
            NhsNumber::parse("4444444444"),
            Err(NumberError::Invalid(_))
        ));
        assert!(matches!(
            NhsNumber::parse("401 023 213"),
            Err(NumberError::Invalid(_))
        ));
        assert!(matches!(NhsNumber::parse(""), Err(NumberError::Invalid(_))));
    }

    #[test]
    fn test_parse_non_digit() {
        assert!(NhsNumber::parse("40102321x7").unwrap_err().is_non_digit());
        assert!(NhsNumber::parse("401 023 21x7")
            .unwrap_err()
            .is_non_digit());
    }

    #[test]
    fn test_parse_trailing_space_formatted() {
        // Shape check accepts the trailing space but the stripped digits
        // are one short.
        assert!(matches!(
            NhsNumber::parse("401 023 213 "),
            Err(NumberError::Invalid(_))
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let number = NhsNumber::parse("401 023 2137").unwrap();
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "\"4010232137\"");
        let parsed: NhsNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(number, parsed);
    }

    #[test]
    fn test_json_accepts_formatted() {
        let parsed: NhsNumber = serde_json::from_str("\"401 023 2137\"").unwrap();
        assert_eq!(parsed.as_str(), "4010232137");
    }

    #[test]
    fn test_json_rejects_invalid() {
        assert!(serde_json::from_str::<NhsNumber>("\"4010232138\"").is_err());
        assert!(serde_json::from_str::<NhsNumber>("\"40102321x7\"").is_err());
        assert!(serde_json::from_str::<NhsNumber>("4010232137").is_err());
    }

    #[test]
    fn test_into_string() {
        let number = NhsNumber::parse("4010232137").unwrap();
        let s: String = number.into();
        assert_eq!(s, "4010232137");
    }
}
