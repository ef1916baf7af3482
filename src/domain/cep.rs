//! Cep (postal code) value object.

use super::digits::{apply_mask, strip_non_digits};
use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits in a CEP.
pub const CEP_LENGTH: usize = 8;

const CEP_MASK: &str = "00000-000";

/// An 8-digit Brazilian postal code. CEPs carry no check digit.
///
/// # Example
///
/// ```
/// use arena_validators::domain::Cep;
///
/// let cep = Cep::new("01310-100").unwrap();
/// assert_eq!(cep.as_str(), "01310100");
/// assert_eq!(cep.to_string(), "01310-100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cep(String);

impl Cep {
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCep` unless exactly 8 digits remain.
    pub fn new(input: &str) -> Result<Self, ValidationError> {
        let digits = strip_non_digits(input);

        if digits.len() != CEP_LENGTH {
            return Err(ValidationError::InvalidCep(input.to_string()));
        }

        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// True if `input` has exactly 8 digits after stripping punctuation.
pub fn validate_cep(input: &str) -> bool {
    Cep::new(input).is_ok()
}

/// Punctuate a CEP as `00000-000`, tolerating partial input.
pub fn format_cep(input: &str) -> String {
    apply_mask(&strip_non_digits(input), CEP_MASK)
}

impl Serialize for Cep {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cep {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cep::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_cep(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cep() {
        assert_eq!(format_cep("01310100"), "01310-100");
        assert_eq!(format_cep("01310-100"), "01310-100");
        assert_eq!(format_cep("0131"), "0131");
        assert_eq!(format_cep("013101"), "01310-1");
        assert_eq!(format_cep(""), "");
    }

    #[test]
    fn test_validate_cep() {
        assert!(validate_cep("01310100"));
        assert!(validate_cep("01310-100"));
        assert!(validate_cep(" 01.310-100 "));
        assert!(!validate_cep("0131010"));
        assert!(!validate_cep("013101000"));
        assert!(!validate_cep(""));
    }

    #[test]
    fn test_cep_keeps_leading_zero() {
        let cep = Cep::new("01001-000").unwrap();
        assert_eq!(cep.as_str(), "01001000");
    }

    #[test]
    fn test_cep_serde() {
        let cep: Cep = serde_json::from_str("\"01310-100\"").unwrap();
        assert_eq!(serde_json::to_string(&cep).unwrap(), "\"01310100\"");
        let invalid: Result<Cep, _> = serde_json::from_str("\"123\"");
        assert!(invalid.is_err());
    }
}
