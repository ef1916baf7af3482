//! PhoneNumber value object.

use super::digits::{apply_mask, strip_non_digits};
use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const LANDLINE_LENGTH: usize = 10;
const MOBILE_LENGTH: usize = 11;
const LANDLINE_MASK: &str = "(00) 0000-0000";
const MOBILE_MASK: &str = "(00) 00000-0000";

/// Landline (8-digit subscriber) or mobile (9-digit subscriber).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneKind {
    Landline,
    Mobile,
}

/// A Brazilian phone number with area code.
///
/// Only the digit count is checked: 10 digits for a landline, 11 for a
/// mobile. There is no area-code whitelist.
///
/// # Example
///
/// ```
/// use arena_validators::domain::{PhoneKind, PhoneNumber};
///
/// let phone = PhoneNumber::new("(11) 98765-4321").unwrap();
/// assert_eq!(phone.as_str(), "11987654321");
/// assert_eq!(phone.area_code(), "11");
/// assert_eq!(phone.kind(), PhoneKind::Mobile);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from any punctuated input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless 10 or 11 digits remain.
    pub fn new(phone: &str) -> Result<Self, ValidationError> {
        let digits = strip_non_digits(phone);

        if !matches!(digits.len(), LANDLINE_LENGTH | MOBILE_LENGTH) {
            return Err(ValidationError::InvalidPhone(phone.to_string()));
        }

        Ok(Self(digits))
    }

    /// Get the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying digit string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The two-digit DDD.
    pub fn area_code(&self) -> &str {
        &self.0[..2]
    }

    pub fn kind(&self) -> PhoneKind {
        if self.0.len() == MOBILE_LENGTH {
            PhoneKind::Mobile
        } else {
            PhoneKind::Landline
        }
    }
}

/// True if `input` has 10 or 11 digits after stripping punctuation.
pub fn validate_phone(input: &str) -> bool {
    PhoneNumber::new(input).is_ok()
}

/// Punctuate a phone number, tolerating partial input.
///
/// Up to 10 digits use `(00) 0000-0000`, more use `(00) 00000-0000`.
pub fn format_phone(input: &str) -> String {
    let digits = strip_non_digits(input);

    if digits.len() <= LANDLINE_LENGTH {
        apply_mask(&digits, LANDLINE_MASK)
    } else {
        apply_mask(&digits, MOBILE_MASK)
    }
}

// Serde support - serialize as digits
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_phone(&self.0))
    }
}
