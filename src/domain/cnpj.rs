//! CNPJ (company taxpayer number) validation.

use super::digits::{all_same, apply_mask, strip_non_digits, to_values};
use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits in a CNPJ.
pub const CNPJ_LENGTH: usize = 14;

/// Display mask for a CNPJ.
pub const CNPJ_MASK: &str = "00.000.000/0000-00";

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// A CNPJ whose check digits have been verified.
///
/// # Example
///
/// ```
/// use arena_validators::domain::Cnpj;
///
/// let cnpj = Cnpj::new("11222333000181").unwrap();
/// assert_eq!(cnpj.to_string(), "11.222.333/0001-81");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cnpj(String);

impl Cnpj {
    /// Parse and verify a CNPJ, ignoring any punctuation.
    ///
    /// # Errors
    ///
    /// `WrongLength`, `AllDigitsIdentical` or `ChecksumFailed`.
    pub fn new(input: &str) -> Result<Self, ValidationError> {
        let digits = strip_non_digits(input);

        if digits.len() != CNPJ_LENGTH {
            return Err(ValidationError::WrongLength {
                expected: "14",
                actual: digits.len(),
            });
        }

        if all_same(&digits) {
            return Err(ValidationError::AllDigitsIdentical);
        }

        let values = to_values(&digits);
        if check_digit(&values[..12], &FIRST_WEIGHTS) != values[12]
            || check_digit(&values[..13], &SECOND_WEIGHTS) != values[13]
        {
            return Err(ValidationError::ChecksumFailed);
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

    /// The 8-digit root identifying the company.
    pub fn root(&self) -> &str {
        &self.0[..8]
    }

    /// The 4-digit establishment number (`0001` is the head office).
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }
}

fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();

    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// Verify a CNPJ, returning the reason on failure.
pub fn check_cnpj(input: &str) -> Result<Cnpj, ValidationError> {
    Cnpj::new(input)
}

/// True if `input` holds a CNPJ with valid check digits.
pub fn validate_cnpj(input: &str) -> bool {
    check_cnpj(input).is_ok()
}

/// Render digits with the (possibly partial) CNPJ mask.
pub(crate) fn mask_cnpj(digits: &str) -> String {
    apply_mask(digits, CNPJ_MASK)
}

impl Serialize for Cnpj {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cnpj {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cnpj::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", mask_cnpj(&self.0))
    }
}
