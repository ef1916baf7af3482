//! CPF (individual taxpayer number) validation.

use super::digits::{all_same, apply_mask, strip_non_digits, to_values};
use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits in a CPF.
pub const CPF_LENGTH: usize = 11;

/// Display mask for a CPF.
pub const CPF_MASK: &str = "000.000.000-00";

/// A CPF whose check digits have been verified.
///
/// Stores the 11 digits without punctuation; `Display` renders the
/// `000.000.000-00` form.
///
/// # Example
///
/// ```
/// use arena_validators::domain::Cpf;
///
/// let cpf = Cpf::new("529.982.247-25").unwrap();
/// assert_eq!(cpf.as_str(), "52998224725");
/// assert_eq!(cpf.to_string(), "529.982.247-25");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    /// Parse and verify a CPF, ignoring any punctuation.
    ///
    /// # Errors
    ///
    /// - `WrongLength` unless exactly 11 digits remain after stripping
    /// - `AllDigitsIdentical` for sequences like `111.111.111-11`
    /// - `ChecksumFailed` when either check digit is wrong
    pub fn new(input: &str) -> Result<Self, ValidationError> {
        let digits = strip_non_digits(input);

        if digits.len() != CPF_LENGTH {
            return Err(ValidationError::WrongLength {
                expected: "11",
                actual: digits.len(),
            });
        }

        if all_same(&digits) {
            return Err(ValidationError::AllDigitsIdentical);
        }

        let values = to_values(&digits);
        if check_digit(&values[..9]) != values[9] || check_digit(&values[..10]) != values[10] {
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
}

/// Compute the CPF check digit for a prefix of 9 or 10 digits.
///
/// Weights run from `prefix.len() + 1` down to 2. A remainder of 10 maps to 0.
fn check_digit(prefix: &[u32]) -> u32 {
    let top = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, d)| d * (top - i as u32))
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        r => r,
    }
}

/// Verify a CPF, returning the reason on failure.
pub fn check_cpf(input: &str) -> Result<Cpf, ValidationError> {
    Cpf::new(input)
}

/// True if `input` holds a CPF with valid check digits.
pub fn validate_cpf(input: &str) -> bool {
    check_cpf(input).is_ok()
}

/// Render digits with the (possibly partial) CPF mask.
pub(crate) fn mask_cpf(digits: &str) -> String {
    apply_mask(digits, CPF_MASK)
}

impl Serialize for Cpf {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cpf {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cpf::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", mask_cpf(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_cpfs() {
        assert!(validate_cpf("52998224725"));
        assert!(validate_cpf("11144477735"));
        assert!(validate_cpf("12345678909"));
        assert!(validate_cpf("390.533.447-05"));
    }

    #[test]
    fn test_wrong_check_digit() {
        assert!(!validate_cpf("52998224726"));
        assert_eq!(
            check_cpf("52998224715"),
            Err(ValidationError::ChecksumFailed)
        );
    }

    #[test]
    fn test_identical_digits_rejected() {
        // 111.111.111-11 satisfies the arithmetic but is not a real CPF
        assert_eq!(
            check_cpf("11111111111"),
            Err(ValidationError::AllDigitsIdentical)
        );
        assert!(!validate_cpf("000.000.000-00"));
    }

    #[test]
    fn test_wrong_length() {
        assert!(!validate_cpf(""));
        assert!(!validate_cpf("5299822472"));
        assert!(!validate_cpf("529982247250"));
        assert_eq!(
            check_cpf("123"),
            Err(ValidationError::WrongLength {
                expected: "11",
                actual: 3
            })
        );
    }

    #[test]
    fn test_check_digit_remainder_ten_maps_to_zero() {
        // 390.533.447-05: the first check digit comes from a remainder of 10
        let values = to_values("390533447");
        assert_eq!(check_digit(&values), 0);
    }

    #[test]
    fn test_cpf_display() {
        let cpf = Cpf::new("52998224725").unwrap();
        assert_eq!(format!("{}", cpf), "529.982.247-25");
    }

    #[test]
    fn test_cpf_serde() {
        let cpf = Cpf::new("529.982.247-25").unwrap();
        assert_eq!(serde_json::to_string(&cpf).unwrap(), "\"52998224725\"");

        let parsed: Cpf = serde_json::from_str("\"529.982.247-25\"").unwrap();
        assert_eq!(parsed, cpf);

        let invalid: Result<Cpf, _> = serde_json::from_str("\"11111111111\"");
        assert!(invalid.is_err());
    }
}
