//! Domain validation errors.

use thiserror::Error;

/// Reasons a value can be rejected by the domain validators.
///
/// The boolean validators collapse all of these to `false`; the `check_*`
/// functions and value object constructors surface them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Wrong number of digits after stripping punctuation.
    #[error("Expected {expected} digits, got {actual}")]
    WrongLength { expected: &'static str, actual: usize },

    /// Every digit is the same (e.g. "000.000.000-00").
    #[error("All digits are identical")]
    AllDigitsIdentical,

    /// The embedded check digits do not match.
    #[error("Check digits do not match")]
    ChecksumFailed,

    /// The provided phone number is invalid.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// The provided postal code is invalid.
    #[error("Invalid CEP: {0}")]
    InvalidCep(String),
}

impl ValidationError {
    /// Short machine-readable tag, used in JSON tool responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::WrongLength { .. } => "wrong_length",
            Self::AllDigitsIdentical => "all_digits_identical",
            Self::ChecksumFailed => "checksum_failed",
            Self::InvalidPhone(_) => "invalid_phone",
            Self::InvalidCep(_) => "invalid_cep",
        }
    }
}
