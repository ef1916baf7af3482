//! CPF/CNPJ dispatch and the combined document mask.

use super::cnpj::{mask_cnpj, Cnpj, CNPJ_LENGTH};
use super::cpf::{mask_cpf, Cpf, CPF_LENGTH};
use super::digits::strip_non_digits;
use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Which taxpayer registry a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Cpf,
    Cnpj,
}

impl DocumentKind {
    /// Classify by digit count: 11 is a CPF, 14 a CNPJ.
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            CPF_LENGTH => Some(Self::Cpf),
            CNPJ_LENGTH => Some(Self::Cnpj),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpf => write!(f, "CPF"),
            Self::Cnpj => write!(f, "CNPJ"),
        }
    }
}

/// A verified CPF or CNPJ.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Document {
    Cpf(Cpf),
    Cnpj(Cnpj),
}

impl Document {
    /// Parse a document, picking the rule from the stripped digit count.
    pub fn new(input: &str) -> Result<Self, ValidationError> {
        let digits = strip_non_digits(input);

        match DocumentKind::from_len(digits.len()) {
            Some(DocumentKind::Cpf) => Cpf::new(&digits).map(Self::Cpf),
            Some(DocumentKind::Cnpj) => Cnpj::new(&digits).map(Self::Cnpj),
            None => Err(ValidationError::WrongLength {
                expected: "11 or 14",
                actual: digits.len(),
            }),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Cpf(_) => DocumentKind::Cpf,
            Self::Cnpj(_) => DocumentKind::Cnpj,
        }
    }

    /// Get the digits as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.as_str(),
            Self::Cnpj(cnpj) => cnpj.as_str(),
        }
    }
}

/// Verify a CPF or CNPJ, returning the reason on failure.
pub fn check_cpf_cnpj(input: &str) -> Result<Document, ValidationError> {
    Document::new(input)
}

/// True for a valid 11-digit CPF or a valid 14-digit CNPJ.
pub fn validate_cpf_cnpj(input: &str) -> bool {
    check_cpf_cnpj(input).is_ok()
}

/// Punctuate a CPF or CNPJ for display, tolerating partial input.
///
/// Up to 11 digits use `000.000.000-00`, more use `00.000.000/0000-00`.
/// Never validates.
///
/// ```
/// use arena_validators::domain::format_cpf_cnpj;
///
/// assert_eq!(format_cpf_cnpj("52998224725"), "529.982.247-25");
/// assert_eq!(format_cpf_cnpj("11222333000181"), "11.222.333/0001-81");
/// assert_eq!(format_cpf_cnpj("5299"), "529.9");
/// ```
pub fn format_cpf_cnpj(input: &str) -> String {
    let digits = strip_non_digits(input);

    if digits.len() <= CPF_LENGTH {
        mask_cpf(&digits)
    } else {
        mask_cnpj(&digits)
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Document::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpf(cpf) => write!(f, "{}", cpf),
            Self::Cnpj(cnpj) => write!(f, "{}", cnpj),
        }
    }
}
