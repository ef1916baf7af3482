//! Digit extraction and input masks shared by every formatter.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_DIGIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]").expect("Failed to compile non-digit regex"));

/// Remove every character that is not an ASCII decimal digit.
///
/// ```
/// use arena_validators::domain::digits::strip_non_digits;
///
/// assert_eq!(strip_non_digits("529.982.247-25"), "52998224725");
/// ```
pub fn strip_non_digits(input: &str) -> String {
    NON_DIGIT_REGEX.replace_all(input, "").into_owned()
}

/// Apply a mask to a digit-only string.
///
/// In `pattern`, every `0` is a slot for one digit and any other character is
/// a literal. A literal is written only when at least one digit is still left
/// to place after it, so partial input never ends in dangling punctuation.
/// Digits that do not fit the pattern are dropped.
pub fn apply_mask(digits: &str, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut remaining = digits.chars().peekable();

    for slot in pattern.chars() {
        if remaining.peek().is_none() {
            break;
        }

        if slot == '0' {
            if let Some(digit) = remaining.next() {
                out.push(digit);
            }
        } else {
            out.push(slot);
        }
    }

    out
}

/// True when the string is non-empty and every character is the same.
pub(crate) fn all_same(digits: &str) -> bool {
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

/// Convert a digit-only string into numeric values.
pub(crate) fn to_values(digits: &str) -> Vec<u32> {
    digits.chars().filter_map(|c| c.to_digit(10)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_non_digits() {
        assert_eq!(strip_non_digits("(11) 98765-4321"), "11987654321");
        assert_eq!(strip_non_digits("11.222.333/0001-81"), "11222333000181");
        assert_eq!(strip_non_digits(""), "");
        assert_eq!(strip_non_digits("no digits here"), "");
    }

    #[test]
    fn test_strip_ignores_non_ascii_digits() {
        // Arabic-Indic and fullwidth digits are not decimal ASCII digits
        assert_eq!(strip_non_digits("١٢٣"), "");
        assert_eq!(strip_non_digits("１２3"), "3");
    }

    #[test]
    fn test_apply_mask_complete() {
        assert_eq!(apply_mask("01310100", "00000-000"), "01310-100");
    }

    #[test]
    fn test_apply_mask_partial() {
        assert_eq!(apply_mask("", "00000-000"), "");
        assert_eq!(apply_mask("01310", "00000-000"), "01310");
        assert_eq!(apply_mask("013101", "00000-000"), "01310-1");
    }

    #[test]
    fn test_apply_mask_leading_literal() {
        assert_eq!(apply_mask("1", "(00) 0000-0000"), "(1");
        assert_eq!(apply_mask("11", "(00) 0000-0000"), "(11");
        assert_eq!(apply_mask("113", "(00) 0000-0000"), "(11) 3");
    }

    #[test]
    fn test_apply_mask_drops_overflow() {
        assert_eq!(apply_mask("0131010099", "00000-000"), "01310-100");
    }

    #[test]
    fn test_all_same() {
        assert!(all_same("1111"));
        assert!(!all_same("1112"));
        assert!(!all_same(""));
    }

    #[test]
    fn test_to_values() {
        assert_eq!(to_values("0193"), vec![0, 1, 9, 3]);
    }
}
