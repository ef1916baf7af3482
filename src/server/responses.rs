//! JSON payloads returned by the MCP tools.

use crate::domain::{
    self, check_cpf_cnpj, format_cep, format_cpf_cnpj, format_phone, Cep, DocumentKind,
    PhoneNumber, ValidationError,
};
use crate::models::Address;
use serde_json::{json, Value};

fn rejection(err: &ValidationError) -> Value {
    json!({
        "code": err.code(),
        "message": err.to_string(),
    })
}

/// Validation result for a CPF or CNPJ.
pub fn document_report(input: &str) -> Value {
    let digits = domain::digits::strip_non_digits(input);
    let kind = DocumentKind::from_len(digits.len());

    match check_cpf_cnpj(input) {
        Ok(document) => json!({
            "valid": true,
            "kind": document.kind(),
            "formatted": document.to_string(),
            "digits": document.as_str(),
        }),
        Err(err) => json!({
            "valid": false,
            "kind": kind,
            "formatted": format_cpf_cnpj(&digits),
            "digits": digits,
            "reason": rejection(&err),
        }),
    }
}

/// Validation result for a phone number.
pub fn phone_report(input: &str) -> Value {
    match PhoneNumber::new(input) {
        Ok(phone) => json!({
            "valid": true,
            "kind": phone.kind(),
            "area_code": phone.area_code(),
            "formatted": phone.to_string(),
            "digits": phone.as_str(),
        }),
        Err(err) => json!({
            "valid": false,
            "formatted": format_phone(input),
            "reason": rejection(&err),
        }),
    }
}

/// Validation result for a CEP.
pub fn cep_report(input: &str) -> Value {
    match Cep::new(input) {
        Ok(cep) => json!({
            "valid": true,
            "formatted": cep.to_string(),
            "digits": cep.as_str(),
        }),
        Err(err) => json!({
            "valid": false,
            "formatted": format_cep(input),
            "reason": rejection(&err),
        }),
    }
}

/// Formatting-only result, for live input masks.
pub fn formatted(input: &str, formatted: String) -> Value {
    json!({
        "input": input,
        "formatted": formatted,
    })
}

/// Lookup result; a missing address renders as `{"found": false}`.
pub fn address_report(input: &str, address: Option<Address>) -> Value {
    match address {
        Some(address) => json!(address),
        None => json!({
            "found": false,
            "postal_code": format_cep(input),
        }),
    }
}

/// The state table as `{ value, label }` pairs.
pub fn states_report() -> Value {
    json!({
        "count": domain::BRAZILIAN_STATES.len(),
        "states": domain::state_options(),
    })
}
