//! Address data structures.

use serde::{Deserialize, Serialize};

/// A street address resolved from a CEP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Postal code as returned by the lookup service (usually `00000-000`).
    pub postal_code: String,
    pub street: String,
    #[serde(default)]
    pub complement: String,
    pub district: String,
    pub city: String,
    /// Two-letter UF code.
    pub state_code: String,
    pub found: bool,
}

/// Raw JSON body returned by the ViaCEP `/ws/{cep}/json/` endpoint.
///
/// Unassigned codes come back as `{"erro": true}`; newer deployments send
/// the flag as the string `"true"`, so both are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViaCepResponse {
    #[serde(default)]
    pub cep: String,
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub complemento: String,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub localidade: String,
    #[serde(default)]
    pub uf: String,
    #[serde(default)]
    pub erro: Option<serde_json::Value>,
}

impl ViaCepResponse {
    /// True when the service reports the code as unassigned.
    pub fn is_not_found(&self) -> bool {
        match &self.erro {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    /// Convert to an `Address`, or `None` when the code is unassigned.
    pub fn into_address(self) -> Option<Address> {
        if self.is_not_found() {
            return None;
        }

        Some(Address {
            postal_code: self.cep,
            street: self.logradouro,
            complement: self.complemento,
            district: self.bairro,
            city: self.localidade,
            state_code: self.uf,
            found: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viacep_response_deserialization() {
        let json = r#"{
            "cep": "01310-100",
            "logradouro": "Avenida Paulista",
            "complemento": "de 612 a 1510 - lado par",
            "bairro": "Bela Vista",
            "localidade": "São Paulo",
            "uf": "SP",
            "ibge": "3550308",
            "ddd": "11"
        }"#;

        let response: ViaCepResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_not_found());

        let address = response.into_address().unwrap();
        assert_eq!(address.postal_code, "01310-100");
        assert_eq!(address.street, "Avenida Paulista");
        assert_eq!(address.district, "Bela Vista");
        assert_eq!(address.city, "São Paulo");
        assert_eq!(address.state_code, "SP");
        assert!(address.found);
    }

    #[test]
    fn test_not_found_flag_bool() {
        let response: ViaCepResponse = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        assert!(response.is_not_found());
        assert!(response.into_address().is_none());
    }

    #[test]
    fn test_not_found_flag_string() {
        let response: ViaCepResponse = serde_json::from_str(r#"{"erro": "true"}"#).unwrap();
        assert!(response.is_not_found());
    }

    #[test]
    fn test_erro_false_is_found() {
        let response: ViaCepResponse =
            serde_json::from_str(r#"{"cep": "01001-000", "uf": "SP", "erro": false}"#).unwrap();
        assert!(response.into_address().is_some());
    }

    #[test]
    fn test_address_serialization() {
        let address = Address {
            postal_code: "01001-000".to_string(),
            street: "Praça da Sé".to_string(),
            complement: "lado ímpar".to_string(),
            district: "Sé".to_string(),
            city: "São Paulo".to_string(),
            state_code: "SP".to_string(),
            found: true,
        };

        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json["postal_code"], "01001-000");
        assert_eq!(json["state_code"], "SP");
        assert_eq!(json["found"], true);
    }
}
