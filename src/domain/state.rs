//! The 27 Brazilian federative units.

use serde::Serialize;

/// A federative unit: 26 states plus the Federal District.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BrazilianState {
    /// Two-letter UF code, e.g. `"SP"`.
    pub code: &'static str,
    pub name: &'static str,
}

/// A `{ value, label }` pair for selection lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl From<&BrazilianState> for StateOption {
    fn from(state: &BrazilianState) -> Self {
        Self {
            value: state.code,
            label: state.name,
        }
    }
}

const fn uf(code: &'static str, name: &'static str) -> BrazilianState {
    BrazilianState { code, name }
}

/// All federative units, ordered by code.
pub static BRAZILIAN_STATES: [BrazilianState; 27] = [
    uf("AC", "Acre"),
    uf("AL", "Alagoas"),
    uf("AM", "Amazonas"),
    uf("AP", "Amapá"),
    uf("BA", "Bahia"),
    uf("CE", "Ceará"),
    uf("DF", "Distrito Federal"),
    uf("ES", "Espírito Santo"),
    uf("GO", "Goiás"),
    uf("MA", "Maranhão"),
    uf("MG", "Minas Gerais"),
    uf("MS", "Mato Grosso do Sul"),
    uf("MT", "Mato Grosso"),
    uf("PA", "Pará"),
    uf("PB", "Paraíba"),
    uf("PE", "Pernambuco"),
    uf("PI", "Piauí"),
    uf("PR", "Paraná"),
    uf("RJ", "Rio de Janeiro"),
    uf("RN", "Rio Grande do Norte"),
    uf("RO", "Rondônia"),
    uf("RR", "Roraima"),
    uf("RS", "Rio Grande do Sul"),
    uf("SC", "Santa Catarina"),
    uf("SE", "Sergipe"),
    uf("SP", "São Paulo"),
    uf("TO", "Tocantins"),
];

/// Look up a state by its UF code, ignoring case and surrounding whitespace.
pub fn find_state(code: &str) -> Option<&'static BrazilianState> {
    let code = code.trim();
    BRAZILIAN_STATES
        .iter()
        .find(|state| state.code.eq_ignore_ascii_case(code))
}

/// The state table as `{ value, label }` pairs.
pub fn state_options() -> Vec<StateOption> {
    BRAZILIAN_STATES.iter().map(StateOption::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_27_unique_codes() {
        let codes: HashSet<&str> = BRAZILIAN_STATES.iter().map(|s| s.code).collect();
        assert_eq!(BRAZILIAN_STATES.len(), 27);
        assert_eq!(codes.len(), 27);
    }

    #[test]
    fn test_codes_are_two_uppercase_letters() {
        for state in &BRAZILIAN_STATES {
            assert_eq!(state.code.len(), 2, "{}", state.code);
            assert!(state.code.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_table_sorted_by_code() {
        assert!(BRAZILIAN_STATES
            .windows(2)
            .all(|pair| pair[0].code < pair[1].code));
    }

    #[test]
    fn test_find_state() {
        assert_eq!(find_state("SP").map(|s| s.name), Some("São Paulo"));
        assert_eq!(find_state(" rj ").map(|s| s.name), Some("Rio de Janeiro"));
        assert!(find_state("XX").is_none());
        assert!(find_state("").is_none());
    }

    #[test]
    fn test_state_options_serialization() {
        let options = state_options();
        assert_eq!(options.len(), 27);

        let json = serde_json::to_value(options[0]).unwrap();
        assert_eq!(json, serde_json::json!({"value": "AC", "label": "Acre"}));
    }
}
