//! Domain value objects and validation rules.
//!
//! Every validator and formatter here is a pure function over `&str`: it
//! strips everything but ASCII digits first, then applies its rule. Nothing
//! in this module performs I/O or panics on malformed input.

pub mod cep;
pub mod cnpj;
pub mod cpf;
pub mod digits;
pub mod document;
pub mod errors;
pub mod phone;
pub mod state;

pub use cep::{format_cep, validate_cep, Cep};
pub use cnpj::{check_cnpj, validate_cnpj, Cnpj};
pub use cpf::{check_cpf, validate_cpf, Cpf};
pub use document::{check_cpf_cnpj, format_cpf_cnpj, validate_cpf_cnpj, Document, DocumentKind};
pub use errors::ValidationError;
pub use phone::{format_phone, validate_phone, PhoneKind, PhoneNumber};
pub use state::{find_state, state_options, BrazilianState, StateOption, BRAZILIAN_STATES};
