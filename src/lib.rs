//! Arena Validators - Brazilian document and contact validation.
//!
//! Validates CPF and CNPJ taxpayer numbers by their modulo-11 check digits,
//! validates and formats phone numbers and CEP postal codes, and resolves a
//! CEP to a street address through the ViaCEP service. The same operations
//! are exposed to AI assistants by an MCP server binary.
//!
//! # Architecture
//!
//! - **domain**: Pure validators, formatters, value objects and the state table
//! - **models**: Address record and the lookup service payload
//! - **error**: Error types for the lookup client and configuration
//! - **config**: Configuration management from environment variables
//! - **client**: Blocking HTTP client for the lookup service, plus async wrapper
//! - **repositories**: Address lookup abstraction
//! - **services**: Soft-fail address lookup
//! - **metrics**: Lookup counters
//! - **server**: MCP protocol server

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use client::CepClient;
pub use config::Config;
pub use domain::{
    check_cnpj, check_cpf, check_cpf_cnpj, find_state, format_cep, format_cpf_cnpj,
    format_phone, state_options, validate_cep, validate_cnpj, validate_cpf, validate_cpf_cnpj,
    validate_phone, BrazilianState, Cep, Cnpj, Cpf, Document, DocumentKind, PhoneKind,
    PhoneNumber, StateOption, ValidationError, BRAZILIAN_STATES,
};
pub use error::{CepApiError, ConfigError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::Address;
pub use server::ValidationMcpServer;
pub use services::{AddressService, AddressServiceImpl};
