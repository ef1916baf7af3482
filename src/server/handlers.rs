//! MCP tool handlers for the validation server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::domain;
use crate::server::responses;
use crate::services::AddressService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes document, phone and postal code tools.
#[derive(Clone)]
pub struct ValidationMcpServer {
    address_service: Arc<dyn AddressService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ValidationMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "arena-validators".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Validates and formats Brazilian CPF/CNPJ numbers, phone numbers and CEP postal codes, and resolves CEPs to street addresses.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct DocumentParams {
    /// CPF or CNPJ, punctuation allowed
    document: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct PhoneParams {
    /// Phone number with area code, punctuation allowed
    phone: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CepParams {
    /// Postal code, punctuation allowed
    cep: String,
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: serde_json::Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&value).map_err(to_mcp_error)?,
    )]))
}

#[tool_router]
impl ValidationMcpServer {
    /// Create a new validation MCP server.
    pub fn new(address_service: Arc<dyn AddressService>) -> Self {
        Self {
            address_service,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Validate a Brazilian CPF (11 digits) or CNPJ (14 digits) by its check digits. Returns the document kind, the formatted number and, when invalid, the reason."
    )]
    async fn validate_document(
        &self,
        params: Parameters<DocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        json_result(responses::document_report(&params.0.document))
    }

    #[tool(
        description = "Format a CPF as 000.000.000-00 or a CNPJ as 00.000.000/0000-00. Accepts partial input and never validates."
    )]
    async fn format_document(
        &self,
        params: Parameters<DocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        let input = params.0.document;
        let formatted = domain::format_cpf_cnpj(&input);
        json_result(responses::formatted(&input, formatted))
    }

    #[tool(description = "Check that a phone number has 10 (landline) or 11 (mobile) digits")]
    async fn validate_phone(
        &self,
        params: Parameters<PhoneParams>,
    ) -> Result<CallToolResult, McpError> {
        json_result(responses::phone_report(&params.0.phone))
    }

    #[tool(description = "Format a phone number as (00) 0000-0000 or (00) 00000-0000")]
    async fn format_phone(
        &self,
        params: Parameters<PhoneParams>,
    ) -> Result<CallToolResult, McpError> {
        let input = params.0.phone;
        let formatted = domain::format_phone(&input);
        json_result(responses::formatted(&input, formatted))
    }

    #[tool(description = "Check that a CEP postal code has exactly 8 digits")]
    async fn validate_cep(&self, params: Parameters<CepParams>) -> Result<CallToolResult, McpError> {
        json_result(responses::cep_report(&params.0.cep))
    }

    #[tool(description = "Format a CEP postal code as 00000-000")]
    async fn format_cep(&self, params: Parameters<CepParams>) -> Result<CallToolResult, McpError> {
        let input = params.0.cep;
        let formatted = domain::format_cep(&input);
        json_result(responses::formatted(&input, formatted))
    }

    #[tool(
        description = "Resolve a CEP postal code to street, district, city and state. Returns found=false when the code is unknown or the lookup service is unavailable."
    )]
    async fn lookup_address(
        &self,
        params: Parameters<CepParams>,
    ) -> Result<CallToolResult, McpError> {
        let input = params.0.cep;

        tracing::info!("MCP Handler: lookup_address called");
        let address = self.address_service.fetch_address_by_cep(&input).await;
        tracing::debug!("lookup_address found={}", address.is_some());

        json_result(responses::address_report(&input, address))
    }

    #[tool(description = "List the 27 Brazilian federative units as code/name pairs")]
    async fn list_states(&self) -> Result<CallToolResult, McpError> {
        json_result(responses::states_report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Address;
    use async_trait::async_trait;

    struct FixedAddressService;

    #[async_trait]
    impl AddressService for FixedAddressService {
        async fn fetch_address_by_cep(&self, input: &str) -> Option<Address> {
            (input == "01310100").then(|| Address {
                postal_code: "01310-100".to_string(),
                state_code: "SP".to_string(),
                found: true,
                ..Default::default()
            })
        }
    }

    #[test]
    fn test_server_info() {
        let server = ValidationMcpServer::new(Arc::new(FixedAddressService));
        let info = server.get_info();
        assert_eq!(info.server_info.name, "arena-validators");
        assert!(info.capabilities.tools.is_some());
    }

    #[tokio::test]
    async fn test_lookup_address_tool() {
        let server = ValidationMcpServer::new(Arc::new(FixedAddressService));

        let found = server
            .lookup_address(Parameters(CepParams {
                cep: "01310100".to_string(),
            }))
            .await
            .unwrap();
        assert_ne!(found.is_error, Some(true));

        let missing = server
            .lookup_address(Parameters(CepParams {
                cep: "99999999".to_string(),
            }))
            .await
            .unwrap();
        assert_ne!(missing.is_error, Some(true));
    }
}
