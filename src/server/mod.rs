//! MCP server implementation for the validation library.
//!
//! This module provides the MCP protocol server that exposes the validators,
//! formatters and the address lookup to AI assistants.

pub mod handlers;
pub mod responses;

pub use handlers::ValidationMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the validation MCP server with stdio transport.
///
/// This function starts the MCP server and runs it until completion.
/// It communicates via stdin/stdout using the MCP protocol.
pub async fn run_server(server: ValidationMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
