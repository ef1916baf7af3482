//! Arena Validators MCP Server - Main entry point
//!
//! Exposes the validation library over the Model Context Protocol on stdio.

use anyhow::Result;
use arena_validators::client::{AsyncCepClient, AsyncCepClientImpl};
use arena_validators::repositories::{AddressRepository, ViaCepAddressRepository};
use arena_validators::services::{AddressService, AddressServiceImpl};
use arena_validators::{CepClient, Config, ValidationMcpServer};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting Arena Validators MCP Server with lookup URL: {}",
        config.cep_api_url
    );

    let sync_client = CepClient::new(&config);
    let client = Arc::new(AsyncCepClientImpl::new(sync_client)) as Arc<dyn AsyncCepClient>;

    let address_repo =
        Arc::new(ViaCepAddressRepository::new(client)) as Arc<dyn AddressRepository>;
    let address_service =
        Arc::new(AddressServiceImpl::new(address_repo)) as Arc<dyn AddressService>;

    let server = ValidationMcpServer::new(address_service);

    info!("Starting MCP server with stdio transport");
    arena_validators::server::run_server(server).await?;

    info!("Arena Validators MCP Server shutdown complete");
    Ok(())
}
