//! Async wrapper around synchronous CepClient.
//!
//! This module provides an async interface to the synchronous CepClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::CepClient;
use crate::domain::Cep;
use crate::error::{CepApiError, CepApiResult};
use crate::models::Address;
use async_trait::async_trait;
use std::sync::Arc;

/// Async wrapper trait for lookup client operations.
#[async_trait]
pub trait AsyncCepClient: Send + Sync {
    async fn lookup(&self, cep: &Cep) -> CepApiResult<Option<Address>>;
}

/// Async wrapper around synchronous CepClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool.
#[derive(Clone)]
pub struct AsyncCepClientImpl {
    client: Arc<CepClient>,
}

impl AsyncCepClientImpl {
    pub fn new(client: CepClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The wrapped blocking client.
    pub fn inner(&self) -> &CepClient {
        &self.client
    }
}

#[async_trait]
impl AsyncCepClient for AsyncCepClientImpl {
    async fn lookup(&self, cep: &Cep) -> CepApiResult<Option<Address>> {
        let client = self.client.clone();
        let cep = cep.clone();

        tokio::task::spawn_blocking(move || client.lookup(&cep))
            .await
            .map_err(|e| CepApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
