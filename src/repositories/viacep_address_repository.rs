use crate::client::AsyncCepClient;
use crate::domain::Cep;
use crate::error::CepApiResult;
use crate::models::Address;
use crate::repositories::traits::AddressRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Address repository implementation using the ViaCEP client.
///
/// This repository delegates all operations to the AsyncCepClient,
/// providing a clean abstraction layer between business logic and
/// the underlying HTTP client.
pub struct ViaCepAddressRepository {
    client: Arc<dyn AsyncCepClient>,
}

impl ViaCepAddressRepository {
    /// Create a new ViaCepAddressRepository with the given client.
    pub fn new(client: Arc<dyn AsyncCepClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AddressRepository for ViaCepAddressRepository {
    async fn find_by_cep(&self, cep: &Cep) -> CepApiResult<Option<Address>> {
        self.client.lookup(cep).await
    }
}
