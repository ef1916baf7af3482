//! Address service layer.
//!
//! Owns the soft-fail contract of postal code lookups: callers get an
//! address or `None`, never an error.

use crate::domain::Cep;
use crate::models::Address;
use crate::repositories::AddressRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Address service trait for business operations.
#[async_trait]
pub trait AddressService: Send + Sync {
    /// Resolve raw user input to an address.
    ///
    /// Returns `None` without touching the repository unless the input holds
    /// exactly 8 digits. Not-found codes and lookup failures both yield `None`.
    async fn fetch_address_by_cep(&self, input: &str) -> Option<Address>;
}

/// Default implementation of AddressService.
pub struct AddressServiceImpl {
    repository: Arc<dyn AddressRepository>,
}

impl AddressServiceImpl {
    /// Create a new address service.
    pub fn new(repository: Arc<dyn AddressRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AddressService for AddressServiceImpl {
    async fn fetch_address_by_cep(&self, input: &str) -> Option<Address> {
        let cep = match Cep::new(input) {
            Ok(cep) => cep,
            Err(e) => {
                tracing::debug!("Skipping lookup: {}", e);
                return None;
            }
        };

        match self.repository.find_by_cep(&cep).await {
            Ok(address) => address,
            Err(e) => {
                tracing::warn!("CEP lookup for {} failed: {}", cep, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{AsyncCepClient, AsyncCepClientImpl, CepClient};
    use crate::repositories::ViaCepAddressRepository;

    #[tokio::test]
    async fn test_invalid_input_never_reaches_client() {
        let sync_client = CepClient::with_base_url("http://127.0.0.1:9".to_string());
        let metrics = sync_client.metrics().clone();
        let client = Arc::new(AsyncCepClientImpl::new(sync_client)) as Arc<dyn AsyncCepClient>;
        let repository =
            Arc::new(ViaCepAddressRepository::new(client)) as Arc<dyn AddressRepository>;

        let service = AddressServiceImpl::new(repository);

        assert!(service.fetch_address_by_cep("0131-01").await.is_none());
        assert!(service.fetch_address_by_cep("abc").await.is_none());
        assert_eq!(metrics.http_requests_total(), 0);
    }
}
