use crate::domain::Cep;
use crate::error::CepApiResult;
use crate::models::Address;
use async_trait::async_trait;

/// Repository for resolving postal codes to addresses.
///
/// Provides abstraction over the lookup service, enabling different
/// implementations (HTTP client, mock).
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Resolve a CEP. `Ok(None)` means the code is not assigned.
    async fn find_by_cep(&self, cep: &Cep) -> CepApiResult<Option<Address>>;
}
