use arena_validators::domain::Cep;
use arena_validators::error::{CepApiError, CepApiResult};
use arena_validators::models::Address;
use arena_validators::repositories::AddressRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock address repository for testing.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockAddressRepository {
    addresses: Arc<Mutex<HashMap<String, Address>>>,
    failing: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockAddressRepository {
    pub fn new() -> Self {
        Self {
            addresses: Arc::new(Mutex::new(HashMap::new())),
            failing: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Register an address under the given 8-digit code.
    pub fn add_address(&self, cep: &str, address: Address) {
        let mut addresses = self.addresses.lock().unwrap();
        addresses.insert(cep.to_string(), address);
    }

    /// Make every subsequent lookup fail with a transport error.
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn increment_call_count(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl AddressRepository for MockAddressRepository {
    async fn find_by_cep(&self, cep: &Cep) -> CepApiResult<Option<Address>> {
        self.increment_call_count("find_by_cep");

        if *self.failing.lock().unwrap() {
            return Err(CepApiError::HttpError("Connection failed".to_string()));
        }

        let addresses = self.addresses.lock().unwrap();
        Ok(addresses.get(cep.as_str()).cloned())
    }
}
