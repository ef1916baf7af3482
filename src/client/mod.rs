//! HTTP client for the ViaCEP postal code lookup service.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. Each lookup is a single unauthenticated
//! `GET /ws/{cep}/json/`; there is no retry and no caching.

mod async_wrapper;
pub use async_wrapper::{AsyncCepClient, AsyncCepClientImpl};

use crate::config::Config;
use crate::domain::Cep;
use crate::error::{CepApiError, CepApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{Address, ViaCepResponse};
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the postal code lookup service.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct CepClient {
    /// Base URL of the lookup service
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl CepClient {
    /// Create a new CepClient from configuration.
    pub fn new(config: &Config) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(secs) = config.request_timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Self {
            base_url: config.cep_api_url.clone(),
            agent: Arc::new(builder.build()),
            metrics: Metrics::new(),
        }
    }

    /// Create a CepClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            agent: Arc::new(ureq::AgentBuilder::new().build()),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build the lookup URL for a CEP.
    fn build_url(&self, cep: &Cep) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}/ws/{}/json/", base, cep.as_str())
    }

    /// Execute a GET request.
    fn get(&self, url: &str) -> CepApiResult<ureq::Response> {
        let timer = HttpTimer::new(self.metrics.clone());

        tracing::debug!("GET {}", url);

        let result = self
            .agent
            .get(url)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(response) => {
                tracing::debug!("GET {} - Success (status: {})", url, response.status());
                timer.complete();
            }
            Err(e) => {
                tracing::debug!("GET {} - Error: {:?}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Map a ureq error to a CepApiError.
    fn map_error(&self, error: ureq::Error) -> CepApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                CepApiError::ApiError {
                    status: code,
                    message,
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    CepApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    CepApiError::Timeout
                } else {
                    CepApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Resolve a CEP to an address.
    ///
    /// Returns `Ok(None)` when the service reports the code as unassigned and
    /// an error for transport failures, error statuses and malformed bodies.
    pub fn lookup(&self, cep: &Cep) -> CepApiResult<Option<Address>> {
        let url = self.build_url(cep);
        let response = self.get(&url)?;
        let body = response
            .into_string()
            .map_err(|e| CepApiError::HttpError(e.to_string()))?;

        let payload: ViaCepResponse = serde_json::from_str(&body)?;

        let address = payload.into_address();
        if address.is_some() {
            self.metrics.record_address_found();
        } else {
            tracing::debug!("CEP {} not assigned", cep);
            self.metrics.record_address_not_found();
        }

        Ok(address)
    }

    /// Resolve raw user input to an address, collapsing every failure to `None`.
    ///
    /// Input that does not contain exactly 8 digits never reaches the network.
    pub fn fetch_address_by_cep(&self, input: &str) -> Option<Address> {
        let cep = Cep::new(input).ok()?;

        match self.lookup(&cep) {
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

    #[test]
    fn test_build_url() {
        let client = CepClient::with_base_url("https://viacep.com.br".to_string());
        let cep = Cep::new("01310-100").unwrap();

        assert_eq!(
            client.build_url(&cep),
            "https://viacep.com.br/ws/01310100/json/"
        );

        let client_with_slash = CepClient::with_base_url("https://viacep.com.br/".to_string());
        assert_eq!(
            client_with_slash.build_url(&cep),
            "https://viacep.com.br/ws/01310100/json/"
        );
    }

    #[test]
    fn test_client_creation() {
        let config = Config {
            cep_api_url: "https://viacep.com.br".to_string(),
            request_timeout: Some(5),
            log_level: "error".to_string(),
        };

        let client = CepClient::new(&config);
        assert_eq!(client.base_url, "https://viacep.com.br");
        assert_eq!(client.metrics().http_requests_total(), 0);
    }

    #[test]
    fn test_invalid_input_skips_network() {
        // Unroutable base URL: any request would fail and be counted
        let client = CepClient::with_base_url("http://127.0.0.1:9".to_string());

        assert!(client.fetch_address_by_cep("1234").is_none());
        assert!(client.fetch_address_by_cep("").is_none());
        assert!(client.fetch_address_by_cep("013101000").is_none());
        assert_eq!(client.metrics().http_requests_total(), 0);
    }
}
