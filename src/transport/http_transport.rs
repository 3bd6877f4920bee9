//! HTTP transport implementation using reqwest.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

use super::{HttpRequest, HttpResponse};
use crate::errors::{DotykackaError, DotykackaResult};
use crate::observability::{log_request, log_response};

/// HTTP transport trait for the Dotykacka client.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Executes an HTTP request.
    ///
    /// Only transport failures are errors; any status code is returned as a
    /// response.
    async fn execute(&self, request: HttpRequest) -> DotykackaResult<HttpResponse>;
}

/// Configuration for `ReqwestTransport`.
#[derive(Debug, Clone, Default)]
pub struct TransportConfig {
    /// Request timeout. `None` disables it.
    pub timeout: Option<Duration>,
}

/// Reqwest-based HTTP transport implementation.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a new transport with configuration.
    pub fn with_config(config: TransportConfig) -> DotykackaResult<Self> {
        let mut builder = reqwest::Client::builder().pool_max_idle_per_host(10);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| DotykackaError::Configuration {
            message: format!("Failed to create HTTP client: {}", e),
        })?;

        Ok(Self { client })
    }

    /// Creates a new transport with a custom client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Converts response headers to a HashMap.
    fn extract_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|val| (k.as_str().to_string(), val.to_string()))
            })
            .collect()
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> DotykackaResult<HttpResponse> {
        log_request(&request.method.to_string(), &request.url);
        let started = std::time::Instant::now();

        let mut builder = self.client.request(request.method.into(), &request.url);

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = Self::extract_headers(response.headers());
        let body = response.bytes().await?;

        log_response(status, started.elapsed());

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Method;

    #[test]
    fn test_method_conversion() {
        assert_eq!(reqwest::Method::from(Method::Get), reqwest::Method::GET);
        assert_eq!(reqwest::Method::from(Method::Post), reqwest::Method::POST);
    }

    #[test]
    fn test_transport_creation() {
        assert!(ReqwestTransport::with_config(TransportConfig::default()).is_ok());
        assert!(ReqwestTransport::with_config(TransportConfig {
            timeout: Some(Duration::from_secs(30)),
        })
        .is_ok());
    }
}
