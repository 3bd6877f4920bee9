//! Dotykacka API client.

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{self, AccessToken, RefreshTokenProvider, TokenProvider, TokenSlot};
use crate::config::{DotykackaConfig, DotykackaConfigBuilder};
use crate::errors::DotykackaResult;
use crate::observability::ClientMetrics;
use crate::resilience::{RetryPolicy, TokenRefreshExecutor};
use crate::services::{
    CustomersService, DefaultCustomersService, DefaultOrdersService, DefaultProductsService,
    OrdersService, ProductsService, ServiceContext,
};
use crate::transport::{HttpTransport, ReqwestTransport, TransportConfig};

/// The main Dotykacka client.
///
/// Construction starts the first access token fetch. The client is
/// `Send + Sync`; share it by reference or behind an `Arc`.
pub struct DotykackaClient {
    ctx: ServiceContext,
    provider: Arc<dyn TokenProvider>,
    metrics: Arc<ClientMetrics>,
}

impl DotykackaClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: DotykackaConfig) -> DotykackaResult<Self> {
        Self::assemble(config, None, None, None)
    }

    /// Creates a new client builder.
    pub fn builder() -> DotykackaClientBuilder {
        DotykackaClientBuilder::new()
    }

    /// Creates a client from the environment.
    pub fn from_env() -> DotykackaResult<Self> {
        Self::new(DotykackaConfig::from_env()?)
    }

    fn assemble(
        config: DotykackaConfig,
        transport: Option<Arc<dyn HttpTransport>>,
        provider: Option<Arc<dyn TokenProvider>>,
        metrics: Option<Arc<ClientMetrics>>,
    ) -> DotykackaResult<Self> {
        let transport: Arc<dyn HttpTransport> = match transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::with_config(TransportConfig {
                timeout: config.timeout,
            })?),
        };

        let provider: Arc<dyn TokenProvider> = match provider {
            Some(provider) => provider,
            None => Arc::new(RefreshTokenProvider::new(
                transport.clone(),
                config.token_url.clone(),
            )),
        };

        let metrics = metrics.unwrap_or_default();

        let slot = Arc::new(TokenSlot::new(
            provider.clone(),
            config.credentials.cloud_id,
            config.credentials.refresh_token().clone(),
            metrics.clone(),
        ));
        let executor = TokenRefreshExecutor::new(slot, config.retry, metrics.clone());

        tracing::debug!(
            cloud_id = config.credentials.cloud_id,
            branch_id = config.credentials.branch_id,
            base_url = %config.base_url,
            "Dotykacka client created"
        );

        Ok(Self {
            ctx: ServiceContext {
                config: Arc::new(config),
                transport,
                executor,
            },
            provider,
            metrics,
        })
    }

    /// Returns the products service.
    pub fn products(&self) -> impl ProductsService + '_ {
        DefaultProductsService::new(&self.ctx)
    }

    /// Returns the customers service.
    pub fn customers(&self) -> impl CustomersService + '_ {
        DefaultCustomersService::new(&self.ctx)
    }

    /// Returns the orders service.
    pub fn orders(&self) -> impl OrdersService + '_ {
        DefaultOrdersService::new(&self.ctx)
    }

    /// Fetches a fresh access token.
    ///
    /// The token is returned to the caller only; the client keeps using the
    /// token it already holds.
    pub async fn access_token(&self) -> DotykackaResult<AccessToken> {
        let credentials = &self.ctx.config.credentials;
        self.metrics.record_token_fetch();
        self.provider
            .fetch_access_token(credentials.cloud_id, credentials.refresh_token())
            .await
    }

    /// Builds the interactive authorization URL for this client's credentials.
    pub fn connect_url(&self) -> DotykackaResult<String> {
        auth::connect_url(&self.ctx.config)
    }

    /// Returns the client metrics.
    pub fn metrics(&self) -> &ClientMetrics {
        &self.metrics
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &DotykackaConfig {
        &self.ctx.config
    }
}

impl std::fmt::Debug for DotykackaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DotykackaClient")
            .field("config", &self.ctx.config)
            .field("executor", &self.ctx.executor)
            .finish_non_exhaustive()
    }
}

/// Builder for the Dotykacka client.
#[derive(Default)]
pub struct DotykackaClientBuilder {
    config: DotykackaConfigBuilder,
    transport: Option<Arc<dyn HttpTransport>>,
    token_provider: Option<Arc<dyn TokenProvider>>,
    metrics: Option<Arc<ClientMetrics>>,
}

impl DotykackaClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cloud id.
    pub fn cloud_id(mut self, cloud_id: u64) -> Self {
        self.config = self.config.cloud_id(cloud_id);
        self
    }

    /// Sets the branch id.
    pub fn branch_id(mut self, branch_id: u64) -> Self {
        self.config = self.config.branch_id(branch_id);
        self
    }

    /// Sets the refresh token.
    pub fn refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.config = self.config.refresh_token(refresh_token);
        self
    }

    /// Sets the OAuth client id used by the connect URL.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.config = self.config.client_id(client_id);
        self
    }

    /// Sets the OAuth client secret used by the connect URL.
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.config = self.config.client_secret(client_secret);
        self
    }

    /// Sets the connect flow redirect target.
    pub fn webhook_url(mut self, webhook_url: impl Into<String>) -> Self {
        self.config = self.config.webhook_url(webhook_url);
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.base_url(url);
        self
    }

    /// Sets the token endpoint.
    pub fn token_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.token_url(url);
        self
    }

    /// Sets the connect endpoint.
    pub fn connect_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.connect_url(url);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Sets the token refresh and retry policy.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.config = self.config.retry_policy(policy);
        self
    }

    /// Uses a custom HTTP transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Uses a custom token provider.
    pub fn token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
        self.token_provider = Some(provider);
        self
    }

    /// Shares a metrics instance with the client.
    pub fn metrics(mut self, metrics: Arc<ClientMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Builds the client.
    pub fn build(self) -> DotykackaResult<DotykackaClient> {
        let config = self.config.build()?;
        DotykackaClient::assemble(config, self.transport, self.token_provider, self.metrics)
    }
}
