//! Configuration module for the Dotykacka client.
//!
//! Holds the session credentials supplied once at construction, the endpoint
//! URLs and the retry policy.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::errors::{DotykackaError, DotykackaResult};
use crate::resilience::RetryPolicy;

/// Default base URL for the Dotykacka API.
pub const DEFAULT_BASE_URL: &str = "https://api.dotykacka.cz";

/// Default endpoint exchanging a refresh token for an access token.
pub const DEFAULT_TOKEN_URL: &str = "https://api.dotykacka.cz/v2/signin/token";

/// Default interactive authorization endpoint.
pub const DEFAULT_CONNECT_URL: &str = "https://admin.dotykacka.cz/client/connect";

/// Credentials identifying one cloud and branch.
#[derive(Clone)]
pub struct SessionCredentials {
    /// Cloud (tenant) identifier.
    pub cloud_id: u64,
    /// Branch identifier, used by order operations.
    pub branch_id: u64,
    pub(crate) refresh_token: SecretString,
    /// OAuth client id, used by the connect URL.
    pub client_id: Option<String>,
    pub(crate) client_secret: Option<SecretString>,
    /// Redirect target for the connect flow.
    pub webhook_url: Option<String>,
}

impl SessionCredentials {
    /// Returns the refresh token.
    pub fn refresh_token(&self) -> &SecretString {
        &self.refresh_token
    }

    /// Returns the client secret (exposing the secret).
    pub(crate) fn client_secret(&self) -> Option<&str> {
        self.client_secret
            .as_ref()
            .map(|s| s.expose_secret().as_str())
    }
}

impl std::fmt::Debug for SessionCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCredentials")
            .field("cloud_id", &self.cloud_id)
            .field("branch_id", &self.branch_id)
            .field("refresh_token", &"[REDACTED]")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("webhook_url", &self.webhook_url)
            .finish()
    }
}

/// Configuration for the Dotykacka client.
#[derive(Clone, Debug)]
pub struct DotykackaConfig {
    /// Session credentials.
    pub credentials: SessionCredentials,
    /// Base URL for API requests.
    pub base_url: String,
    /// Token exchange endpoint.
    pub token_url: String,
    /// Interactive authorization endpoint.
    pub connect_url: String,
    /// Request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Token refresh and retry behavior.
    pub retry: RetryPolicy,
}

impl DotykackaConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> DotykackaConfigBuilder {
        DotykackaConfigBuilder::new()
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `DOTYKACKA_CLOUD_ID` (required)
    /// - `DOTYKACKA_BRANCH_ID` (required)
    /// - `DOTYKACKA_REFRESH_TOKEN` (required)
    /// - `DOTYKACKA_CLIENT_ID`, `DOTYKACKA_CLIENT_SECRET`, `DOTYKACKA_WEBHOOK_URL` (optional)
    /// - `DOTYKACKA_BASE_URL` (optional): Custom base URL
    /// - `DOTYKACKA_TIMEOUT` (optional): Request timeout in seconds
    pub fn from_env() -> DotykackaResult<Self> {
        let mut builder = DotykackaConfigBuilder::new()
            .cloud_id(required_id("DOTYKACKA_CLOUD_ID")?)
            .branch_id(required_id("DOTYKACKA_BRANCH_ID")?)
            .refresh_token(required_var("DOTYKACKA_REFRESH_TOKEN")?);

        if let Ok(client_id) = std::env::var("DOTYKACKA_CLIENT_ID") {
            builder = builder.client_id(client_id);
        }

        if let Ok(client_secret) = std::env::var("DOTYKACKA_CLIENT_SECRET") {
            builder = builder.client_secret(client_secret);
        }

        if let Ok(webhook) = std::env::var("DOTYKACKA_WEBHOOK_URL") {
            builder = builder.webhook_url(webhook);
        }

        if let Ok(base_url) = std::env::var("DOTYKACKA_BASE_URL") {
            builder = builder.base_url(base_url);
        }

        if let Ok(timeout_str) = std::env::var("DOTYKACKA_TIMEOUT") {
            if let Ok(timeout_secs) = timeout_str.parse::<u64>() {
                builder = builder.timeout(Duration::from_secs(timeout_secs));
            }
        }

        builder.build()
    }

    /// Returns the full URL for a path under the API base.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Returns the cloud-scoped path for a resource, e.g. `v2/clouds/1/products`.
    pub fn cloud_path(&self, resource: &str) -> String {
        format!("v2/clouds/{}/{}", self.credentials.cloud_id, resource)
    }

    /// Returns the pos-actions path for the configured branch.
    pub fn pos_actions_path(&self) -> String {
        format!(
            "v2/clouds/{}/branches/{}/pos-actions",
            self.credentials.cloud_id, self.credentials.branch_id
        )
    }
}

fn required_var(name: &str) -> DotykackaResult<String> {
    std::env::var(name).map_err(|_| DotykackaError::Configuration {
        message: format!("{} environment variable not set", name),
    })
}

fn required_id(name: &str) -> DotykackaResult<u64> {
    required_var(name)?
        .parse::<u64>()
        .map_err(|e| DotykackaError::Configuration {
            message: format!("{} is not a valid id: {}", name, e),
        })
}

/// Builder for `DotykackaConfig`.
#[derive(Default)]
pub struct DotykackaConfigBuilder {
    cloud_id: Option<u64>,
    branch_id: Option<u64>,
    refresh_token: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    webhook_url: Option<String>,
    base_url: Option<String>,
    token_url: Option<String>,
    connect_url: Option<String>,
    timeout: Option<Duration>,
    retry: Option<RetryPolicy>,
}

impl DotykackaConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cloud id.
    pub fn cloud_id(mut self, cloud_id: u64) -> Self {
        self.cloud_id = Some(cloud_id);
        self
    }

    /// Sets the branch id.
    pub fn branch_id(mut self, branch_id: u64) -> Self {
        self.branch_id = Some(branch_id);
        self
    }

    /// Sets the refresh token.
    pub fn refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Sets the OAuth client id.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Sets the OAuth client secret.
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Sets the webhook the connect flow redirects to.
    pub fn webhook_url(mut self, webhook_url: impl Into<String>) -> Self {
        self.webhook_url = Some(webhook_url.into());
        self
    }

    /// Sets the base URL.
    ///
    /// Unless set explicitly, the token URL follows the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the token exchange URL.
    pub fn token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = Some(token_url.into());
        self
    }

    /// Sets the interactive authorization URL.
    pub fn connect_url(mut self, connect_url: impl Into<String>) -> Self {
        self.connect_url = Some(connect_url.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the retry policy.
    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> DotykackaResult<DotykackaConfig> {
        let cloud_id = self.cloud_id.ok_or_else(|| DotykackaError::Configuration {
            message: "Cloud id is required".to_string(),
        })?;

        if cloud_id == 0 {
            return Err(DotykackaError::Configuration {
                message: "Cloud id must be a positive integer".to_string(),
            });
        }

        let branch_id = self.branch_id.ok_or_else(|| DotykackaError::Configuration {
            message: "Branch id is required".to_string(),
        })?;

        let refresh_token = self
            .refresh_token
            .ok_or_else(|| DotykackaError::Configuration {
                message: "Refresh token is required".to_string(),
            })?;

        if refresh_token.is_empty() {
            return Err(DotykackaError::Configuration {
                message: "Refresh token cannot be empty".to_string(),
            });
        }

        let base_url = normalize_url(
            self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            "Base URL",
        )?;

        let token_url = match self.token_url {
            Some(url) => normalize_url(url, "Token URL")?,
            None => format!("{}/v2/signin/token", base_url),
        };

        let connect_url = normalize_url(
            self.connect_url
                .unwrap_or_else(|| DEFAULT_CONNECT_URL.to_string()),
            "Connect URL",
        )?;

        Ok(DotykackaConfig {
            credentials: SessionCredentials {
                cloud_id,
                branch_id,
                refresh_token: SecretString::new(refresh_token),
                client_id: self.client_id,
                client_secret: self.client_secret.map(SecretString::new),
                webhook_url: self.webhook_url,
            },
            base_url,
            token_url,
            connect_url,
            timeout: self.timeout,
            retry: self.retry.unwrap_or_default(),
        })
    }
}

fn normalize_url(url: String, what: &str) -> DotykackaResult<String> {
    let url = url.trim_end_matches('/').to_string();

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(DotykackaError::Configuration {
            message: format!("{} must start with http:// or https://", what),
        });
    }

    Ok(url)
}
