//! Authentication module for the Dotykacka client.
//!
//! Exchanges the long-lived refresh token for short-lived access tokens and
//! keeps the latest one in a [`TokenSlot`].

mod slot;

pub use slot::TokenSlot;

use async_trait::async_trait;
use bytes::Bytes;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

use crate::config::DotykackaConfig;
use crate::errors::{DotykackaError, DotykackaResult};
use crate::transport::{HttpRequest, HttpTransport, Method};

/// Short-lived bearer credential scoped to one cloud.
#[derive(Clone)]
pub struct AccessToken {
    value: SecretString,
    cloud_id: u64,
}

impl AccessToken {
    /// Wraps a token string issued for `cloud_id`.
    pub fn new(value: impl Into<String>, cloud_id: u64) -> Self {
        Self {
            value: SecretString::new(value.into()),
            cloud_id,
        }
    }

    /// Returns the token value.
    pub fn secret(&self) -> &SecretString {
        &self.value
    }

    /// Returns the cloud the token was issued for.
    pub fn cloud_id(&self) -> u64 {
        self.cloud_id
    }

    /// Returns the `Authorization` header value for API calls.
    pub(crate) fn bearer_header(&self) -> String {
        format!("Bearer {}", self.value.expose_secret())
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"[REDACTED]")
            .field("cloud_id", &self.cloud_id)
            .finish()
    }
}

/// Source of access tokens.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Exchanges `refresh_token` for an access token scoped to `cloud_id`.
    ///
    /// A single network call; failures are never retried here.
    async fn fetch_access_token(
        &self,
        cloud_id: u64,
        refresh_token: &SecretString,
    ) -> DotykackaResult<AccessToken>;
}

#[derive(Serialize)]
struct TokenRequest {
    #[serde(rename = "_cloudId")]
    cloud_id: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    access_token: String,
}

/// Token provider calling the sign-in endpoint.
pub struct RefreshTokenProvider {
    transport: Arc<dyn HttpTransport>,
    token_url: String,
}

impl RefreshTokenProvider {
    /// Creates a provider posting to `token_url`.
    pub fn new(transport: Arc<dyn HttpTransport>, token_url: impl Into<String>) -> Self {
        Self {
            transport,
            token_url: token_url.into(),
        }
    }

    fn failure(cloud_id: u64, detail: impl std::fmt::Display) -> DotykackaError {
        DotykackaError::Auth {
            message: format!(
                "Error fetching access token for cloud {}. Check your refresh token and cloud id: {}",
                cloud_id, detail
            ),
        }
    }
}

#[async_trait]
impl TokenProvider for RefreshTokenProvider {
    async fn fetch_access_token(
        &self,
        cloud_id: u64,
        refresh_token: &SecretString,
    ) -> DotykackaResult<AccessToken> {
        tracing::debug!(cloud_id, "Fetching access token");

        let body = serde_json::to_vec(&TokenRequest { cloud_id })?;
        let request = HttpRequest::new(Method::Post, self.token_url.as_str())
            .header(
                "Authorization",
                format!("User {}", refresh_token.expose_secret()),
            )
            .header("Accept", "application/json")
            .json_body(Bytes::from(body));

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(cloud_id, error = %e, "Access token request failed");
                return Err(Self::failure(cloud_id, e));
            }
        };

        if !response.is_success() {
            tracing::warn!(cloud_id, status = response.status, "Access token request rejected");
            return Err(Self::failure(
                cloud_id,
                format!(
                    "HTTP {} {}",
                    response.status,
                    String::from_utf8_lossy(&response.body)
                ),
            ));
        }

        let parsed: TokenResponse = serde_json::from_slice(&response.body)
            .map_err(|e| Self::failure(cloud_id, format!("unexpected response body: {}", e)))?;

        Ok(AccessToken::new(parsed.access_token, cloud_id))
    }
}

impl std::fmt::Debug for RefreshTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshTokenProvider")
            .field("token_url", &self.token_url)
            .finish_non_exhaustive()
    }
}

/// Builds the interactive authorization URL an integrator sends a merchant to.
///
/// Requires client id, client secret and webhook URL in the credentials.
pub fn connect_url(config: &DotykackaConfig) -> DotykackaResult<String> {
    let credentials = &config.credentials;
    let missing = |what: &str| DotykackaError::Configuration {
        message: format!("{} is required to build the connect URL", what),
    };

    let client_id = credentials
        .client_id
        .as_deref()
        .ok_or_else(|| missing("Client id"))?;
    let client_secret = credentials
        .client_secret()
        .ok_or_else(|| missing("Client secret"))?;
    let webhook = credentials
        .webhook_url
        .as_deref()
        .ok_or_else(|| missing("Webhook URL"))?;

    let mut url = Url::parse(&config.connect_url)?;
    url.query_pairs_mut()
        .append_pair("client_id", client_id)
        .append_pair("client_secret", client_secret)
        .append_pair("scope", "*")
        .append_pair("redirect_uri", webhook);

    Ok(url.into())
}
