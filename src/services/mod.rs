//! Service implementations for the Dotykacka API.
//!
//! Every operation builds one request, runs it through the
//! [`TokenRefreshExecutor`] and maps the response.

pub mod customers;
pub mod orders;
pub mod products;

pub use customers::{CustomersService, DefaultCustomersService};
pub use orders::{DefaultOrdersService, OrdersService};
pub use products::{DefaultProductsService, ProductsService};

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::auth::AccessToken;
use crate::config::DotykackaConfig;
use crate::errors::{DotykackaError, DotykackaResult};
use crate::resilience::TokenRefreshExecutor;
use crate::transport::{HttpRequest, HttpTransport, Method};

/// Largest accepted creation batch is one below this.
pub const MAX_BATCH_SIZE: usize = 100;

/// Shared state behind every service.
pub(crate) struct ServiceContext {
    pub(crate) config: Arc<DotykackaConfig>,
    pub(crate) transport: Arc<dyn HttpTransport>,
    pub(crate) executor: TokenRefreshExecutor,
}

impl ServiceContext {
    /// Absolute URL of a cloud-scoped resource.
    pub(crate) fn cloud_url(&self, resource: &str) -> String {
        self.config.endpoint_url(&self.config.cloud_path(resource))
    }

    /// Absolute URL of the branch's pos-actions endpoint.
    pub(crate) fn pos_actions_url(&self) -> String {
        self.config.endpoint_url(&self.config.pos_actions_path())
    }

    pub(crate) async fn get_json<T>(
        &self,
        token: AccessToken,
        url: &str,
        context: &str,
    ) -> DotykackaResult<T>
    where
        T: DeserializeOwned,
    {
        let request = HttpRequest::new(Method::Get, url);
        self.send(token, request, context).await
    }

    pub(crate) async fn post_json<T>(
        &self,
        token: AccessToken,
        url: &str,
        body: Bytes,
        context: &str,
    ) -> DotykackaResult<T>
    where
        T: DeserializeOwned,
    {
        let request = HttpRequest::new(Method::Post, url).json_body(body);
        self.send(token, request, context).await
    }

    async fn send<T>(
        &self,
        token: AccessToken,
        request: HttpRequest,
        context: &str,
    ) -> DotykackaResult<T>
    where
        T: DeserializeOwned,
    {
        let request = request
            .header("Authorization", token.bearer_header())
            .header("Accept", "application/json");

        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            return Err(DotykackaError::from_response(
                response.status,
                &response.body,
                context,
            ));
        }

        serde_json::from_slice(&response.body)
            .map_err(|e| DotykackaError::deserialization(&e, &response.body))
    }
}

/// Serializes a request body once so both attempts send the same bytes.
pub(crate) fn encode<T>(body: &T) -> DotykackaResult<Bytes>
where
    T: Serialize + ?Sized,
{
    Ok(Bytes::from(serde_json::to_vec(body)?))
}

/// Rejects creation batches that are empty or hold `MAX_BATCH_SIZE` items or more.
pub(crate) fn validate_batch(len: usize, entity: &str) -> DotykackaResult<()> {
    if len == 0 {
        return Err(DotykackaError::validation(format!(
            "At least one {entity} is required"
        )));
    }
    if len >= MAX_BATCH_SIZE {
        return Err(DotykackaError::validation(format!(
            "At most {} {entity}s can be created at once, got {len}",
            MAX_BATCH_SIZE - 1
        )));
    }
    Ok(())
}

/// Turns a read failure into "no data", except HTTP 400 and token failures.
pub(crate) fn collapse_read<T>(
    operation: &str,
    result: DotykackaResult<T>,
) -> DotykackaResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(error) if error.is_bad_request() => Err(error),
        Err(error @ DotykackaError::Auth { .. }) => Err(error),
        Err(error) => {
            tracing::debug!(operation, error = %error, "Read failed, returning no data");
            Ok(None)
        }
    }
}
