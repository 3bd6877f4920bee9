//! Products service.

use async_trait::async_trait;
use tracing::instrument;

use super::{collapse_read, encode, validate_batch, ServiceContext};
use crate::errors::DotykackaResult;
use crate::types::{ListResponse, Product, ProductInput};

const FETCH_CONTEXT: &str = "Error fetching products";
const CREATE_CONTEXT: &str = "Error creating products";

/// Products service trait.
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Lists the products of the cloud.
    ///
    /// Returns `Ok(None)` when the read fails for any reason other than an
    /// HTTP 400 answer or a token failure.
    async fn list(&self) -> DotykackaResult<Option<ListResponse<Product>>>;

    /// Retrieves one product. Same failure rules as [`ProductsService::list`].
    async fn get(&self, product_id: u64) -> DotykackaResult<Option<Product>>;

    /// Creates between 1 and 99 products in one request.
    async fn create(&self, products: Vec<ProductInput>) -> DotykackaResult<Vec<Product>>;
}

/// Default implementation of the products service.
pub struct DefaultProductsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DefaultProductsService<'a> {
    pub(crate) fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl ProductsService for DefaultProductsService<'_> {
    #[instrument(skip(self))]
    async fn list(&self) -> DotykackaResult<Option<ListResponse<Product>>> {
        let url = self.ctx.cloud_url("products");

        let result = self
            .ctx
            .executor
            .execute("products.list", |token| {
                self.ctx.get_json(token, &url, FETCH_CONTEXT)
            })
            .await;

        collapse_read("products.list", result)
    }

    #[instrument(skip(self))]
    async fn get(&self, product_id: u64) -> DotykackaResult<Option<Product>> {
        let url = self.ctx.cloud_url(&format!("products/{product_id}"));

        let result = self
            .ctx
            .executor
            .execute("products.get", |token| {
                self.ctx.get_json(token, &url, FETCH_CONTEXT)
            })
            .await;

        collapse_read("products.get", result)
    }

    #[instrument(skip(self, products), fields(count = products.len()))]
    async fn create(&self, products: Vec<ProductInput>) -> DotykackaResult<Vec<Product>> {
        validate_batch(products.len(), "product")?;

        let url = self.ctx.cloud_url("products");
        let body = encode(&products)?;

        self.ctx
            .executor
            .execute("products.create", |token| {
                self.ctx.post_json(token, &url, body.clone(), CREATE_CONTEXT)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::DotykackaClient;
    use crate::errors::DotykackaError;
    use crate::mocks::{MockResponse, MockTokenProvider, MockTransport};
    use crate::types::NewProduct;
    use serde_json::json;
    use std::sync::Arc;

    const PRODUCTS: &str = "/v2/clouds/1/products";

    fn client(transport: &Arc<MockTransport>, tokens: &[&str]) -> DotykackaClient {
        DotykackaClient::builder()
            .cloud_id(1)
            .branch_id(2)
            .refresh_token("refresh")
            .base_url("https://api.test")
            .transport(transport.clone())
            .token_provider(Arc::new(
                MockTokenProvider::new().with_tokens(tokens.iter().copied()),
            ))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_products() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue(
            PRODUCTS,
            MockResponse::json(&json!({
                "currentPage": "1",
                "data": [{ "id": 1, "name": "Espresso" }]
            })),
        );
        let client = client(&transport, &["t1"]);

        let list = client.products().list().await.unwrap().unwrap();

        assert_eq!(list.data.len(), 1);
        assert_eq!(list.data[0].name, "Espresso");
        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "https://api.test/v2/clouds/1/products");
        assert_eq!(request.headers.get("Authorization").unwrap(), "Bearer t1");
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_none() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue("/v2/clouds/1/products/9", MockResponse::status(404, ""));
        transport.enqueue("/v2/clouds/1/products/9", MockResponse::status(404, ""));
        let client = client(&transport, &["t1", "t2"]);

        assert!(client.products().get(9).await.unwrap().is_none());
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_get_bad_request_surfaces_body() {
        let transport = Arc::new(MockTransport::new());
        for _ in 0..2 {
            transport.enqueue(
                "/v2/clouds/1/products/9",
                MockResponse::status(400, r#"{"error":"invalid id"}"#),
            );
        }
        let client = client(&transport, &["t1", "t2"]);

        let err = client.products().get(9).await.unwrap_err();

        assert!(err.is_bad_request());
        assert!(err.to_string().contains(r#"{"error":"invalid id"}"#));
    }

    #[tokio::test]
    async fn test_create_products() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue(
            PRODUCTS,
            MockResponse::json(&json!([{ "id": 10, "name": "Coffee" }])),
        );
        let client = client(&transport, &["t1"]);

        let created = client
            .products()
            .create(vec![NewProduct::new("Coffee", 7, 50.0, 21.0).into()])
            .await
            .unwrap();

        assert_eq!(created.len(), 1);
        assert_eq!(created[0].name, "Coffee");
        let body = transport.last_request().unwrap().json_body().unwrap();
        assert_eq!(body[0]["name"], "Coffee");
        assert_eq!(body[0]["priceWithoutVat"], 50.0);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_batch_without_request() {
        let transport = Arc::new(MockTransport::new());
        let client = client(&transport, &["t1"]);

        let err = client.products().create(vec![]).await.unwrap_err();

        assert!(matches!(err, DotykackaError::Validation { .. }));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_create_retries_with_same_body() {
        let transport = Arc::new(MockTransport::new());
        transport.enqueue(PRODUCTS, MockResponse::status(401, ""));
        transport.enqueue(PRODUCTS, MockResponse::json(&json!([{ "name": "Coffee" }])));
        let client = client(&transport, &["t1", "t2"]);

        client
            .products()
            .create(vec![NewProduct::new("Coffee", 7, 50.0, 21.0).into()])
            .await
            .unwrap();

        let requests = transport.requests_to(PRODUCTS);
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].body, requests[1].body);
        assert_eq!(requests[1].headers.get("Authorization").unwrap(), "Bearer t2");
    }
}
