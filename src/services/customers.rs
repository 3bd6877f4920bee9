//! Customers service.

use async_trait::async_trait;
use tracing::instrument;

use super::{collapse_read, encode, validate_batch, ServiceContext};
use crate::errors::DotykackaResult;
use crate::types::{Customer, CustomerInput, ListResponse};

const FETCH_CONTEXT: &str = "Error fetching customers";
const CREATE_CONTEXT: &str = "Error creating customers";

/// Customers service trait.
#[async_trait]
pub trait CustomersService: Send + Sync {
    /// Lists the customers of the cloud, or `None` if the read failed with
    /// anything but HTTP 400 or a token failure.
    async fn list(&self) -> DotykackaResult<Option<ListResponse<Customer>>>;

    /// Retrieves one customer.
    async fn get(&self, customer_id: u64) -> DotykackaResult<Option<Customer>>;

    /// Creates between 1 and 99 customers in one request.
    async fn create(&self, customers: Vec<CustomerInput>) -> DotykackaResult<Vec<Customer>>;
}

/// Default implementation of the customers service.
pub struct DefaultCustomersService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DefaultCustomersService<'a> {
    pub(crate) fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl CustomersService for DefaultCustomersService<'_> {
    #[instrument(skip(self))]
    async fn list(&self) -> DotykackaResult<Option<ListResponse<Customer>>> {
        let url = self.ctx.cloud_url("customers");

        let result = self
            .ctx
            .executor
            .execute("customers.list", |token| {
                self.ctx.get_json(token, &url, FETCH_CONTEXT)
            })
            .await;

        collapse_read("customers.list", result)
    }

    #[instrument(skip(self))]
    async fn get(&self, customer_id: u64) -> DotykackaResult<Option<Customer>> {
        let url = self.ctx.cloud_url(&format!("customers/{customer_id}"));

        let result = self
            .ctx
            .executor
            .execute("customers.get", |token| {
                self.ctx.get_json(token, &url, FETCH_CONTEXT)
            })
            .await;

        collapse_read("customers.get", result)
    }

    #[instrument(skip(self, customers), fields(count = customers.len()))]
    async fn create(&self, customers: Vec<CustomerInput>) -> DotykackaResult<Vec<Customer>> {
        validate_batch(customers.len(), "customer")?;

        let url = self.ctx.cloud_url("customers");
        let body = encode(&customers)?;

        self.ctx
            .executor
            .execute("customers.create", |token| {
                self.ctx.post_json(token, &url, body.clone(), CREATE_CONTEXT)
            })
            .await
    }
}
