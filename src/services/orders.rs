//! Orders service.
//!
//! All operations post to the branch's `pos-actions` endpoint. The register
//! must be online for order actions to complete.

use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

use super::{encode, ServiceContext};
use crate::errors::DotykackaResult;
use crate::types::order::pos_action_payload;
use crate::types::{AddOrderItems, Order, OrderUpdate, PosAction};

/// Orders service trait.
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Creates an order.
    async fn create(&self, order: Order) -> DotykackaResult<Value>;

    /// Updates the order `order_id`.
    async fn update(&self, order_id: u64, update: OrderUpdate) -> DotykackaResult<Value>;

    /// Appends items to the order `order_id`.
    async fn add_items(&self, order_id: u64, items: AddOrderItems) -> DotykackaResult<Value>;

    /// Cancels the order `order_id`.
    async fn cancel(&self, order_id: u64) -> DotykackaResult<Value>;
}

/// Default implementation of the orders service.
pub struct DefaultOrdersService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DefaultOrdersService<'a> {
    pub(crate) fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn post_action(
        &self,
        operation: &str,
        context: &str,
        payload: &Value,
    ) -> DotykackaResult<Value> {
        let url = self.ctx.pos_actions_url();
        let body = encode(payload)?;

        self.ctx
            .executor
            .execute(operation, |token| {
                self.ctx.post_json(token, &url, body.clone(), context)
            })
            .await
    }
}

#[async_trait]
impl OrdersService for DefaultOrdersService<'_> {
    #[instrument(skip(self, order), fields(items = order.items.len()))]
    async fn create(&self, order: Order) -> DotykackaResult<Value> {
        let payload = pos_action_payload(PosAction::Create, None, Some(&order))?;
        self.post_action("orders.create", "Error creating order", &payload)
            .await
    }

    #[instrument(skip(self, update))]
    async fn update(&self, order_id: u64, update: OrderUpdate) -> DotykackaResult<Value> {
        let payload = pos_action_payload(PosAction::Update, Some(order_id), Some(&update))?;
        self.post_action("orders.update", "Error updating order", &payload)
            .await
    }

    #[instrument(skip(self, items))]
    async fn add_items(&self, order_id: u64, items: AddOrderItems) -> DotykackaResult<Value> {
        let payload = pos_action_payload(PosAction::AddItem, Some(order_id), Some(&items))?;
        self.post_action("orders.add_items", "Error adding order items", &payload)
            .await
    }

    #[instrument(skip(self))]
    async fn cancel(&self, order_id: u64) -> DotykackaResult<Value> {
        let payload = pos_action_payload::<Value>(PosAction::Cancel, Some(order_id), None)?;
        self.post_action("orders.cancel", "Error canceling order", &payload)
            .await
    }
}
