//! Order types and pos-action payloads.
//!
//! Every order mutation is a POST to the branch's `pos-actions` endpoint. The
//! body carries an `action` discriminator next to the caller's fields, and
//! mutations of an existing order also carry `order-id`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::errors::{DotykackaError, DotykackaResult};

/// Discriminator of a pos-action request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosAction {
    /// Open a new order.
    #[serde(rename = "order/create")]
    Create,
    /// Change order attributes.
    #[serde(rename = "order/update")]
    Update,
    /// Append items to an order.
    #[serde(rename = "order/add-item")]
    AddItem,
    /// Split an order.
    #[serde(rename = "order/split")]
    Split,
    /// Issue a receipt.
    #[serde(rename = "order/issue")]
    Issue,
    /// Pay an order.
    #[serde(rename = "order/pay")]
    Pay,
    /// Create and issue in one step.
    #[serde(rename = "order/create-issue")]
    CreateIssue,
    /// Create, issue and pay in one step.
    #[serde(rename = "order/create-issue-pay")]
    CreateIssuePay,
    /// Split and issue.
    #[serde(rename = "order/split-issue")]
    SplitIssue,
    /// Split, issue and pay.
    #[serde(rename = "order/split-issue-pay")]
    SplitIssuePay,
    /// Issue and pay.
    #[serde(rename = "order/issue-and-pay")]
    IssueAndPay,
    /// Cancel an order.
    #[serde(rename = "order/cancel")]
    Cancel,
    /// List orders.
    #[serde(rename = "order/list")]
    List,
}

impl PosAction {
    /// Returns the wire literal, e.g. `order/cancel`.
    pub fn as_str(self) -> &'static str {
        match self {
            PosAction::Create => "order/create",
            PosAction::Update => "order/update",
            PosAction::AddItem => "order/add-item",
            PosAction::Split => "order/split",
            PosAction::Issue => "order/issue",
            PosAction::Pay => "order/pay",
            PosAction::CreateIssue => "order/create-issue",
            PosAction::CreateIssuePay => "order/create-issue-pay",
            PosAction::SplitIssue => "order/split-issue",
            PosAction::SplitIssuePay => "order/split-issue-pay",
            PosAction::IssueAndPay => "order/issue-and-pay",
            PosAction::Cancel => "order/cancel",
            PosAction::List => "order/list",
        }
    }
}

impl fmt::Display for PosAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A new order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Order {
    /// Customer the order belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    /// Order-wide discount in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
    /// Table the order is placed at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<u64>,
    /// Employee placing the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    /// Free-text note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Integrator-assigned id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Ordered items.
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Whether the order stays locked at the register.
    #[serde(default)]
    pub lock: bool,
}

impl Order {
    /// Creates an order with the given items.
    pub fn new(items: Vec<OrderItem>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }
}

/// Changes applied to an existing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrderUpdate {
    /// New customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    /// New discount in percent; `20.0` means 20 %.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
    /// New note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// New lock state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock: Option<bool>,
}

/// One line of an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrderItem {
    /// Product id.
    pub id: u64,
    /// Quantity.
    pub qty: f64,
    /// Line note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Line discount in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
    /// Price overriding the product price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_price: Option<f64>,
    /// Points overriding the product points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_points: Option<f64>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Course the item is served in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<u64>,
    /// Product customizations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customizations: Option<Vec<OrderItemCustomization>>,
}

impl OrderItem {
    /// Creates a line for `qty` units of product `id`.
    pub fn new(id: u64, qty: f64) -> Self {
        Self {
            id,
            qty,
            ..Default::default()
        }
    }
}

/// Customization attached to an order line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrderItemCustomization {
    /// Customization id.
    pub product_customization_id: u64,
    /// Product the customization adds.
    pub product_id: u64,
    /// Whether the item is taken away.
    pub take_away: bool,
}

/// Items appended to an existing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AddOrderItems {
    /// Items to add.
    pub items: Vec<OrderItem>,
    /// Whether the order stays locked at the register.
    #[serde(default)]
    pub lock: bool,
}

/// Builds a pos-action body.
///
/// `action` and `order-id` go in first and the caller's fields are merged
/// over them, so caller values win. `fields` must serialize to a JSON object.
pub(crate) fn pos_action_payload<T>(
    action: PosAction,
    order_id: Option<u64>,
    fields: Option<&T>,
) -> DotykackaResult<Value>
where
    T: Serialize + ?Sized,
{
    let mut body = Map::new();
    body.insert("action".to_string(), Value::from(action.as_str()));
    if let Some(id) = order_id {
        body.insert("order-id".to_string(), Value::from(id));
    }

    if let Some(fields) = fields {
        match serde_json::to_value(fields)? {
            Value::Object(map) => body.extend(map),
            other => {
                return Err(DotykackaError::Serialization {
                    message: format!("pos-action fields must be a JSON object, got {other}"),
                })
            }
        }
    }

    Ok(Value::Object(body))
}
