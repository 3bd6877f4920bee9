//! Product types.

use serde::{Deserialize, Serialize};

use super::common::null_as_empty;
use super::unit::Unit;

/// A product as stored in the cloud.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    /// Product id. Absent on products that were not created yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Category id.
    #[serde(rename = "_categoryId", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    /// Cloud id.
    #[serde(rename = "_cloudId", skip_serializing_if = "Option::is_none")]
    pub cloud_id: Option<u64>,
    /// Default course id.
    #[serde(rename = "_defaultCourseId", skip_serializing_if = "Option::is_none")]
    pub default_course_id: Option<u64>,
    /// EET subject id.
    #[serde(rename = "_eetSubjectId", skip_serializing_if = "Option::is_none")]
    pub eet_subject_id: Option<u64>,
    /// Supplier id.
    #[serde(rename = "_supplierId", skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<u64>,
    /// Product name.
    pub name: String,
    /// Alternative name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_name: Option<String>,
    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Soft-delete flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    /// Delivery note ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_note_ids: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Discount in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
    /// Whether discounts apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_permitted: Option<bool>,
    /// Whether the product is shown at the register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    /// EAN barcodes.
    #[serde(
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ean: Vec<String>,
    /// Integrator-assigned id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Bit flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
    /// Button color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex_color: Option<String>,
    /// Margin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    /// Minimum margin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_min: Option<f64>,
    /// Last editor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
    /// Notes.
    #[serde(
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub notes: Vec<String>,
    /// Whether the product is on sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_sale: Option<bool>,
    /// Package item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_item: Option<f64>,
    /// Packaging quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging: Option<f64>,
    /// Packaging measurement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging_measurement: Option<f64>,
    /// PLU code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plu: Option<String>,
    /// Loyalty points awarded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    /// Price in loyalty points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_in_points: Option<f64>,
    /// Price including VAT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_with_vat: Option<f64>,
    /// Price level B including VAT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_with_vat_b: Option<f64>,
    /// Price level C including VAT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_with_vat_c: Option<f64>,
    /// Price level D including VAT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_with_vat_d: Option<f64>,
    /// Price level E including VAT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_with_vat_e: Option<f64>,
    /// Price excluding VAT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_without_vat: Option<f64>,
    /// Purchase price excluding VAT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price_without_vat: Option<f64>,
    /// Whether the cashier must type the price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_price_entry: Option<bool>,
    /// Sort order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    /// Whether sales deduct stock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_deduct: Option<bool>,
    /// Stock overdraft policy, passed through as received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_overdraft: Option<serde_json::Value>,
    /// Subtitle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Supplier's product code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_product_code: Option<String>,
    /// Tags.
    #[serde(
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,
    /// Sale unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    /// Measurement unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_measurement: Option<Unit>,
    /// VAT rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<f64>,
    /// Last modification timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_date: Option<String>,
}

/// Minimum payload for creating a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Category id.
    #[serde(rename = "_categoryId")]
    pub category_id: u64,
    /// Soft-delete flag.
    pub deleted: bool,
    /// Discount in percent.
    pub discount_percent: f64,
    /// Whether discounts apply.
    pub discount_permitted: bool,
    /// Whether the product is shown at the register.
    pub display: bool,
    /// Bit flags.
    pub flags: u64,
    /// Button color.
    pub hex_color: String,
    /// Product name.
    pub name: String,
    /// Whether the product is on sale.
    pub on_sale: bool,
    /// Packaging quantity.
    pub packaging: f64,
    /// Loyalty points awarded.
    pub points: f64,
    /// Price excluding VAT.
    pub price_without_vat: f64,
    /// Whether the cashier must type the price.
    pub requires_price_entry: bool,
    /// Whether sales deduct stock.
    pub stock_deduct: bool,
    /// Stock overdraft policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_overdraft: Option<serde_json::Value>,
    /// Sale unit.
    pub unit: Unit,
    /// VAT rate.
    pub vat: f64,
}

impl NewProduct {
    /// Creates a displayed, on-sale piece product.
    pub fn new(name: impl Into<String>, category_id: u64, price_without_vat: f64, vat: f64) -> Self {
        Self {
            category_id,
            deleted: false,
            discount_percent: 0.0,
            discount_permitted: true,
            display: true,
            flags: 0,
            hex_color: "#000000".to_string(),
            name: name.into(),
            on_sale: true,
            packaging: 1.0,
            points: 0.0,
            price_without_vat,
            requires_price_entry: false,
            stock_deduct: false,
            stock_overdraft: None,
            unit: Unit::Piece,
            vat,
        }
    }

    /// Sets the sale unit.
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the button color.
    pub fn with_hex_color(mut self, hex_color: impl Into<String>) -> Self {
        self.hex_color = hex_color.into();
        self
    }
}

/// Item of a product creation batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProductInput {
    /// A full product record.
    Full(Box<Product>),
    /// A minimum create payload.
    New(NewProduct),
}

impl From<Product> for ProductInput {
    fn from(product: Product) -> Self {
        ProductInput::Full(Box::new(product))
    }
}

impl From<NewProduct> for ProductInput {
    fn from(product: NewProduct) -> Self {
        ProductInput::New(product)
    }
}
