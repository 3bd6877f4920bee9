//! Customer types.

use serde::{Deserialize, Serialize};

use super::common::null_as_empty;

/// A customer as stored in the cloud.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Customer {
    /// Customer id. Absent on customers that were not created yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Cloud id.
    #[serde(rename = "_cloudId", skip_serializing_if = "Option::is_none")]
    pub cloud_id: Option<u64>,
    /// Discount group id.
    #[serde(rename = "_discountGroupId", skip_serializing_if = "Option::is_none")]
    pub discount_group_id: Option<u64>,
    /// Seller id.
    #[serde(rename = "_sellerId", skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<u64>,
    /// First address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    /// Second address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    /// Loyalty card barcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Date of birth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Company registration number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Soft-delete flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    /// Whether the customer is listed at the register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Loyalty card expiry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<String>,
    /// Integrator-assigned id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Bit flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
    /// Text printed on receipt headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_print: Option<String>,
    /// Display color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex_color: Option<String>,
    /// Note visible to staff only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_note: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Last editor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
    /// Note printed on receipts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Loyalty points balance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    /// Tags.
    #[serde(
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,
    /// VAT registration number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,
    /// Last modification timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_date: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

/// Minimum payload for creating a customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    /// Cloud id.
    #[serde(rename = "_cloudId")]
    pub cloud_id: u64,
    /// Whether the customer is listed at the register.
    pub display: bool,
    /// Bit flags.
    pub flags: u64,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Loyalty card barcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Integrator-assigned id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl NewCustomer {
    /// Creates a displayed customer with no contact details.
    pub fn new(cloud_id: u64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            cloud_id,
            display: true,
            flags: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            phone: None,
            barcode: None,
            external_id: None,
        }
    }

    /// Sets the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the loyalty card barcode.
    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    /// Sets the integrator-assigned id.
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }
}

/// Item of a customer creation batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CustomerInput {
    /// A full customer record.
    Full(Box<Customer>),
    /// A minimum create payload.
    New(NewCustomer),
}

impl From<Customer> for CustomerInput {
    fn from(customer: Customer) -> Self {
        CustomerInput::Full(Box::new(customer))
    }
}

impl From<NewCustomer> for CustomerInput {
    fn from(customer: NewCustomer) -> Self {
        CustomerInput::New(customer)
    }
}
