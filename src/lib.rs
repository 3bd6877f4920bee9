//! Dotykacka POS Cloud Client Library
//!
//! An async Rust client for the Dotykacka point-of-sale cloud API: products,
//! customers and order pos-actions.
//!
//! # Features
//!
//! - **Token lifecycle**: the refresh token is exchanged for an access token
//!   at construction; the token is reused until a call fails
//! - **Refresh once**: a failed call refreshes the token and retries exactly once
//! - **Forgiving reads**: list and get return `None` unless the server answers
//!   HTTP 400 or the token cannot be obtained
//! - **Observability**: `tracing` spans and events, token lifecycle counters
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dotykacka_client::services::ProductsService;
//! use dotykacka_client::{DotykackaClient, NewProduct};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DotykackaClient::builder()
//!         .cloud_id(356274219)
//!         .branch_id(1)
//!         .refresh_token("your-refresh-token")
//!         .build()?;
//!
//!     let created = client
//!         .products()
//!         .create(vec![NewProduct::new("Coffee", 1, 50.0, 21.0).into()])
//!         .await?;
//!     println!("created {} product(s)", created.len());
//!
//!     if let Some(page) = client.products().list().await? {
//!         for product in page.data {
//!             println!("{}", product.name);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod resilience;
pub mod services;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::{DotykackaClient, DotykackaClientBuilder};
pub use config::{DotykackaConfig, SessionCredentials};
pub use errors::{DotykackaError, DotykackaResult};
pub use resilience::{RefreshMode, RetryPolicy, RetryTrigger};

// Type re-exports
pub use types::{
    AddOrderItems, Customer, CustomerInput, ListResponse, NewCustomer, NewProduct, Order,
    OrderItem, OrderItemCustomization, OrderUpdate, PageNumber, PosAction, Product, ProductInput,
    Unit,
};

/// Mock implementations for testing.
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
