//! Type definitions for the Dotykacka API.

pub mod common;
pub mod customer;
pub mod order;
pub mod product;
pub mod unit;

pub use common::{ListResponse, PageNumber};
pub use customer::{Customer, CustomerInput, NewCustomer};
pub use order::{AddOrderItems, Order, OrderItem, OrderItemCustomization, OrderUpdate, PosAction};
pub use product::{NewProduct, Product, ProductInput};
pub use unit::{Unit, UnitKind};
