//! Core types for the product catalog API.
//!
//! Defines the catalog's domain types: product records and ids, the
//! validated create/update draft, the payload validation rules, and the
//! seed data.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod id;
pub mod product;
pub mod seed;
pub mod validate;

pub use error::ValidationError;
pub use id::ProductId;
pub use product::{Product, ProductDraft};
pub use seed::seed_products;
pub use validate::validate_product_payload;
