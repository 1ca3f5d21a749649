//! Products domain module.
//!
//! This crate contains the product catalog line item as pure domain data
//! (no IO, no file formats).

pub mod price;
pub mod product;

pub use price::Price;
pub use product::{Product, parse_stock};
