//! Infrastructure layer: file-backed inventory sources.

pub mod loader;

pub use loader::{LoadError, ProductField, load_products, parse_products};
