use serde::Serialize;

use stockview_core::{DomainError, DomainResult, ProductId};

use crate::price::Price;

/// One inventory line item.
///
/// Immutable once constructed; fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    price: Price,
    stock: i64,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Price,
        stock: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
            stock,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Stock on hand. May be negative; the source data is not validated.
    pub fn stock(&self) -> i64 {
        self.stock
    }

    /// Value of the stock on hand (`price × stock`).
    pub fn stock_value(&self) -> f64 {
        self.price.as_f64() * self.stock as f64
    }
}

/// Parse a stock quantity. Surrounding whitespace is accepted.
pub fn parse_stock(s: &str) -> DomainResult<i64> {
    s.trim()
        .parse::<i64>()
        .map_err(|e| DomainError::validation(format!("stock {s:?}: {e}")))
}
