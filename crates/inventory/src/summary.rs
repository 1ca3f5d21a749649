//! All report views computed together.

use stockview_products::Product;

use crate::views::{CategoryGroup, by_price_desc, group_by_category, low_stock, total_value};

/// The four derived views of one product list.
#[derive(Debug, Clone, PartialEq)]
pub struct InventorySummary<'a> {
    pub low_stock_threshold: i64,
    pub low_stock: Vec<&'a Product>,
    pub by_price_desc: Vec<&'a Product>,
    pub total_value: f64,
    pub by_category: Vec<CategoryGroup<'a>>,
}

impl<'a> InventorySummary<'a> {
    /// Compute every view once over `products`.
    pub fn compute(products: &'a [Product], low_stock_threshold: i64) -> Self {
        Self {
            low_stock_threshold,
            low_stock: low_stock(products, low_stock_threshold),
            by_price_desc: by_price_desc(products),
            total_value: total_value(products),
            by_category: group_by_category(products),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::LOW_STOCK_THRESHOLD;
    use stockview_core::ProductId;
    use stockview_products::Price;

    #[test]
    fn compute_matches_widget_gadget_scenario() {
        let products = vec![
            Product::new(ProductId::new(1), "Widget", "Tools", Price::new(9.99), 5),
            Product::new(ProductId::new(2), "Gadget", "Tools", Price::new(19.99), 15),
        ];

        let summary = InventorySummary::compute(&products, LOW_STOCK_THRESHOLD);

        assert_eq!(summary.low_stock_threshold, 10);
        assert_eq!(summary.low_stock.len(), 1);
        assert_eq!(summary.low_stock[0].name(), "Widget");
        assert_eq!(summary.by_price_desc[0].name(), "Gadget");
        assert_eq!(summary.by_price_desc[1].name(), "Widget");
        assert_eq!(format!("{:.2}", summary.total_value), "349.80");
        assert_eq!(summary.by_category.len(), 1);
        assert_eq!(summary.by_category[0].category, "Tools");
        assert_eq!(summary.by_category[0].products.len(), 2);
    }

    #[test]
    fn custom_threshold_is_honoured() {
        let products = vec![
            Product::new(ProductId::new(1), "Widget", "Tools", Price::new(9.99), 5),
            Product::new(ProductId::new(2), "Gadget", "Tools", Price::new(19.99), 15),
        ];

        let summary = InventorySummary::compute(&products, 20);
        assert_eq!(summary.low_stock.len(), 2);
    }
}
