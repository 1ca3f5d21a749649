use std::collections::HashMap;

use stockview_products::Product;

/// Products with stock strictly below this are reported as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Products whose stock is strictly below `threshold`, in input order.
pub fn low_stock(products: &[Product], threshold: i64) -> Vec<&Product> {
    products.iter().filter(|p| p.stock() < threshold).collect()
}

/// All products ordered by price, highest first.
///
/// The sort is stable: products with equal prices keep their input order.
/// A `NaN` price ranks below every number and therefore comes last.
pub fn by_price_desc(products: &[Product]) -> Vec<&Product> {
    let mut sorted: Vec<&Product> = products.iter().collect();
    sorted.sort_by(|a, b| b.price().compare(&a.price()));
    sorted
}

/// Sum of `price × stock` over all products. `0.0` for an empty list.
pub fn total_value(products: &[Product]) -> f64 {
    // Folding from positive zero keeps an empty total from rendering as "-0.00".
    products.iter().fold(0.0, |acc, p| acc + p.stock_value())
}

/// Products sharing one category label.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub products: Vec<&'a Product>,
}

/// Partition products by category.
///
/// Groups appear in order of each category's first occurrence; members keep
/// their input order.
pub fn group_by_category(products: &[Product]) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for product in products {
        let category = product.category();
        let slot = *index.entry(category).or_insert_with(|| {
            groups.push(CategoryGroup {
                category,
                products: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].products.push(product);
    }

    groups
}
