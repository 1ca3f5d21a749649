//! Text layout shared by every report sink.

use core::fmt;

use stockview_inventory::InventorySummary;

/// A renderable inventory report.
///
/// Sections, in order: low stock, price ranking, total value, category groups.
/// The layout is rendered once and the same text goes to every sink.
#[derive(Debug, Clone, Copy)]
pub struct ReportDocument<'a> {
    summary: &'a InventorySummary<'a>,
    currency: &'a str,
}

impl<'a> ReportDocument<'a> {
    pub fn new(summary: &'a InventorySummary<'a>, currency: &'a str) -> Self {
        Self { summary, currency }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ReportDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;
        let currency = self.currency;

        writeln!(f, "=== Inventory Report ===")?;
        writeln!(f)?;

        writeln!(
            f,
            "1. Products with stock below {}:",
            summary.low_stock_threshold
        )?;
        for product in &summary.low_stock {
            writeln!(f, "{} - Stock: {}", product.name(), product.stock())?;
        }
        writeln!(f)?;

        writeln!(f, "2. Products ordered by price (highest first):")?;
        for product in &summary.by_price_desc {
            writeln!(f, "{} - {currency}{}", product.name(), product.price())?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "3. Total inventory value: {currency}{:.2}",
            summary.total_value
        )?;
        writeln!(f)?;

        writeln!(f, "4. Products grouped by category:")?;
        for group in &summary.by_category {
            writeln!(f)?;
            writeln!(f, "Category: {}", group.category)?;
            for product in &group.products {
                writeln!(
                    f,
                    "  - {} ({currency}{}, Stock {})",
                    product.name(),
                    product.price(),
                    product.stock()
                )?;
            }
        }
        Ok(())
    }
}
