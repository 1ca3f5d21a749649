//! Inventory views.
//!
//! Pure, deterministic derivations over a loaded product list (no IO).
//! Every view borrows from the input slice and preserves input order unless it
//! explicitly re-orders.

pub mod summary;
pub mod views;

pub use summary::InventorySummary;
pub use views::{
    CategoryGroup, LOW_STOCK_THRESHOLD, by_price_desc, group_by_category, low_stock, total_value,
};
