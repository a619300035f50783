//! Display strings for the add-to-cart control.
//!
//! Pure formatting, recomputed from product state on each render. The shell
//! places these; nothing here touches layout or styling.

use prickly_pear_core::StockLevel;

use crate::types::Product;

/// Stock line shown next to the quantity input.
#[must_use]
pub fn stock_label(product: &Product) -> String {
    if product.stock > 0 {
        format!("{} in stock", product.stock)
    } else {
        "Out of stock".to_owned()
    }
}

/// Label for the submit control: the quantity and the line total.
#[must_use]
pub fn submit_label(product: &Product, quantity: u32) -> String {
    format!(
        "Add {quantity} to Cart - {}",
        product.price.times(quantity)
    )
}

/// Warning shown when stock is low but not exhausted.
#[must_use]
pub fn low_stock_warning(product: &Product, low_threshold: u32) -> Option<String> {
    if StockLevel::classify(product.stock, low_threshold).is_low() {
        Some(format!("Only {} left in stock!", product.stock))
    } else {
        None
    }
}
