//! Quantity reconciliation against the stock ceiling.
//!
//! Pure functions: nothing here mutates the cart or suspends. Validation
//! checks the requested quantity alone and combined with what the cart
//! already holds, then proposes the entry to hand to the cart-mutation
//! service.

use crate::error::CartError;
use crate::types::{CartItem, CartLineUpsert, Product};

/// Hard cap on a single line's quantity input, independent of stock.
pub const MAX_LINE_QUANTITY: u32 = 99;

/// Validate a requested addition against the product's stock ceiling.
///
/// `existing` is the cart line for this product, if any; it is read, never
/// mutated. On success returns the entry to delegate to the cart-mutation
/// service, carrying the requested quantity (the service adds it to any
/// existing line).
///
/// # Errors
///
/// - [`CartError::InvalidProduct`] if the product has no identifier.
/// - [`CartError::InvalidQuantity`] if `requested` is zero.
/// - [`CartError::QuantityExceedsStock`] if `requested` alone exceeds stock.
/// - [`CartError::CombinedExceedsStock`] if the cart total would exceed
///   stock; carries the exact remaining allowance.
pub fn validate(
    product: &Product,
    requested: u32,
    existing: Option<&CartItem>,
) -> Result<CartLineUpsert, CartError> {
    if product.id.is_empty() {
        return Err(CartError::InvalidProduct);
    }

    if requested == 0 {
        return Err(CartError::InvalidQuantity);
    }

    if requested > product.stock {
        return Err(CartError::QuantityExceedsStock {
            stock: product.stock,
        });
    }

    let prior = existing.map_or(0, |item| item.quantity);
    let projected = u64::from(prior) + u64::from(requested);
    if projected > u64::from(product.stock) {
        return Err(CartError::CombinedExceedsStock {
            requested,
            // A cart already holding more than current stock has no
            // allowance left, not a wrapped one.
            remaining: product.stock.saturating_sub(prior),
        });
    }

    Ok(CartLineUpsert {
        id: product.id.clone(),
        name: product.name.clone(),
        price: product.price,
        image: product.image.clone(),
        quantity: requested,
    })
}

/// Clamp a free-form numeric quantity input to `[1, min(stock, cap)]`.
///
/// Returns `None` for anything outside the range (including non-positive
/// values); the caller keeps its prior valid quantity. This is an input
/// guard, not an error channel.
#[must_use]
pub fn clamp_quantity_input(raw: i64, stock: u32, cap: u32) -> Option<u32> {
    let max = stock.min(cap);
    let value = u32::try_from(raw).ok()?;
    (1..=max).contains(&value).then_some(value)
}
