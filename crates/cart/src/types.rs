//! Domain types for cart reconciliation.

use serde::{Deserialize, Serialize};

use prickly_pear_core::{Price, ProductId, StockLevel};

/// A product offered for sale.
///
/// Read-only input from the catalog; `stock` is the ceiling reconciliation
/// enforces, both for a single request and cumulatively with the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Units currently available.
    pub stock: u32,
    /// Product image URL.
    pub image: String,
}

impl Product {
    /// Classify availability using the default low-stock threshold.
    #[must_use]
    pub const fn stock_level(&self) -> StockLevel {
        StockLevel::classify(self.stock, StockLevel::LOW_STOCK_THRESHOLD)
    }

    /// Whether no units are available.
    #[must_use]
    pub const fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }
}

/// A line in the cart collection.
///
/// At most one per product id; quantity is always positive. Created and
/// mutated only by the external cart-mutation service - read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product ID this line is for.
    pub id: ProductId,
    /// Display name, denormalized for rendering.
    pub name: String,
    /// Unit price at the time the line was created.
    pub price: Price,
    /// Product image URL.
    pub image: String,
    /// Units in the cart.
    pub quantity: u32,
}

/// Upsert request for the external cart-mutation service.
///
/// Carries the requested delta, not the projected cart total; the service
/// decides how to apply it (this system assumes it adds to any existing
/// line, which is what the validation math requires).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineUpsert {
    /// Product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Product image URL.
    pub image: String,
    /// Quantity to add.
    pub quantity: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use prickly_pear_core::CurrencyCode;

    use super::*;

    fn product(stock: u32) -> Product {
        Product {
            id: ProductId::new("p1"),
            name: "Barrel Cactus".to_owned(),
            price: Price::from_cents(1999, CurrencyCode::USD),
            stock,
            image: "/images/p1.jpg".to_owned(),
        }
    }

    #[test]
    fn test_stock_level_from_product() {
        assert!(product(0).is_out_of_stock());
        assert!(product(3).stock_level().is_low());
        assert_eq!(product(20).stock_level(), StockLevel::InStock);
    }

    #[test]
    fn test_upsert_serializes_all_fields() {
        let line = CartLineUpsert {
            id: ProductId::new("p1"),
            name: "Barrel Cactus".to_owned(),
            price: Price::from_cents(1999, CurrencyCode::USD),
            image: "/images/p1.jpg".to_owned(),
            quantity: 2,
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["id"], "p1");
        assert_eq!(json["quantity"], 2);
    }
}
