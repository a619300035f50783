//! Status enums for request lifecycle and stock availability.

use serde::{Deserialize, Serialize};

/// Lifecycle of a delegated cart-mutation request.
///
/// Owned by the caller of the reconciler, which itself stays synchronous and
/// side-effect-free. While a request is in flight the shell renders its
/// submit control disabled; cancellation is not supported, so the phase only
/// leaves `InFlight` when the service answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequestPhase {
    /// No request has been made, or the last outcome has been consumed.
    #[default]
    Idle,
    /// A request is suspended at the external service.
    InFlight,
    /// The last request was applied.
    Succeeded,
    /// The last request failed; the caller may retry with the same input.
    Failed,
}

impl RequestPhase {
    /// Whether a request is currently suspended at the external service.
    #[must_use]
    pub const fn is_in_flight(self) -> bool {
        matches!(self, Self::InFlight)
    }
}

/// Stock availability classification for display.
///
/// Recomputed from the product's stock ceiling; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    /// No units available.
    OutOfStock,
    /// Available, but at or below the low-stock threshold.
    Low,
    /// Comfortably available.
    InStock,
}

impl StockLevel {
    /// Default threshold at or below which stock counts as low.
    pub const LOW_STOCK_THRESHOLD: u32 = 5;

    /// Classify `stock` against a low-stock threshold.
    #[must_use]
    pub const fn classify(stock: u32, low_threshold: u32) -> Self {
        if stock == 0 {
            Self::OutOfStock
        } else if stock <= low_threshold {
            Self::Low
        } else {
            Self::InStock
        }
    }

    /// Whether no units are available.
    #[must_use]
    pub const fn is_out_of_stock(self) -> bool {
        matches!(self, Self::OutOfStock)
    }

    /// Whether stock is positive but at or below the threshold.
    #[must_use]
    pub const fn is_low(self) -> bool {
        matches!(self, Self::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_phase_default_is_idle() {
        assert_eq!(RequestPhase::default(), RequestPhase::Idle);
        assert!(!RequestPhase::Idle.is_in_flight());
        assert!(RequestPhase::InFlight.is_in_flight());
    }

    #[test]
    fn test_stock_classification_boundaries() {
        let t = StockLevel::LOW_STOCK_THRESHOLD;

        assert_eq!(StockLevel::classify(0, t), StockLevel::OutOfStock);
        assert_eq!(StockLevel::classify(1, t), StockLevel::Low);
        assert_eq!(StockLevel::classify(5, t), StockLevel::Low);
        assert_eq!(StockLevel::classify(6, t), StockLevel::InStock);
    }

    #[test]
    fn test_low_iff_positive_and_at_most_threshold() {
        for stock in 0..20 {
            let level = StockLevel::classify(stock, StockLevel::LOW_STOCK_THRESHOLD);
            let expected = stock > 0 && stock <= StockLevel::LOW_STOCK_THRESHOLD;
            assert_eq!(level.is_low(), expected, "stock = {stock}");
            assert_eq!(level.is_out_of_stock(), stock == 0, "stock = {stock}");
        }
    }
}
