//! Cart reconciliation error types.
//!
//! Every variant message is user-facing and surfaced verbatim through the
//! notification channel; the strings are part of the observable contract.

use thiserror::Error;

use crate::service::BoxError;

/// Errors produced by cart validation and submission.
///
/// All variants are recoverable outcomes for the caller: none abort the
/// process, none trigger an internal retry, and each maps to exactly one
/// notification message.
#[derive(Debug, Error)]
pub enum CartError {
    /// The product record carries no identifier.
    #[error("Invalid product")]
    InvalidProduct,

    /// The requested quantity is not positive.
    #[error("Quantity must be greater than 0")]
    InvalidQuantity,

    /// The requested quantity alone exceeds available stock.
    #[error("Only {stock} items available in stock")]
    QuantityExceedsStock {
        /// Units available.
        stock: u32,
    },

    /// The requested quantity plus what the cart already holds exceeds
    /// stock. Carries the remaining allowance so the caller can present an
    /// exact actionable number.
    #[error("Cannot add {requested} items. Only {remaining} more available")]
    CombinedExceedsStock {
        /// Units requested in this attempt.
        requested: u32,
        /// Units that could still be added.
        remaining: u32,
    },

    /// The external cart-mutation service rejected or failed the upsert.
    /// Local quantity state is unchanged; retrying re-offers the same
    /// validated quantity.
    #[error("Failed to add item to cart. Please try again.")]
    SubmissionFailed {
        /// The opaque service failure.
        #[source]
        source: BoxError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_verbatim() {
        assert_eq!(CartError::InvalidProduct.to_string(), "Invalid product");
        assert_eq!(
            CartError::InvalidQuantity.to_string(),
            "Quantity must be greater than 0"
        );
        assert_eq!(
            CartError::QuantityExceedsStock { stock: 5 }.to_string(),
            "Only 5 items available in stock"
        );
        assert_eq!(
            CartError::CombinedExceedsStock {
                requested: 3,
                remaining: 2
            }
            .to_string(),
            "Cannot add 3 items. Only 2 more available"
        );
        assert_eq!(
            CartError::SubmissionFailed {
                source: "boom".into()
            }
            .to_string(),
            "Failed to add item to cart. Please try again."
        );
    }
}
