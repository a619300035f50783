//! Caller-side add-to-cart flow.
//!
//! Owns what the presentation shell owns around reconciliation: the
//! quantity input and its guard, the request lifecycle, and the delegation
//! of a validated entry to the cart-mutation service. Reconciliation itself
//! stays in [`crate::reconciler`], pure and synchronous.

use tracing::instrument;
use uuid::Uuid;

use prickly_pear_core::{Notifier, RequestPhase};

use crate::config::CartConfig;
use crate::error::CartError;
use crate::reconciler::{clamp_quantity_input, validate};
use crate::service::CartBackend;
use crate::types::{CartItem, CartLineUpsert, Product};

/// Drives one product's add-to-cart control.
///
/// `submit` takes `&mut self`, so a second submission cannot start while one
/// is suspended at the service; [`AddToCartController::is_busy`] exposes the
/// flag the shell renders as a disabled control in the meantime.
#[derive(Debug, Clone)]
pub struct AddToCartController {
    config: CartConfig,
    quantity: u32,
    phase: RequestPhase,
}

impl AddToCartController {
    /// Create a controller with quantity 1 and an idle request lifecycle.
    #[must_use]
    pub const fn new(config: CartConfig) -> Self {
        Self {
            config,
            quantity: 1,
            phase: RequestPhase::Idle,
        }
    }

    /// Currently selected quantity.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Lifecycle of the latest submission.
    #[must_use]
    pub const fn phase(&self) -> RequestPhase {
        self.phase
    }

    /// Whether a submission is suspended at the cart-mutation service.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.phase.is_in_flight()
    }

    /// Apply a free-form quantity input.
    ///
    /// Accepts integers within `[1, min(stock, max_line_quantity)]`;
    /// anything else - non-numeric text included - leaves the prior valid
    /// quantity in place. Returns whether the input was accepted.
    pub fn set_quantity_input(&mut self, raw: &str, product: &Product) -> bool {
        let Ok(value) = raw.trim().parse::<i64>() else {
            return false;
        };
        match clamp_quantity_input(value, product.stock, self.config.max_line_quantity) {
            Some(quantity) => {
                self.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Validate the selected quantity and delegate the upsert.
    ///
    /// Every outcome reaches `notifier` with its exact message. Validation
    /// failures are terminal for the attempt and change nothing. A service
    /// failure is reported as [`CartError::SubmissionFailed`] and keeps the
    /// quantity, so a retry re-offers the same validated amount. Success
    /// resets the quantity input to 1 for the next add.
    ///
    /// # Errors
    ///
    /// Returns the validation or submission failure; see [`CartError`].
    #[instrument(
        name = "add_to_cart",
        skip_all,
        fields(
            submission_id = %Uuid::new_v4(),
            product_id = %product.id,
            quantity = self.quantity,
        )
    )]
    pub async fn submit<B, N>(
        &mut self,
        product: &Product,
        existing: Option<&CartItem>,
        backend: &B,
        notifier: &N,
    ) -> Result<CartLineUpsert, CartError>
    where
        B: CartBackend,
        N: Notifier,
    {
        let line = match validate(product, self.quantity, existing) {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(error = %err, "add to cart rejected");
                notifier.error(&err.to_string());
                return Err(err);
            }
        };

        self.phase = RequestPhase::InFlight;
        match backend.upsert_line(&line).await {
            Ok(()) => {
                self.phase = RequestPhase::Succeeded;
                notifier.success(&format!(
                    "{} {}(s) added to cart!",
                    line.quantity, line.name
                ));
                self.quantity = 1;
                Ok(line)
            }
            Err(source) => {
                self.phase = RequestPhase::Failed;
                tracing::error!(error = %source, "cart upsert failed");
                let err = CartError::SubmissionFailed { source };
                notifier.error(&err.to_string());
                Err(err)
            }
        }
    }
}

impl Default for AddToCartController {
    fn default() -> Self {
        Self::new(CartConfig::default())
    }
}
