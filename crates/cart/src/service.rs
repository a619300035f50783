//! The external cart-mutation service contract.

use std::future::Future;

use crate::types::CartLineUpsert;

/// Opaque failure from the cart-mutation service.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The external, asynchronous cart-mutation service.
///
/// Accepts a validated upsert request and either applies it or fails
/// opaquely. The service owns the cart collection and decides how to apply
/// the delta; this system assumes it adds the quantity to any existing
/// line. The reconciler depends only on this contract, never on an
/// implementation.
///
/// Implementations may use `async fn` syntax.
pub trait CartBackend {
    /// Apply a validated line upsert to the cart.
    ///
    /// Runs to completion once started; the caller does not cancel it and
    /// does not start another request for the same product until it
    /// answers.
    fn upsert_line(
        &self,
        line: &CartLineUpsert,
    ) -> impl Future<Output = Result<(), BoxError>> + Send;
}
