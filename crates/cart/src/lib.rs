//! Prickly Pear Cart - quantity reconciliation and add-to-cart delegation.
//!
//! The reconciler owns no persistent state: given a requested addition and
//! the current cart line for that product, it decides whether the addition
//! is valid against the stock ceiling and proposes the entry to hand to the
//! external cart-mutation service. The [`AddToCartController`] carries what
//! the presentation shell owns around that check: the quantity input guard,
//! the request lifecycle, and the one asynchronous delegation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod controller;
pub mod error;
pub mod reconciler;
pub mod service;
pub mod types;
pub mod view;

pub use config::{CartConfig, ConfigError};
pub use controller::AddToCartController;
pub use error::CartError;
pub use reconciler::{MAX_LINE_QUANTITY, clamp_quantity_input, validate};
pub use service::{BoxError, CartBackend};
pub use types::{CartItem, CartLineUpsert, Product};
