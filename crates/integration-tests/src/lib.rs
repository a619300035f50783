//! Integration test support for Prickly Pear.
//!
//! In-memory stand-ins for the two external collaborators: the asynchronous
//! cart-mutation service and the notification channel. Tests drive the real
//! session and cart components against these.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p prickly-pear-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::HashMap;
use std::sync::Mutex;

use prickly_pear_cart::{BoxError, CartBackend, CartItem, CartLineUpsert, Product};
use prickly_pear_core::{CurrencyCode, Email, Notifier, Price, ProductId, UserId};
use prickly_pear_session::{Identity, Theme, UserSettings};

/// Install a test subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "prickly_pear=debug".into());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

// =============================================================================
// Cart-mutation service stand-ins
// =============================================================================

/// Cart-mutation service with "service adds" semantics.
///
/// Owns the cart collection, as the real service would: an upsert for a
/// product already in the cart accumulates quantities, and at most one line
/// exists per product id.
#[derive(Debug, Default)]
pub struct InMemoryCartBackend {
    lines: Mutex<HashMap<ProductId, CartItem>>,
}

impl InMemoryCartBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the line for `id`, if present.
    #[must_use]
    pub fn line(&self, id: &ProductId) -> Option<CartItem> {
        self.lines.lock().expect("cart lock").get(id).cloned()
    }

    /// Total quantity across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines
            .lock()
            .expect("cart lock")
            .values()
            .map(|item| item.quantity)
            .sum()
    }
}

impl CartBackend for InMemoryCartBackend {
    async fn upsert_line(&self, line: &CartLineUpsert) -> Result<(), BoxError> {
        let mut lines = self.lines.lock().expect("cart lock");
        lines
            .entry(line.id.clone())
            .and_modify(|item| item.quantity += line.quantity)
            .or_insert_with(|| CartItem {
                id: line.id.clone(),
                name: line.name.clone(),
                price: line.price,
                image: line.image.clone(),
                quantity: line.quantity,
            });
        Ok(())
    }
}

/// Cart-mutation service that always fails, for exercising retry behavior.
#[derive(Debug, Default)]
pub struct FailingCartBackend;

impl CartBackend for FailingCartBackend {
    async fn upsert_line(&self, _line: &CartLineUpsert) -> Result<(), BoxError> {
        Err("cart service unavailable".into())
    }
}

// =============================================================================
// Notification channel stand-in
// =============================================================================

/// Notification channel that records every message for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All success messages seen so far, in order.
    #[must_use]
    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().expect("notifier lock").clone()
    }

    /// All error messages seen so far, in order.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().expect("notifier lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes
            .lock()
            .expect("notifier lock")
            .push(message.to_owned());
    }

    fn error(&self, message: &str) {
        self.errors
            .lock()
            .expect("notifier lock")
            .push(message.to_owned());
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// A catalog product fixture priced in cents.
#[must_use]
pub fn product(id: &str, name: &str, price_cents: i64, stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_cents(price_cents, CurrencyCode::USD),
        stock,
        image: format!("/images/{id}.jpg"),
    }
}

/// The demo identity record the identity provider hands out.
#[must_use]
pub fn identity() -> Identity {
    Identity {
        id: UserId::new("u123"),
        name: "Alex Doe".to_owned(),
        email: Email::parse("alex.doe@example.com").expect("fixture email"),
        bio: "Loves building innovative testing solutions with AI.".to_owned(),
        settings: UserSettings {
            notifications: true,
            theme: Theme::Dark,
        },
    }
}
