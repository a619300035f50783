//! Prickly Pear Core - Shared types library.
//!
//! This crate provides common types used across all Prickly Pear components:
//! - `session` - Authentication-gated navigation state machine
//! - `cart` - Cart quantity reconciliation and add-to-cart delegation
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no network
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses
//! - [`notify`] - The seam to the external notification/alert channel

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod notify;
pub mod types;

pub use notify::{Notifier, NullNotifier};
pub use types::*;
