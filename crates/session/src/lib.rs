//! Prickly Pear Session - authentication-gated navigation.
//!
//! A [`Session`] owns the current identity and the active view. Login,
//! logout, and navigation requests each return the next session value;
//! the presentation layer holds a single mutable slot and re-renders
//! whenever it stores a new one.
//!
//! Navigation while logged out is denied, not failed: [`NavigationDenied`]
//! is a defined outcome the caller surfaces through the notification
//! channel.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod credentials;
pub mod models;
pub mod navigator;

pub use credentials::{Credentials, CredentialsError};
pub use models::{Identity, Page, Theme, UserSettings};
pub use navigator::{NavigationDenied, Session};
