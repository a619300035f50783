//! Session-related types.
//!
//! The identity record supplied by the external identity provider, its
//! settings, and the pages the navigator can show.

use serde::{Deserialize, Serialize};

use prickly_pear_core::{Email, UserId};

/// Identity record supplied by the identity provider on login.
///
/// Treated as opaque and trusted fully; no credential validation happens in
/// this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// User's ID at the identity provider.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Email,
    /// Short free-form bio shown on the profile page.
    pub bio: String,
    /// Per-user application settings.
    pub settings: UserSettings,
}

/// Per-user application settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Whether notifications are enabled.
    pub notifications: bool,
    /// Interface theme.
    pub theme: Theme,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            notifications: true,
            theme: Theme::System,
        }
    }
}

/// Interface theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light mode.
    Light,
    /// Dark mode.
    Dark,
    /// Follow the system preference.
    #[default]
    System,
}

/// Pages the navigator can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// The login form; the only page visible while logged out.
    #[default]
    Login,
    /// The user's profile.
    Profile,
    /// Application settings.
    Settings,
}
