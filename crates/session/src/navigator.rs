//! The session navigator state machine.
//!
//! States are `{LoggedOut, Profile, Settings}` with `LoggedOut` initial. A
//! [`Session`] is an immutable value: every operation returns the next state
//! and leaves the previous one untouched, so the presentation layer can hold
//! one mutable slot and re-render on change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Identity, Page};

/// Outcome of a navigation request made while logged out.
///
/// A defined outcome, not a fault: the caller surfaces it through the
/// notification channel in place of the blocking alert it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Please login to access other pages.")]
pub struct NavigationDenied;

/// In-memory record of the current identity and active view.
///
/// Invariant: an active page other than [`Page::Login`] implies a user is
/// present. Logging out forces the active page back to Login. Not persisted;
/// a fresh process starts logged out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Session {
    user: Option<Identity>,
    active_page: Page,
    logged_in_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create a logged-out session showing the login page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current identity, if logged in.
    #[must_use]
    pub const fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    /// Whether a user is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The page most recently selected.
    ///
    /// Prefer [`Session::current_view`] when deciding what to render; the
    /// projection, not this field, accounts for the logged-out state.
    #[must_use]
    pub const fn active_page(&self) -> Page {
        self.active_page
    }

    /// When the current user logged in, if anyone is logged in.
    #[must_use]
    pub const fn logged_in_at(&self) -> Option<DateTime<Utc>> {
        self.logged_in_at
    }

    /// Log in with the identity record supplied by the identity provider.
    ///
    /// Always succeeds; lands on the profile page regardless of prior state.
    #[must_use]
    pub fn login(&self, identity: Identity) -> Self {
        if let Some(previous) = &self.user {
            tracing::debug!(previous = %previous.name, "replacing existing login");
        }
        tracing::info!(user = %identity.name, "logged in successfully");
        Self {
            user: Some(identity),
            active_page: Page::Profile,
            logged_in_at: Some(Utc::now()),
        }
    }

    /// Log out, returning to the login page from any state.
    #[must_use]
    pub fn logout(&self) -> Self {
        if let Some(user) = &self.user {
            tracing::info!(user = %user.name, "user logged out");
        }
        Self::default()
    }

    /// Request a different page.
    ///
    /// Denied while logged out, leaving the state unchanged. Any page may be
    /// requested while logged in, including re-selecting the current page
    /// (idempotent) and [`Page::Login`] itself.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationDenied`] when no user is present.
    pub fn navigate(&self, target: Page) -> Result<Self, NavigationDenied> {
        if self.user.is_none() {
            tracing::warn!(?target, "navigation denied: not logged in");
            return Err(NavigationDenied);
        }
        Ok(Self {
            active_page: target,
            ..self.clone()
        })
    }

    /// The page to render.
    ///
    /// Login whenever no user is present, and also when the active page has
    /// been set back to Login; otherwise the active page. An authenticated
    /// session whose active page is stale-set to Login keeps showing the
    /// login view until a new navigate or login occurs.
    #[must_use]
    pub fn current_view(&self) -> Page {
        if self.user.is_none() || self.active_page == Page::Login {
            Page::Login
        } else {
            self.active_page
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use prickly_pear_core::{Email, UserId};

    use super::*;
    use crate::models::UserSettings;

    fn alex() -> Identity {
        Identity {
            id: UserId::new("u123"),
            name: "Alex Doe".to_owned(),
            email: Email::parse("alex.doe@example.com").unwrap(),
            bio: "Loves building innovative testing solutions with AI.".to_owned(),
            settings: UserSettings::default(),
        }
    }

    #[test]
    fn test_initial_state_is_logged_out() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.current_view(), Page::Login);
        assert!(session.logged_in_at().is_none());
    }

    #[test]
    fn test_navigate_denied_while_logged_out() {
        let session = Session::new();
        for target in [Page::Profile, Page::Settings, Page::Login] {
            assert_eq!(session.navigate(target), Err(NavigationDenied));
        }
        // The original state is untouched.
        assert_eq!(session.active_page(), Page::Login);
        assert_eq!(session.current_view(), Page::Login);
    }

    #[test]
    fn test_login_lands_on_profile_from_any_state() {
        let fresh = Session::new().login(alex());
        assert_eq!(fresh.current_view(), Page::Profile);

        let from_settings = fresh.navigate(Page::Settings).unwrap().login(alex());
        assert_eq!(from_settings.current_view(), Page::Profile);
        assert!(from_settings.logged_in_at().is_some());
    }

    #[test]
    fn test_logout_forces_login_page() {
        let session = Session::new()
            .login(alex())
            .navigate(Page::Settings)
            .unwrap()
            .logout();
        assert!(!session.is_authenticated());
        assert_eq!(session.active_page(), Page::Login);
        assert_eq!(session.current_view(), Page::Login);
    }

    #[test]
    fn test_navigate_is_idempotent() {
        let once = Session::new().login(alex()).navigate(Page::Settings).unwrap();
        let twice = once.navigate(Page::Settings).unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice.current_view(), Page::Settings);
    }

    #[test]
    fn test_stale_login_page_still_renders_login() {
        // An authenticated session may navigate back to Login; the
        // projection keeps showing the login view.
        let session = Session::new().login(alex()).navigate(Page::Login).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.active_page(), Page::Login);
        assert_eq!(session.current_view(), Page::Login);

        // A new navigate recovers.
        let recovered = session.navigate(Page::Profile).unwrap();
        assert_eq!(recovered.current_view(), Page::Profile);
    }

    #[test]
    fn test_view_is_login_whenever_no_user_present() {
        // Property: across operation sequences, no user implies Login view.
        let mut session = Session::new();
        assert_eq!(session.current_view(), Page::Login);

        session = session.login(alex());
        session = session.logout();
        assert_eq!(session.current_view(), Page::Login);

        let _denied = session.navigate(Page::Settings);
        assert_eq!(session.current_view(), Page::Login);
    }

    #[test]
    fn test_denial_message_verbatim() {
        assert_eq!(
            NavigationDenied.to_string(),
            "Please login to access other pages."
        );
    }
}
