//! Login form credentials.
//!
//! Presence validation only: both fields are required before the form is
//! handed to the identity provider. No hashing and no token handling happen
//! here; credential security lives with the provider.

use secrecy::SecretString;
use thiserror::Error;

/// Error validating the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialsError {
    /// Username or password left empty.
    #[error("Username and password are required.")]
    MissingFields,
}

/// A validated login form submission.
///
/// Implements `Debug` manually to redact the password.
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    /// Validate the login form fields.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::MissingFields`] if either field is empty.
    pub fn parse(username: &str, password: &str) -> Result<Self, CredentialsError> {
        if username.is_empty() || password.is_empty() {
            return Err(CredentialsError::MissingFields);
        }
        Ok(Self {
            username: username.to_owned(),
            password: SecretString::from(password.to_owned()),
        })
    }

    /// The submitted username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The submitted password, for handoff to the identity provider.
    #[must_use]
    pub const fn password(&self) -> &SecretString {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_parse_requires_both_fields() {
        assert_eq!(
            Credentials::parse("", "hunter2").unwrap_err(),
            CredentialsError::MissingFields
        );
        assert_eq!(
            Credentials::parse("alex", "").unwrap_err(),
            CredentialsError::MissingFields
        );
        assert_eq!(
            Credentials::parse("", "").unwrap_err(),
            CredentialsError::MissingFields
        );
    }

    #[test]
    fn test_parse_accepts_complete_form() {
        let credentials = Credentials::parse("alex", "hunter2").unwrap();
        assert_eq!(credentials.username(), "alex");
        assert_eq!(credentials.password().expose_secret(), "hunter2");
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::parse("alex", "hunter2").unwrap();
        let debug = format!("{credentials:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_error_message_verbatim() {
        assert_eq!(
            CredentialsError::MissingFields.to_string(),
            "Username and password are required."
        );
    }
}
