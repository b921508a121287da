//! Login and signup form payloads

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::{AuthError, AuthResult};

/// Minimum password length accepted at signup
pub const MIN_PASSWORD_LEN: usize = 6;

/// Same acceptance as a browser `type="email"` input: something@something
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+$";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Form with matching password and confirmation
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let password = password.into();
        Self {
            name: name.into(),
            email: email.into(),
            confirm_password: password.clone(),
            password,
        }
    }

    /// Builder method: set a distinct confirmation
    pub fn confirm(mut self, confirm_password: impl Into<String>) -> Self {
        self.confirm_password = confirm_password.into();
        self
    }

    /// Field checks that run before the directory is consulted.
    ///
    /// Order matters: presence, email shape, confirmation, then length.
    pub fn validate(&self) -> AuthResult<()> {
        if self.name.trim().is_empty() {
            return Err(AuthError::Validation("Name is required".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(AuthError::Validation("Email is required".to_string()));
        }
        let re = Regex::new(EMAIL_PATTERN)
            .map_err(|_| AuthError::Validation("Email check unavailable".to_string()))?;
        if !re.is_match(self.email.trim()) {
            return Err(AuthError::Validation(
                "Enter a valid email address".to_string(),
            ));
        }
        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        assert_eq!(SignupForm::new("Ada", "ada@evnova", "secret1").validate(), Ok(()));
    }

    #[test]
    fn test_required_fields() {
        let err = SignupForm::new("  ", "ada@evnova", "secret1").validate().unwrap_err();
        assert_eq!(err.to_string(), "Name is required");

        let err = SignupForm::new("Ada", "", "secret1").validate().unwrap_err();
        assert_eq!(err.to_string(), "Email is required");
    }

    #[test]
    fn test_email_shape() {
        let err = SignupForm::new("Ada", "ada.evnova", "secret1").validate().unwrap_err();
        assert_eq!(err.to_string(), "Enter a valid email address");

        // Browser email inputs accept addresses without a TLD, like the seed accounts
        assert!(SignupForm::new("Ada", "ada@evnova", "secret1").validate().is_ok());
    }

    #[test]
    fn test_mismatch_checked_before_length() {
        let err = SignupForm::new("Ada", "ada@evnova", "abc")
            .confirm("abd")
            .validate()
            .unwrap_err();
        assert_eq!(err, AuthError::PasswordMismatch);
        assert_eq!(err.to_string(), "Passwords don't match");
    }

    #[test]
    fn test_password_too_short() {
        let err = SignupForm::new("Ada", "ada@evnova", "abcde").validate().unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
    }
}
