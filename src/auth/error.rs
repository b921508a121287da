//! Auth error types
//!
//! `Display` strings are shown to the user verbatim in toasts.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No directory entry with this email/password pair
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signup email already in the directory
    #[error("Email already exists")]
    EmailExists,

    #[error("Passwords don't match")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    /// Missing or malformed form field
    #[error("{0}")]
    Validation(String),

    /// Operation needs a signed-in user
    #[error("You need to log in first")]
    NotAuthenticated,

    /// Role change for an email the directory doesn't know
    #[error("Unknown user: {0}")]
    UnknownUser(String),
}

pub type AuthResult<T> = Result<T, AuthError>;
