//! Crate-level error type

use thiserror::Error;

use crate::auth::AuthError;
use crate::catalogue::CatalogueError;
use crate::registration::RegistrationError;
use crate::wizard::WizardError;

/// Any failure raised by the EVNOVA core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvnovaError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

pub type EvnovaResult<T> = Result<T, EvnovaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_pass_through() {
        let err: EvnovaError = AuthError::InvalidCredentials.into();
        assert_eq!(err.to_string(), "Invalid email or password");

        let err: EvnovaError = RegistrationError::TeamNameRequired.into();
        assert_eq!(err.to_string(), "Team name is required");
    }
}
