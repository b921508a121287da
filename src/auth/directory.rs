//! Mock User Directory
//!
//! In-memory stand-in for an account database. Passwords are compared in
//! plain text; there is no hashing and nothing is written anywhere.

use crate::data::SEED_USERS;
use crate::model::{User, UserRole};

use super::error::{AuthError, AuthResult};
use super::form::SignupForm;

#[derive(Debug, Clone)]
struct DirectoryEntry {
    name: String,
    email: String,
    password: String,
    role: Option<UserRole>,
}

/// Ordered list of known accounts. Emails are unique.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    entries: Vec<DirectoryEntry>,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

impl UserDirectory {
    /// Directory with no accounts
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Directory holding the demo organiser and participant
    pub fn seeded() -> Self {
        Self {
            entries: SEED_USERS
                .iter()
                .map(|u| DirectoryEntry {
                    name: u.name.to_string(),
                    email: u.email.to_string(),
                    password: u.password.to_string(),
                    role: u.role,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.entries.iter().any(|e| e.email == email)
    }

    /// Ids are 1-based positions in the directory
    fn user_at(&self, index: usize) -> Option<User> {
        self.entries.get(index).map(|e| User {
            id: (index + 1).to_string(),
            name: e.name.clone(),
            email: e.email.clone(),
            role: e.role,
        })
    }

    /// Look up the account for this email/password pair. The email is
    /// trimmed the same way `register` stores it.
    pub fn authenticate(&self, email: &str, password: &str) -> AuthResult<User> {
        let email = email.trim();
        self.entries
            .iter()
            .position(|e| e.email == email && e.password == password)
            .and_then(|index| self.user_at(index))
            .ok_or(AuthError::InvalidCredentials)
    }

    /// Add a role-less account. Runs form validation first.
    pub fn register(&mut self, form: &SignupForm) -> AuthResult<User> {
        form.validate()?;

        let email = form.email.trim();
        if self.contains_email(email) {
            return Err(AuthError::EmailExists);
        }

        self.entries.push(DirectoryEntry {
            name: form.name.trim().to_string(),
            email: email.to_string(),
            password: form.password.clone(),
            role: None,
        });

        self.user_at(self.entries.len() - 1)
            .ok_or_else(|| AuthError::UnknownUser(email.to_string()))
    }

    /// Record the role picked for an account
    pub fn assign_role(&mut self, email: &str, role: UserRole) -> AuthResult<User> {
        let email = email.trim();
        let index = self
            .entries
            .iter()
            .position(|e| e.email == email)
            .ok_or_else(|| AuthError::UnknownUser(email.to_string()))?;

        self.entries[index].role = Some(role);
        self.user_at(index)
            .ok_or_else(|| AuthError::UnknownUser(email.to_string()))
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        let email = email.trim();
        let index = self.entries.iter().position(|e| e.email == email)?;
        self.user_at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_logins() {
        let dir = UserDirectory::seeded();

        let organiser = dir.authenticate("organiser@evnova", "password").unwrap();
        assert_eq!(organiser.id, "1");
        assert_eq!(organiser.name, "Jayesh");
        assert_eq!(organiser.role, Some(UserRole::Organiser));

        let participant = dir.authenticate("participant@evnova", "password").unwrap();
        assert_eq!(participant.id, "2");
        assert_eq!(participant.role, Some(UserRole::Participant));
    }

    #[test]
    fn test_invalid_credentials() {
        let dir = UserDirectory::seeded();
        for (email, password) in [
            ("organiser@evnova", "wrong"),
            ("nobody@evnova", "password"),
            ("", ""),
        ] {
            let err = dir.authenticate(email, password).unwrap_err();
            assert_eq!(err.to_string(), "Invalid email or password");
        }
    }

    #[test]
    fn test_register_assigns_next_id_without_role() {
        let mut dir = UserDirectory::seeded();
        let user = dir
            .register(&SignupForm::new("Ada Lovelace", "ada@evnova", "engine1"))
            .unwrap();

        assert_eq!(user.id, "3");
        assert_eq!(user.role, None);
        assert_eq!(dir.len(), 3);

        // The new account can log in straight away
        let again = dir.authenticate("ada@evnova", "engine1").unwrap();
        assert_eq!(again, user);
    }

    #[test]
    fn test_login_with_padded_signup_email() {
        let mut dir = UserDirectory::seeded();
        let user = dir
            .register(&SignupForm::new("Ada", " ada@evnova ", "engine1"))
            .unwrap();
        assert_eq!(user.email, "ada@evnova");

        assert_eq!(dir.authenticate(" ada@evnova ", "engine1").unwrap(), user);
        assert_eq!(dir.authenticate("ada@evnova", "engine1").unwrap(), user);
    }

    #[test]
    fn test_register_duplicate_email() {
        let mut dir = UserDirectory::seeded();
        let err = dir
            .register(&SignupForm::new("Impostor", "organiser@evnova", "password"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Email already exists");
        assert_eq!(dir.len(), 2);
    }

    #[test]
    fn test_register_validates_before_lookup() {
        let mut dir = UserDirectory::seeded();
        let err = dir
            .register(&SignupForm::new("Impostor", "organiser@evnova", "pw").confirm("px"))
            .unwrap_err();
        assert_eq!(err, AuthError::PasswordMismatch);
    }

    #[test]
    fn test_assign_role() {
        let mut dir = UserDirectory::seeded();
        dir.register(&SignupForm::new("Ada", "ada@evnova", "engine1"))
            .unwrap();

        let user = dir.assign_role("ada@evnova", UserRole::Organiser).unwrap();
        assert_eq!(user.role, Some(UserRole::Organiser));
        assert_eq!(
            dir.find_by_email("ada@evnova").unwrap().role,
            Some(UserRole::Organiser)
        );

        assert!(matches!(
            dir.assign_role("ghost@evnova", UserRole::Participant),
            Err(AuthError::UnknownUser(_))
        ));
    }
}
