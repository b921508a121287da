//! Auth Store
//!
//! Holds the current user and applies login, signup, logout and role
//! selection against the user directory. Every change is mirrored to the
//! session store.

use crate::model::{User, UserRole};

use super::directory::UserDirectory;
use super::error::{AuthError, AuthResult};
use super::form::SignupForm;
use super::session::SessionStore;

pub struct AuthStore<S: SessionStore> {
    directory: UserDirectory,
    session: S,
    user: Option<User>,
}

impl<S: SessionStore> AuthStore<S> {
    /// Create a store, restoring any user already saved in the session
    pub fn new(directory: UserDirectory, session: S) -> Self {
        let user = session.load();
        if let Some(ref u) = user {
            tracing::debug!(user_id = %u.id, "Restored session");
        }
        Self {
            directory,
            session,
            user,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    fn persist(&mut self, user: Option<User>) {
        match user {
            Some(ref u) => self.session.save(u),
            None => self.session.clear(),
        }
        self.user = user;
    }

    pub fn login(&mut self, email: &str, password: &str) -> AuthResult<&User> {
        let user = self.directory.authenticate(email, password).map_err(|e| {
            tracing::info!(email = %email, "Login rejected");
            e
        })?;

        tracing::info!(user_id = %user.id, role = ?user.role, "User logged in");
        self.persist(Some(user));
        self.user.as_ref().ok_or(AuthError::NotAuthenticated)
    }

    pub fn signup(&mut self, form: &SignupForm) -> AuthResult<&User> {
        let user = self.directory.register(form)?;

        tracing::info!(user_id = %user.id, "Account created");
        self.persist(Some(user));
        self.user.as_ref().ok_or(AuthError::NotAuthenticated)
    }

    pub fn logout(&mut self) {
        if let Some(ref u) = self.user {
            tracing::info!(user_id = %u.id, "User logged out");
        }
        self.persist(None);
    }

    /// Set the current user's role. Fails without touching anything when
    /// nobody is signed in.
    pub fn select_role(&mut self, role: UserRole) -> AuthResult<&User> {
        let mut user = self.user.clone().ok_or(AuthError::NotAuthenticated)?;
        user.role = Some(role);

        // A restored session may belong to an account this directory never saw
        if let Err(e) = self.directory.assign_role(&user.email, role) {
            tracing::debug!(error = %e, "Role not mirrored to directory");
        }

        tracing::info!(user_id = %user.id, role = %role, "Role selected");
        self.persist(Some(user));
        self.user.as_ref().ok_or(AuthError::NotAuthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::MemorySessionStore;

    fn store() -> AuthStore<MemorySessionStore> {
        AuthStore::new(UserDirectory::seeded(), MemorySessionStore::new())
    }

    #[test]
    fn test_login_persists_session() {
        let mut auth = store();
        assert!(!auth.is_authenticated());

        let user = auth.login("organiser@evnova", "password").unwrap().clone();
        assert!(auth.is_authenticated());
        assert_eq!(auth.session().load(), Some(user));
    }

    #[test]
    fn test_failed_login_keeps_state() {
        let mut auth = store();
        let err = auth.login("organiser@evnova", "nope").unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
        assert!(auth.user().is_none());
        assert!(auth.session().raw().is_none());
    }

    #[test]
    fn test_signup_then_select_role() {
        let mut auth = store();
        let user = auth
            .signup(&SignupForm::new("Ada", "ada@evnova", "engine1"))
            .unwrap();
        assert_eq!(user.role, None);

        let user = auth.select_role(UserRole::Participant).unwrap().clone();
        assert_eq!(user.role, Some(UserRole::Participant));
        assert_eq!(auth.session().load().unwrap().role, Some(UserRole::Participant));
        assert_eq!(
            auth.directory().find_by_email("ada@evnova").unwrap().role,
            Some(UserRole::Participant)
        );
    }

    #[test]
    fn test_signup_existing_email() {
        let mut auth = store();
        let err = auth
            .signup(&SignupForm::new("Vivek", "participant@evnova", "password"))
            .unwrap_err();
        assert_eq!(err, AuthError::EmailExists);
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_select_role_requires_user() {
        let mut auth = store();
        assert_eq!(
            auth.select_role(UserRole::Organiser).unwrap_err(),
            AuthError::NotAuthenticated
        );
        assert!(auth.session().raw().is_none());
    }

    #[test]
    fn test_logout_clears_session() {
        let mut auth = store();
        auth.login("participant@evnova", "password").unwrap();
        auth.logout();
        assert!(!auth.is_authenticated());
        assert!(auth.session().load().is_none());
    }

    #[test]
    fn test_restores_saved_session() {
        let mut session = MemorySessionStore::new();
        let saved = User::new("7", "Grace", "grace@evnova");
        session.save(&saved);

        let mut auth = AuthStore::new(UserDirectory::seeded(), session);
        assert_eq!(auth.user(), Some(&saved));

        // Unknown to the directory, but the role still sticks to the session
        let user = auth.select_role(UserRole::Organiser).unwrap();
        assert_eq!(user.role, Some(UserRole::Organiser));
    }
}
