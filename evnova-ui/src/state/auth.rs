//! Auth Context
//!
//! Wraps the core `AuthStore` in a signal so components re-render on
//! login, logout and role changes.

use evnova::auth::{AuthError, AuthResult, AuthStore, SignupForm, UserDirectory};
use evnova::model::{User, UserRole};
use leptos::*;

use super::storage::LocalStorageSession;

#[derive(Clone, Copy)]
pub struct AuthContext {
    store: RwSignal<AuthStore<LocalStorageSession>>,
}

pub fn provide_auth() {
    let store = AuthStore::new(UserDirectory::seeded(), LocalStorageSession);
    provide_context(AuthContext {
        store: create_rw_signal(store),
    });
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

impl AuthContext {
    /// Current user (tracked)
    pub fn user(&self) -> Option<User> {
        self.store.with(|s| s.user().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.with(|s| s.is_authenticated())
    }

    pub fn role(&self) -> Option<UserRole> {
        self.store.with(|s| s.user().and_then(|u| u.role))
    }

    fn mutate<F>(&self, f: F) -> AuthResult<User>
    where
        F: FnOnce(&mut AuthStore<LocalStorageSession>) -> AuthResult<User>,
    {
        // None only once the reactive owner is gone
        self.store
            .try_update(f)
            .unwrap_or(Err(AuthError::NotAuthenticated))
    }

    pub fn login(&self, email: &str, password: &str) -> AuthResult<User> {
        self.mutate(|s| s.login(email, password).cloned())
    }

    pub fn signup(&self, form: &SignupForm) -> AuthResult<User> {
        self.mutate(|s| s.signup(form).cloned())
    }

    pub fn select_role(&self, role: UserRole) -> AuthResult<User> {
        self.mutate(|s| s.select_role(role).cloned())
    }

    pub fn logout(&self) {
        self.store.update(|s| s.logout());
    }
}
