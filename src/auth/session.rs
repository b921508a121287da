//! Session persistence
//!
//! The signed-in user is mirrored to a key/value store so a page reload
//! keeps you logged in. In the browser that store is `localStorage`; tests
//! and native tools use [`MemorySessionStore`].

use crate::model::User;

/// Storage key holding the serialized user record
pub const SESSION_KEY: &str = "evnova-user";

/// Somewhere to keep the current user between page loads
pub trait SessionStore {
    /// Read the saved user, `None` when absent or unreadable
    fn load(&self) -> Option<User>;

    /// Overwrite the saved user
    fn save(&mut self, user: &User);

    /// Forget the saved user
    fn clear(&mut self);
}

/// Serialize a user for storage
pub fn encode_session(user: &User) -> Option<String> {
    match serde_json::to_string(user) {
        Ok(raw) => Some(raw),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to encode session");
            None
        }
    }
}

/// Parse a stored record. Garbage reads as signed out.
pub fn decode_session(raw: &str) -> Option<User> {
    match serde_json::from_str::<User>(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable stored session");
            None
        }
    }
}

/// Session store backed by a string slot, same encoding as the browser
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    raw: Option<String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-serialized record
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    /// The serialized record as it would sit in storage
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<User> {
        self.raw.as_deref().and_then(decode_session)
    }

    fn save(&mut self, user: &User) {
        if let Some(raw) = encode_session(user) {
            self.raw = Some(raw);
        }
    }

    fn clear(&mut self) {
        self.raw = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserRole;

    #[test]
    fn test_save_load_clear() {
        let mut store = MemorySessionStore::new();
        assert!(store.load().is_none());

        let user = User::new("2", "Vivek", "participant@evnova").with_role(UserRole::Participant);
        store.save(&user);
        assert_eq!(store.load(), Some(user));
        assert!(store.raw().unwrap().contains(r#""role":"participant""#));

        store.clear();
        assert!(store.load().is_none());
        assert!(store.raw().is_none());
    }

    #[test]
    fn test_garbage_loads_as_signed_out() {
        assert!(MemorySessionStore::with_raw("{not json").load().is_none());
        assert!(MemorySessionStore::with_raw(r#"{"id":1}"#).load().is_none());
        assert!(MemorySessionStore::with_raw(r#"{"id":"1","name":"J","email":"j@x","role":"admin"}"#)
            .load()
            .is_none());
    }
}
