//! Browser local storage
//!
//! Backs the session (`evnova-user`) and the theme (`evnova-theme`).

use evnova::auth::{decode_session, encode_session, SessionStore, SESSION_KEY};
use evnova::model::User;
use wasm_bindgen::JsValue;

pub const THEME_KEY: &str = "evnova-theme";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn get_item(key: &str) -> Option<String> {
    storage()?.get_item(key).ok().flatten()
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = storage() {
        if storage.set_item(key, value).is_err() {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "Could not write {key} to local storage"
            )));
        }
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(key);
    }
}

/// Session persisted under `evnova-user`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSession;

impl SessionStore for LocalStorageSession {
    fn load(&self) -> Option<User> {
        let raw = get_item(SESSION_KEY)?;
        let user = decode_session(&raw);
        if user.is_none() {
            web_sys::console::warn_1(&JsValue::from_str("Ignoring malformed stored session"));
        }
        user
    }

    fn save(&mut self, user: &User) {
        if let Some(raw) = encode_session(user) {
            set_item(SESSION_KEY, &raw);
        }
    }

    fn clear(&mut self) {
        remove_item(SESSION_KEY);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use evnova::model::UserRole;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_session_round_trip() {
        let mut session = LocalStorageSession;
        session.clear();
        assert!(session.load().is_none());

        let user = User::new("u-7", "Grace Hopper", "grace@evnova.dev").with_role(UserRole::Organiser);
        session.save(&user);
        assert_eq!(session.load(), Some(user));

        session.clear();
        assert!(session.load().is_none());
        assert!(get_item(SESSION_KEY).is_none());
    }

    #[wasm_bindgen_test]
    fn test_garbage_session_loads_as_none() {
        set_item(SESSION_KEY, "{not json");
        assert!(LocalStorageSession.load().is_none());
        remove_item(SESSION_KEY);
    }
}
