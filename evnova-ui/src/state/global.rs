//! Global Application State
//!
//! Toast queue and colour theme, shared through context.

use leptos::*;

use super::storage::{get_item, set_item, THEME_KEY};

const SUCCESS_TIMEOUT_MS: u32 = 3000;
const ERROR_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

impl ToastVariant {
    fn timeout_ms(self) -> u32 {
        match self {
            ToastVariant::Success => SUCCESS_TIMEOUT_MS,
            ToastVariant::Error => ERROR_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Stored value, dark unless "light" was saved
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Visible toasts, oldest first
    pub toasts: RwSignal<Vec<ToastMessage>>,
    /// Colour theme, mirrored to local storage and the `<html>` class
    pub theme: RwSignal<Theme>,
    next_toast_id: StoredValue<u64>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let theme = Theme::parse(get_item(THEME_KEY).as_deref());
    apply_theme_class(theme);

    provide_context(GlobalState {
        toasts: create_rw_signal(Vec::new()),
        theme: create_rw_signal(theme),
        next_toast_id: store_value(0),
    });
}

pub fn use_global() -> GlobalState {
    expect_context::<GlobalState>()
}

fn apply_theme_class(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let classes = root.class_list();
        let _ = match theme {
            Theme::Dark => classes.add_1("dark"),
            Theme::Light => classes.remove_1("dark"),
        };
    }
}

impl GlobalState {
    fn push_toast(&self, title: &str, description: Option<&str>, variant: ToastVariant) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(ToastMessage {
                id,
                title: title.to_string(),
                description: description.map(str::to_string),
                variant,
            })
        });

        let toasts = self.toasts;
        gloo_timers::callback::Timeout::new(variant.timeout_ms(), move || {
            toasts.update(|t| t.retain(|m| m.id != id));
        })
        .forget();
    }

    /// Show a success toast (auto-clears after 3 s)
    pub fn show_success(&self, title: &str, description: Option<&str>) {
        self.push_toast(title, description, ToastVariant::Success);
    }

    /// Show an error toast (auto-clears after 5 s)
    pub fn show_error(&self, title: &str, description: Option<&str>) {
        web_sys::console::error_1(&title.into());
        self.push_toast(title, description, ToastVariant::Error);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|m| m.id != id));
    }

    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        set_item(THEME_KEY, next.as_str());
        apply_theme_class(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults_to_dark() {
        assert_eq!(Theme::parse(None), Theme::Dark);
        assert_eq!(Theme::parse(Some("nonsense")), Theme::Dark);
        assert_eq!(Theme::parse(Some("light")), Theme::Light);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
    }

    #[test]
    fn test_toast_timeouts() {
        assert_eq!(ToastVariant::Success.timeout_ms(), 3000);
        assert_eq!(ToastVariant::Error.timeout_ms(), 5000);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    // run_in_browser is configured once, in state::storage
    fn root_is_dark() -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|root| root.class_list().contains("dark"))
            .unwrap_or(false)
    }

    #[wasm_bindgen_test]
    fn test_theme_class_follows_toggle() {
        apply_theme_class(Theme::Light);
        assert!(!root_is_dark());

        apply_theme_class(Theme::Light.toggled());
        assert!(root_is_dark());

        apply_theme_class(Theme::Dark.toggled());
        assert!(!root_is_dark());
    }
}
