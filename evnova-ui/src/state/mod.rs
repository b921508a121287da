//! State Management
//!
//! Global UI state (toasts, theme) and the auth context.

pub mod auth;
pub mod global;
pub mod storage;

pub use auth::{provide_auth, use_auth, AuthContext};
pub use global::{provide_global_state, use_global, GlobalState, Theme, ToastMessage, ToastVariant};
pub use storage::LocalStorageSession;
