//! Authentication
//!
//! Mock login and signup over an in-memory user directory, with the signed
//! in user mirrored to a session store.
//!
//! - **directory**: the mock account list
//! - **form**: login/signup payloads and field validation
//! - **session**: the `SessionStore` seam and its JSON encoding
//! - **store**: `AuthStore`, the auth context state
//! - **error**: user-facing error messages
//!
//! # Example
//!
//! ```rust
//! use evnova::auth::{AuthStore, MemorySessionStore, SignupForm, UserDirectory};
//! use evnova::model::UserRole;
//!
//! let mut auth = AuthStore::new(UserDirectory::seeded(), MemorySessionStore::new());
//! auth.signup(&SignupForm::new("Ada", "ada@evnova", "engine1")).unwrap();
//! auth.select_role(UserRole::Organiser).unwrap();
//! assert_eq!(auth.user().unwrap().id, "3");
//! ```

pub mod directory;
pub mod error;
pub mod form;
pub mod session;
pub mod store;

pub use directory::UserDirectory;
pub use error::{AuthError, AuthResult};
pub use form::{LoginForm, SignupForm, MIN_PASSWORD_LEN};
pub use session::{decode_session, encode_session, MemorySessionStore, SessionStore, SESSION_KEY};
pub use store::AuthStore;
