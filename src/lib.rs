//! # EVNOVA
//!
//! Hackathon platform core: the hackathon catalogue, mock authentication
//! with role selection, the create-hackathon wizard, team registration and
//! the dashboard view models. Everything runs on an in-memory mock dataset.
//!
//! ## Modules
//!
//! - [`model`]: domain records (users, hackathons, registrations, dashboards)
//! - [`data`]: the mock dataset
//! - [`auth`]: user directory, form validation and session persistence
//! - [`catalogue`]: hackathon lookup and filtering
//! - [`wizard`]: the four-step create-hackathon flow
//! - [`registration`]: the team registration form
//! - [`dashboard`]: organiser and participant dashboards
//! - [`navigation`]: route paths and redirect rules
//! - `api`, `config` (feature `server`): mock REST API and its configuration
//!
//! The core builds without default features so it can be used from wasm.
//!
//! ## Quick Start
//!
//! ```rust
//! use evnova::catalogue::{Catalogue, HackathonFilter};
//! use evnova::model::HackathonMode;
//!
//! let catalogue = Catalogue::mock();
//! let online = catalogue.filter(&HackathonFilter::new().mode(HackathonMode::Online));
//! assert!(!online.is_empty());
//! ```

pub mod auth;
pub mod catalogue;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod model;
pub mod navigation;
pub mod registration;
pub mod wizard;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;

pub use auth::{AuthError, AuthStore, MemorySessionStore, SessionStore, SignupForm, UserDirectory};
pub use catalogue::{Catalogue, CatalogueError, HackathonFilter};
pub use dashboard::{OrganiserDashboard, ParticipantDashboard};
pub use error::{EvnovaError, EvnovaResult};
pub use model::{Hackathon, HackathonMode, HackathonStatus, Registration, User, UserRole};
pub use registration::{RegistrationError, TeamRegistrationForm};
pub use wizard::{CreateHackathonWizard, HackathonDraft, WizardError, WizardStep};

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError, AppState};
#[cfg(feature = "server")]
pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};
