//! Data model
//!
//! Plain records shared by the UI, the mock API and the CLI. Field names
//! serialize in camelCase so the stored session record and API payloads
//! keep the same shape everywhere.

pub mod hackathon;
pub mod organiser;
pub mod participant;
pub mod user;

pub use hackathon::{Hackathon, HackathonMode, HackathonStatus, PlatformStats};
pub use organiser::{
    DashboardStat, DomainShare, OrgHackathon, OrgHackathonStatus, StatIcon, TrendPoint,
};
pub use participant::{
    ParticipantStats, Registration, RegistrationStatus, TeamRequest, TeamRequestStatus,
};
pub use user::{User, UserRole};
