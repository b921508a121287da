//! Data Transfer Objects
//!
//! Request and response types for the API endpoints that aren't core
//! records already.

use serde::{Deserialize, Serialize};

use crate::catalogue::HackathonFilter;
use crate::model::{Hackathon, HackathonMode, HackathonStatus, UserRole};
use crate::wizard::HackathonDraft;

// ============================================
// HACKATHON DTOs
// ============================================

/// `GET /api/v1/hackathons` query string. Empty values mean "All".
#[derive(Debug, Default, Deserialize)]
pub struct HackathonQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl HackathonQuery {
    /// Parse into a catalogue filter
    pub fn to_filter(&self) -> Result<HackathonFilter, String> {
        let mut filter = HackathonFilter::new();
        if let Some(search) = non_empty(&self.search) {
            filter = filter.search(search);
        }
        if let Some(mode) = non_empty(&self.mode) {
            filter = filter.mode(mode.parse::<HackathonMode>()?);
        }
        if let Some(status) = non_empty(&self.status) {
            filter = filter.status(status.parse::<HackathonStatus>()?);
        }
        if let Some(domain) = non_empty(&self.domain) {
            filter = filter.domain(domain);
        }
        Ok(filter)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HackathonListResponse {
    pub hackathons: Vec<Hackathon>,
    pub total: usize,
    /// "N hackathons found"
    pub label: String,
}

/// Team registration request body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationRequest {
    pub team_name: String,
    pub members: Vec<String>,
    pub college: String,
    pub skills: Vec<String>,
    pub github_repo: String,
}

/// Wizard draft plus the publishing organiser's name
#[derive(Debug, Deserialize)]
pub struct DraftRequest {
    #[serde(flatten)]
    pub draft: HackathonDraft,
    #[serde(default)]
    pub organiser: Option<String>,
}

// ============================================
// AUTH DTOs
// ============================================

/// Signup request; `confirmPassword` defaults to `password`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub confirm_password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RoleRequest {
    pub email: String,
    pub role: UserRole,
}

// ============================================
// HEALTH DTOs
// ============================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    pub hackathons: usize,
    pub users: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
