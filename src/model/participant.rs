//! Participant dashboard records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Progress of a team through a hackathon
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Registered,
    Submitted,
    Shortlisted,
    Winner,
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistrationStatus::Registered => write!(f, "registered"),
            RegistrationStatus::Submitted => write!(f, "submitted"),
            RegistrationStatus::Shortlisted => write!(f, "shortlisted"),
            RegistrationStatus::Winner => write!(f, "winner"),
        }
    }
}

/// A team's registration for a hackathon
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    pub hackathon_id: String,
    pub hackathon_title: String,
    pub team_name: String,
    pub members: Vec<String>,
    pub college: String,
    pub skills: Vec<String>,
    pub github_repo: String,
    pub status: RegistrationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<NaiveDate>,
}

impl Registration {
    pub fn has_repo(&self) -> bool {
        !self.github_repo.trim().is_empty()
    }

    /// "Team: Neural Ninjas • 3 members"
    pub fn team_summary(&self) -> String {
        format!("Team: {} • {} members", self.team_name, self.members.len())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TeamRequestStatus {
    Pending,
    Accepted,
    Rejected,
}

/// An invitation from another participant to team up
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamRequest {
    pub id: String,
    pub from: String,
    pub avatar: String,
    pub skills: Vec<String>,
    pub message: String,
    pub status: TeamRequestStatus,
}

impl TeamRequest {
    pub fn is_pending(&self) -> bool {
        self.status == TeamRequestStatus::Pending
    }

    /// Accept or decline. Only pending requests change; answers are final.
    pub fn respond(&mut self, accept: bool) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.status = if accept {
            TeamRequestStatus::Accepted
        } else {
            TeamRequestStatus::Rejected
        };
        true
    }
}

/// Counters on the participant dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantStats {
    pub hackathons_joined: u32,
    pub submissions: u32,
    pub wins: u32,
    pub team_requests: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TeamRequest {
        TeamRequest {
            id: "t9".to_string(),
            from: "Grace".to_string(),
            avatar: "G".to_string(),
            skills: vec!["COBOL".to_string()],
            message: "Join us".to_string(),
            status: TeamRequestStatus::Pending,
        }
    }

    #[test]
    fn test_respond_only_once() {
        let mut req = request();
        assert!(req.respond(true));
        assert_eq!(req.status, TeamRequestStatus::Accepted);

        assert!(!req.respond(false));
        assert_eq!(req.status, TeamRequestStatus::Accepted);
    }

    #[test]
    fn test_decline() {
        let mut req = request();
        assert!(req.respond(false));
        assert_eq!(req.status, TeamRequestStatus::Rejected);
        assert!(!req.is_pending());
    }

    #[test]
    fn test_submitted_at_round_trips_as_date() {
        let json = r#"{
            "id": "r2", "hackathonId": "3", "hackathonTitle": "Web3 Builder Sprint",
            "teamName": "Chain Breakers", "members": ["Vicky", "Jay"], "college": "Stanford",
            "skills": [], "githubRepo": "", "status": "submitted", "submittedAt": "2026-02-21"
        }"#;
        let reg: Registration = serde_json::from_str(json).unwrap();
        assert_eq!(reg.submitted_at, NaiveDate::from_ymd_opt(2026, 2, 21));
        assert_eq!(reg.team_summary(), "Team: Chain Breakers • 2 members");
        assert!(!reg.has_repo());
    }
}
