//! Team registration form
//!
//! The registrant counts as a team member, so invitees are capped at
//! `max_team_size - 1`. Submitting produces a receipt; nothing is persisted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Hackathon, Registration, RegistrationStatus};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Team name is required")]
    TeamNameRequired,

    #[error("Registration is closed for this hackathon")]
    RegistrationClosed,

    #[error("Team is full ({max} members max)")]
    TeamFull { max: u8 },

    #[error("Skill already added: {0}")]
    DuplicateSkill(String),

    #[error("Entry cannot be empty")]
    EmptyEntry,
}

pub type RegistrationResult<T> = Result<T, RegistrationError>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamRegistrationForm {
    pub team_name: String,
    pub members: Vec<String>,
    pub college: String,
    pub skills: Vec<String>,
    pub github_repo: String,
}

impl TeamRegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether another invitee fits next to the registrant
    pub fn can_add_member(&self, hackathon: &Hackathon) -> bool {
        self.members.len() < hackathon.max_invitees()
    }

    pub fn add_member(&mut self, hackathon: &Hackathon, name: &str) -> RegistrationResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistrationError::EmptyEntry);
        }
        if !self.can_add_member(hackathon) {
            return Err(RegistrationError::TeamFull {
                max: hackathon.max_team_size,
            });
        }
        self.members.push(name.to_string());
        Ok(())
    }

    pub fn remove_member(&mut self, index: usize) {
        if index < self.members.len() {
            self.members.remove(index);
        }
    }

    pub fn add_skill(&mut self, skill: &str) -> RegistrationResult<()> {
        let skill = skill.trim();
        if skill.is_empty() {
            return Err(RegistrationError::EmptyEntry);
        }
        if self.skills.iter().any(|s| s == skill) {
            return Err(RegistrationError::DuplicateSkill(skill.to_string()));
        }
        self.skills.push(skill.to_string());
        Ok(())
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|s| s != skill);
    }

    /// Validate and build the receipt
    pub fn submit(&self, hackathon: &Hackathon) -> RegistrationResult<Registration> {
        if !hackathon.accepts_registrations() {
            return Err(RegistrationError::RegistrationClosed);
        }
        let team_name = self.team_name.trim();
        if team_name.is_empty() {
            return Err(RegistrationError::TeamNameRequired);
        }
        if self.members.len() > hackathon.max_invitees() {
            return Err(RegistrationError::TeamFull {
                max: hackathon.max_team_size,
            });
        }

        tracing::info!(team = team_name, hackathon = %hackathon.id, "Team registered");

        Ok(Registration {
            id: format!("reg-{}-{}", hackathon.id, slug(team_name)),
            hackathon_id: hackathon.id.clone(),
            hackathon_title: hackathon.title.clone(),
            team_name: team_name.to_string(),
            members: self.members.clone(),
            college: self.college.trim().to_string(),
            skills: self.skills.clone(),
            github_repo: self.github_repo.trim().to_string(),
            status: RegistrationStatus::Registered,
            submitted_at: None,
        })
    }
}

/// Toast description after a successful submit
pub fn success_message(receipt: &Registration) -> String {
    format!(
        "Team \"{}\" registered for {}",
        receipt.team_name, receipt.hackathon_title
    )
}

fn slug(name: &str) -> String {
    name.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;
    use crate::model::HackathonStatus;

    fn open_hackathon() -> Hackathon {
        let mut h = Catalogue::mock().all()[0].clone();
        h.status = HackathonStatus::Open;
        h.max_team_size = 4;
        h
    }

    #[test]
    fn test_member_cap_leaves_room_for_registrant() {
        let h = open_hackathon();
        let mut form = TeamRegistrationForm::new();
        for i in 0..3 {
            form.add_member(&h, &format!("m{i}@x.io")).unwrap();
        }
        assert!(!form.can_add_member(&h));
        assert_eq!(
            form.add_member(&h, "late@x.io"),
            Err(RegistrationError::TeamFull { max: 4 })
        );

        form.remove_member(0);
        assert!(form.can_add_member(&h));
        assert_eq!(form.members, vec!["m1@x.io", "m2@x.io"]);
    }

    #[test]
    fn test_members_are_trimmed_and_non_empty() {
        let h = open_hackathon();
        let mut form = TeamRegistrationForm::new();
        assert_eq!(form.add_member(&h, "   "), Err(RegistrationError::EmptyEntry));
        form.add_member(&h, "  a@b.c ").unwrap();
        assert_eq!(form.members, vec!["a@b.c"]);
    }

    #[test]
    fn test_skills_deduplicated() {
        let mut form = TeamRegistrationForm::new();
        form.add_skill("Rust").unwrap();
        assert_eq!(
            form.add_skill(" Rust "),
            Err(RegistrationError::DuplicateSkill("Rust".to_string()))
        );
        assert_eq!(form.add_skill(""), Err(RegistrationError::EmptyEntry));
        form.add_skill("Go").unwrap();
        form.remove_skill("Rust");
        assert_eq!(form.skills, vec!["Go"]);
    }

    #[test]
    fn test_submit_requires_team_name() {
        let h = open_hackathon();
        let mut form = TeamRegistrationForm::new();
        form.team_name = "  ".to_string();
        let err = form.submit(&h).unwrap_err();
        assert_eq!(err.to_string(), "Team name is required");
    }

    #[test]
    fn test_submit_builds_receipt() {
        let h = open_hackathon();
        let mut form = TeamRegistrationForm::new();
        form.team_name = " Byte Club ".to_string();
        form.add_skill("Rust").unwrap();
        let receipt = form.submit(&h).unwrap();
        assert_eq!(receipt.status, RegistrationStatus::Registered);
        assert_eq!(receipt.team_name, "Byte Club");
        assert_eq!(receipt.hackathon_id, h.id);
        assert_eq!(
            success_message(&receipt),
            format!("Team \"Byte Club\" registered for {}", h.title)
        );
    }

    #[test]
    fn test_closed_hackathon_rejects() {
        let mut h = open_hackathon();
        h.status = HackathonStatus::Completed;
        let mut form = TeamRegistrationForm::new();
        form.team_name = "Late".to_string();
        assert_eq!(form.submit(&h), Err(RegistrationError::RegistrationClosed));
    }
}
