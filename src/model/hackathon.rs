//! Hackathon records
//!
//! Catalogue entries are read-only. The creation wizard builds a new
//! `Hackathon` on publish but nothing stores it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where the event takes place
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum HackathonMode {
    #[default]
    Online,
    Offline,
}

impl HackathonMode {
    pub fn all() -> &'static [HackathonMode] {
        &[HackathonMode::Online, HackathonMode::Offline]
    }

    /// Label with icon, as shown on the wizard toggle
    pub fn label(&self) -> &'static str {
        match self {
            HackathonMode::Online => "🌐 Online",
            HackathonMode::Offline => "🏢 Offline",
        }
    }

    /// Capitalized name used by filter chips
    pub fn title(&self) -> &'static str {
        match self {
            HackathonMode::Online => "Online",
            HackathonMode::Offline => "Offline",
        }
    }
}

impl std::fmt::Display for HackathonMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HackathonMode::Online => write!(f, "online"),
            HackathonMode::Offline => write!(f, "offline"),
        }
    }
}

impl std::str::FromStr for HackathonMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(HackathonMode::Online),
            "offline" => Ok(HackathonMode::Offline),
            _ => Err(format!("Invalid mode: {}. Use online or offline", s)),
        }
    }
}

/// Lifecycle stage of a catalogue hackathon
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HackathonStatus {
    Open,
    Upcoming,
    Ongoing,
    Completed,
}

impl HackathonStatus {
    pub fn all() -> &'static [HackathonStatus] {
        &[
            HackathonStatus::Open,
            HackathonStatus::Upcoming,
            HackathonStatus::Ongoing,
            HackathonStatus::Completed,
        ]
    }

    /// Registration is offered only while open or upcoming
    pub fn accepts_registrations(&self) -> bool {
        matches!(self, HackathonStatus::Open | HackathonStatus::Upcoming)
    }

    pub fn title(&self) -> &'static str {
        match self {
            HackathonStatus::Open => "Open",
            HackathonStatus::Upcoming => "Upcoming",
            HackathonStatus::Ongoing => "Ongoing",
            HackathonStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for HackathonStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HackathonStatus::Open => write!(f, "open"),
            HackathonStatus::Upcoming => write!(f, "upcoming"),
            HackathonStatus::Ongoing => write!(f, "ongoing"),
            HackathonStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for HackathonStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(HackathonStatus::Open),
            "upcoming" => Ok(HackathonStatus::Upcoming),
            "ongoing" => Ok(HackathonStatus::Ongoing),
            "completed" => Ok(HackathonStatus::Completed),
            _ => Err(format!(
                "Invalid status: {}. Use open, upcoming, ongoing, or completed",
                s
            )),
        }
    }
}

/// A hackathon event as displayed by the catalogue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hackathon {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub mode: HackathonMode,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub registration_deadline: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    /// Free-form, e.g. "$10,000"
    pub prize_pool: String,
    pub max_team_size: u8,
    pub themes: Vec<String>,
    pub status: HackathonStatus,
    pub participants: u32,
    pub teams: u32,
    pub organiser: String,
    /// Tailwind gradient classes for the card banner
    pub banner_gradient: String,
}

impl Hackathon {
    pub fn accepts_registrations(&self) -> bool {
        self.status.accepts_registrations()
    }

    /// Case-insensitive substring match over title and description
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        needle.is_empty()
            || self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }

    pub fn has_theme(&self, theme: &str) -> bool {
        self.themes.iter().any(|t| t == theme)
    }

    /// Start date without the year ("03-15"), as on catalogue cards
    pub fn short_start_date(&self) -> String {
        self.start_date.format("%m-%d").to_string()
    }

    /// Registrant plus invitees
    pub fn max_invitees(&self) -> usize {
        (self.max_team_size as usize).saturating_sub(1)
    }
}

/// Headline numbers on the landing page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub hackathons_hosted: u32,
    pub total_participants: u32,
    pub teams_formed: u32,
    /// Already formatted, e.g. "$500K+"
    pub prizes_awarded: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Hackathon {
        Hackathon {
            id: "9".to_string(),
            title: "Rust Rally".to_string(),
            description: "Build fast, safe systems.".to_string(),
            mode: HackathonMode::Offline,
            start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 6, 2).unwrap(),
            registration_deadline: NaiveDate::from_ymd_opt(2026, 5, 20).unwrap(),
            venue: Some("Berlin".to_string()),
            prize_pool: "$5,000".to_string(),
            max_team_size: 3,
            themes: vec!["Systems".to_string()],
            status: HackathonStatus::Ongoing,
            participants: 10,
            teams: 4,
            organiser: "Ferris Inc.".to_string(),
            banner_gradient: "from-primary to-accent".to_string(),
        }
    }

    #[test]
    fn test_serializes_original_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["type"], "offline");
        assert_eq!(value["startDate"], "2026-06-01");
        assert_eq!(value["maxTeamSize"], 3);
        assert_eq!(value["status"], "ongoing");
        assert_eq!(value["bannerGradient"], "from-primary to-accent");
        assert!(value.get("banner").is_none());
    }

    #[test]
    fn test_online_record_omits_venue() {
        let mut h = sample();
        h.venue = None;
        let value = serde_json::to_value(h).unwrap();
        assert!(value.get("venue").is_none());
    }

    #[test]
    fn test_accepts_registrations() {
        assert!(HackathonStatus::Open.accepts_registrations());
        assert!(HackathonStatus::Upcoming.accepts_registrations());
        assert!(!HackathonStatus::Ongoing.accepts_registrations());
        assert!(!HackathonStatus::Completed.accepts_registrations());
        assert!(!sample().accepts_registrations());
    }

    #[test]
    fn test_matches_search_is_case_insensitive() {
        let h = sample();
        assert!(h.matches_search(""));
        assert!(h.matches_search("RUST"));
        assert!(h.matches_search("safe sys"));
        assert!(!h.matches_search("blockchain"));
    }

    #[test]
    fn test_short_start_date_and_invitees() {
        let h = sample();
        assert_eq!(h.short_start_date(), "06-01");
        assert_eq!(h.max_invitees(), 2);
    }
}
