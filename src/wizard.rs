//! Create Hackathon Wizard
//!
//! Four linear steps over a single draft. "Next" is gated on the active
//! step's required fields; publishing builds a `Hackathon` record that is
//! handed back to the caller and stored nowhere.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Hackathon, HackathonMode, HackathonStatus};

/// Theme badges offered on the Themes & Rules step
pub const SUGGESTED_THEMES: &[&str] = &[
    "AI/ML",
    "Web3",
    "Healthcare",
    "FinTech",
    "IoT",
    "Sustainability",
    "Education",
    "Gaming",
    "Cybersecurity",
    "Social Impact",
];

pub const MIN_TEAM_SIZE: u8 = 1;
pub const MAX_TEAM_SIZE: u8 = 10;
pub const DEFAULT_TEAM_SIZE: u8 = 4;

const DRAFT_BANNER: &str = "from-primary to-secondary";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BasicInfo,
    Details,
    ThemesRules,
    Review,
}

impl WizardStep {
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::BasicInfo,
            WizardStep::Details,
            WizardStep::ThemesRules,
            WizardStep::Review,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            WizardStep::BasicInfo => 0,
            WizardStep::Details => 1,
            WizardStep::ThemesRules => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Info",
            WizardStep::Details => "Details",
            WizardStep::ThemesRules => "Themes & Rules",
            WizardStep::Review => "Review",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        Self::all().get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| Self::all()[i])
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// Required fields of this step are still empty
    #[error("Fill in the required fields of {0}")]
    StepIncomplete(WizardStep),

    /// Publish attempted before reaching the Review step
    #[error("Review your hackathon before publishing")]
    NotOnReview,

    /// A date field holds something other than YYYY-MM-DD
    #[error("Invalid date for {field}: {value}")]
    InvalidDate { field: &'static str, value: String },
}

pub type WizardResult<T> = Result<T, WizardError>;

/// Form fields collected across the steps. Dates stay as entered
/// (`YYYY-MM-DD` from a date input) until publish.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct HackathonDraft {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub mode: HackathonMode,
    pub start_date: String,
    pub end_date: String,
    pub registration_deadline: String,
    pub venue: String,
    pub prize_pool: String,
    pub max_team_size: u8,
    pub themes: Vec<String>,
    pub rules: String,
}

impl Default for HackathonDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            mode: HackathonMode::Online,
            start_date: String::new(),
            end_date: String::new(),
            registration_deadline: String::new(),
            venue: String::new(),
            prize_pool: String::new(),
            max_team_size: DEFAULT_TEAM_SIZE,
            themes: Vec::new(),
            rules: String::new(),
        }
    }
}

fn filled(s: &str) -> bool {
    !s.trim().is_empty()
}

impl HackathonDraft {
    /// Whether the required fields of `step` are present
    pub fn step_complete(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::BasicInfo => filled(&self.title) && filled(&self.description),
            WizardStep::Details => {
                filled(&self.start_date)
                    && filled(&self.end_date)
                    && filled(&self.registration_deadline)
                    && filled(&self.prize_pool)
            }
            WizardStep::ThemesRules => !self.themes.is_empty(),
            WizardStep::Review => true,
        }
    }

    /// Add the theme if absent, remove it if present
    pub fn toggle_theme(&mut self, theme: &str) {
        if let Some(pos) = self.themes.iter().position(|t| t == theme) {
            self.themes.remove(pos);
        } else {
            self.themes.push(theme.to_string());
        }
    }

    pub fn has_theme(&self, theme: &str) -> bool {
        self.themes.iter().any(|t| t == theme)
    }

    /// Team size from a number input, clamped to 1..=10. Unparseable input
    /// keeps the current value.
    pub fn set_max_team_size(&mut self, raw: &str) {
        if let Ok(n) = raw.trim().parse::<i64>() {
            self.max_team_size = n.clamp(MIN_TEAM_SIZE as i64, MAX_TEAM_SIZE as i64) as u8;
        }
    }

    /// Venue only applies to in-person events
    pub fn shows_venue(&self) -> bool {
        self.mode == HackathonMode::Offline
    }

    /// Label/value pairs for the Review step
    pub fn review_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Title", self.title.clone()),
            ("Description", self.description.clone()),
            ("Type", self.mode.to_string()),
            ("Dates", format!("{} → {}", self.start_date, self.end_date)),
            ("Registration Deadline", self.registration_deadline.clone()),
        ];
        if filled(&self.venue) {
            rows.push(("Venue", self.venue.clone()));
        }
        rows.push(("Prize Pool", self.prize_pool.clone()));
        rows.push(("Max Team Size", self.max_team_size.to_string()));
        rows.push(("Themes", self.themes.join(", ")));
        if filled(&self.rules) {
            rows.push(("Rules", self.rules.clone()));
        }
        rows
    }

    /// Check every gate, returning the first incomplete step
    pub fn validate(&self) -> WizardResult<()> {
        for step in WizardStep::all() {
            if !self.step_complete(*step) {
                return Err(WizardError::StepIncomplete(*step));
            }
        }
        Ok(())
    }

    /// Build the catalogue record this draft describes
    pub fn build(&self, id: impl Into<String>, organiser: impl Into<String>) -> WizardResult<Hackathon> {
        self.validate()?;

        let parse = |field: &'static str, value: &str| {
            NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
                WizardError::InvalidDate {
                    field,
                    value: value.to_string(),
                }
            })
        };

        Ok(Hackathon {
            id: id.into(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            mode: self.mode,
            start_date: parse("start date", &self.start_date)?,
            end_date: parse("end date", &self.end_date)?,
            registration_deadline: parse("registration deadline", &self.registration_deadline)?,
            venue: (self.shows_venue() && filled(&self.venue)).then(|| self.venue.trim().to_string()),
            prize_pool: self.prize_pool.trim().to_string(),
            max_team_size: self.max_team_size.clamp(MIN_TEAM_SIZE, MAX_TEAM_SIZE),
            themes: self.themes.clone(),
            status: HackathonStatus::Upcoming,
            participants: 0,
            teams: 0,
            organiser: organiser.into(),
            banner_gradient: DRAFT_BANNER.to_string(),
        })
    }

    /// Toast shown after publishing
    pub fn published_message(&self) -> String {
        format!("\"{}\" has been published successfully.", self.title)
    }
}

/// Step cursor plus draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateHackathonWizard {
    step: WizardStep,
    pub draft: HackathonDraft,
}

impl Default for CreateHackathonWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateHackathonWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::BasicInfo,
            draft: HackathonDraft::default(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// "Next" button enabled state
    pub fn can_advance(&self) -> bool {
        !self.step.is_last() && self.draft.step_complete(self.step)
    }

    /// "Previous" button enabled state
    pub fn can_go_back(&self) -> bool {
        self.step.previous().is_some()
    }

    /// Move forward if the gate passes
    pub fn next(&mut self) -> WizardResult<WizardStep> {
        if !self.draft.step_complete(self.step) {
            return Err(WizardError::StepIncomplete(self.step));
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Move back; a no-op on the first step
    pub fn previous(&mut self) -> WizardStep {
        if let Some(prev) = self.step.previous() {
            self.step = prev;
        }
        self.step
    }

    /// Build the record from the Review step
    pub fn publish(&self, id: impl Into<String>, organiser: impl Into<String>) -> WizardResult<Hackathon> {
        if self.step != WizardStep::Review {
            return Err(WizardError::NotOnReview);
        }
        let hackathon = self.draft.build(id, organiser)?;
        tracing::info!(title = %hackathon.title, "Hackathon published");
        Ok(hackathon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> HackathonDraft {
        HackathonDraft {
            title: "Rust Rally".to_string(),
            description: "Ship something fast.".to_string(),
            mode: HackathonMode::Offline,
            start_date: "2026-06-01".to_string(),
            end_date: "2026-06-02".to_string(),
            registration_deadline: "2026-05-20".to_string(),
            venue: "Berlin".to_string(),
            prize_pool: "$5,000".to_string(),
            max_team_size: 3,
            themes: vec!["IoT".to_string()],
            rules: String::new(),
        }
    }

    #[test]
    fn test_defaults() {
        let draft = HackathonDraft::default();
        assert_eq!(draft.mode, HackathonMode::Online);
        assert_eq!(draft.max_team_size, 4);
        assert!(draft.themes.is_empty());
    }

    #[test]
    fn test_next_disabled_until_basic_info_filled() {
        let mut wizard = CreateHackathonWizard::new();
        assert!(!wizard.can_advance());
        assert_eq!(
            wizard.next(),
            Err(WizardError::StepIncomplete(WizardStep::BasicInfo))
        );

        wizard.draft.title = "Rust Rally".to_string();
        assert!(!wizard.can_advance());
        wizard.draft.description = "   ".to_string();
        assert!(!wizard.can_advance());
        wizard.draft.description = "Ship it".to_string();
        assert!(wizard.can_advance());
        assert_eq!(wizard.next(), Ok(WizardStep::Details));
    }

    #[test]
    fn test_details_gate_needs_dates_and_prize() {
        let mut draft = complete_draft();
        draft.prize_pool.clear();
        assert!(!draft.step_complete(WizardStep::Details));
        draft.prize_pool = "$1".to_string();
        draft.registration_deadline.clear();
        assert!(!draft.step_complete(WizardStep::Details));
        // Venue is optional even offline
        let mut draft = complete_draft();
        draft.venue.clear();
        assert!(draft.step_complete(WizardStep::Details));
    }

    #[test]
    fn test_themes_gate_and_toggle() {
        let mut draft = HackathonDraft::default();
        assert!(!draft.step_complete(WizardStep::ThemesRules));
        draft.toggle_theme("Gaming");
        assert!(draft.step_complete(WizardStep::ThemesRules));
        draft.toggle_theme("Gaming");
        assert!(draft.themes.is_empty());
    }

    #[test]
    fn test_walk_forward_and_back() {
        let mut wizard = CreateHackathonWizard::new();
        wizard.draft = complete_draft();
        assert!(!wizard.can_go_back());
        assert_eq!(wizard.previous(), WizardStep::BasicInfo);

        wizard.next().unwrap();
        wizard.next().unwrap();
        assert_eq!(wizard.next(), Ok(WizardStep::Review));
        assert!(!wizard.can_advance());
        assert_eq!(wizard.previous(), WizardStep::ThemesRules);
    }

    #[test]
    fn test_team_size_clamped() {
        let mut draft = HackathonDraft::default();
        draft.set_max_team_size("25");
        assert_eq!(draft.max_team_size, 10);
        draft.set_max_team_size("0");
        assert_eq!(draft.max_team_size, 1);
        draft.set_max_team_size("abc");
        assert_eq!(draft.max_team_size, 1);
        draft.set_max_team_size("6");
        assert_eq!(draft.max_team_size, 6);
    }

    #[test]
    fn test_build_clamps_raw_team_size() {
        let mut draft = complete_draft();
        draft.max_team_size = 0;
        assert_eq!(draft.build("9", "Org").unwrap().max_team_size, 1);

        draft.max_team_size = 50;
        assert_eq!(draft.build("9", "Org").unwrap().max_team_size, 10);
    }

    #[test]
    fn test_review_rows_skip_empty_optionals() {
        let draft = complete_draft();
        let labels: Vec<_> = draft.review_rows().iter().map(|(l, _)| *l).collect();
        assert!(labels.contains(&"Venue"));
        assert!(!labels.contains(&"Rules"));

        let rows = draft.review_rows();
        let dates = rows.iter().find(|(l, _)| *l == "Dates").unwrap();
        assert_eq!(dates.1, "2026-06-01 → 2026-06-02");
        let themes = rows.iter().find(|(l, _)| *l == "Themes").unwrap();
        assert_eq!(themes.1, "IoT");
    }

    #[test]
    fn test_publish_only_from_review() {
        let mut wizard = CreateHackathonWizard::new();
        wizard.draft = complete_draft();
        assert_eq!(wizard.publish("5", "Me"), Err(WizardError::NotOnReview));

        while wizard.can_advance() {
            wizard.next().unwrap();
        }
        let h = wizard.publish("5", "Me").unwrap();
        assert_eq!(h.status, HackathonStatus::Upcoming);
        assert_eq!(h.venue.as_deref(), Some("Berlin"));
        assert_eq!(h.start_date, NaiveDate::from_ymd_opt(2026, 6, 1).unwrap());
        assert_eq!(wizard.draft.published_message(), "\"Rust Rally\" has been published successfully.");
    }

    #[test]
    fn test_online_build_drops_venue() {
        let mut draft = complete_draft();
        draft.mode = HackathonMode::Online;
        assert!(draft.build("5", "Me").unwrap().venue.is_none());
    }

    #[test]
    fn test_build_rejects_bad_date() {
        let mut draft = complete_draft();
        draft.end_date = "next tuesday".to_string();
        assert!(matches!(
            draft.build("5", "Me"),
            Err(WizardError::InvalidDate { field: "end date", .. })
        ));
    }

    #[test]
    fn test_validate_reports_first_gap() {
        let mut draft = complete_draft();
        draft.themes.clear();
        draft.title.clear();
        assert_eq!(
            draft.validate(),
            Err(WizardError::StepIncomplete(WizardStep::BasicInfo))
        );
    }
}
