//! Organiser dashboard records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Icon shown on an organiser stat card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StatIcon {
    Trophy,
    Zap,
    Users,
    FileText,
}

impl StatIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            StatIcon::Trophy => "🏆",
            StatIcon::Zap => "⚡",
            StatIcon::Users => "👥",
            StatIcon::FileText => "📄",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStat {
    pub label: String,
    pub value: u32,
    /// Trend note, e.g. "+3 this month"
    pub change: String,
    pub icon: StatIcon,
}

/// One month of the participation bar chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendPoint {
    pub month: String,
    pub participants: u32,
    pub teams: u32,
}

/// One slice of the domain distribution pie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DomainShare {
    pub name: String,
    pub value: u32,
}

/// Organiser-side status; includes unpublished drafts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrgHackathonStatus {
    Draft,
    Open,
    Ongoing,
    Completed,
}

impl std::fmt::Display for OrgHackathonStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrgHackathonStatus::Draft => write!(f, "draft"),
            OrgHackathonStatus::Open => write!(f, "open"),
            OrgHackathonStatus::Ongoing => write!(f, "ongoing"),
            OrgHackathonStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Row of the "Your Hackathons" table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrgHackathon {
    pub id: String,
    pub title: String,
    pub status: OrgHackathonStatus,
    pub participants: u32,
    pub teams: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl OrgHackathon {
    /// "Mar 15, 2026 – Mar 17, 2026"
    pub fn date_range(&self) -> String {
        format!(
            "{} – {}",
            self.start_date.format("%b %-d, %Y"),
            self.end_date.format("%b %-d, %Y")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_icon_kebab_case() {
        let json = serde_json::to_string(&StatIcon::FileText).unwrap();
        assert_eq!(json, r#""file-text""#);
    }

    #[test]
    fn test_date_range() {
        let h = OrgHackathon {
            id: "1".to_string(),
            title: "AI Innovation Challenge".to_string(),
            status: OrgHackathonStatus::Open,
            participants: 342,
            teams: 86,
            start_date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 17).unwrap(),
        };
        assert_eq!(h.date_range(), "Mar 15, 2026 – Mar 17, 2026");
    }
}
