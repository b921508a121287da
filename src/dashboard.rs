//! Dashboard view models
//!
//! Both dashboards are assembled from the mock dataset. The participant
//! dashboard owns its team requests so Accept/Decline stay local.

use serde::{Deserialize, Serialize};

use crate::data;
use crate::model::{
    DashboardStat, DomainShare, OrgHackathon, ParticipantStats, Registration, TeamRequest,
    TrendPoint, User,
};

/// Format a count with thousands separators ("2,450")
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Pie slice with its share of the total
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DomainSlice {
    pub name: String,
    pub value: u32,
    pub percent: u32,
}

/// Rounded percentages that always sum to 100 (largest remainder).
/// An empty or all-zero distribution yields all zeros.
pub fn domain_percentages(shares: &[DomainShare]) -> Vec<DomainSlice> {
    let total: u64 = shares.iter().map(|s| s.value as u64).sum();
    if total == 0 {
        return shares
            .iter()
            .map(|s| DomainSlice {
                name: s.name.clone(),
                value: s.value,
                percent: 0,
            })
            .collect();
    }

    let mut floors: Vec<u32> = Vec::with_capacity(shares.len());
    let mut remainders: Vec<(usize, u64)> = Vec::with_capacity(shares.len());
    for (i, share) in shares.iter().enumerate() {
        let scaled = share.value as u64 * 100;
        floors.push((scaled / total) as u32);
        remainders.push((i, scaled % total));
    }

    let assigned: u32 = floors.iter().sum();
    remainders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    for (i, _) in remainders.iter().take(100u32.saturating_sub(assigned) as usize) {
        floors[*i] += 1;
    }

    shares
        .iter()
        .zip(floors)
        .map(|(s, percent)| DomainSlice {
            name: s.name.clone(),
            value: s.value,
            percent,
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganiserDashboard {
    pub stats: Vec<DashboardStat>,
    pub trend: Vec<TrendPoint>,
    pub domains: Vec<DomainSlice>,
    pub hackathons: Vec<OrgHackathon>,
}

impl OrganiserDashboard {
    pub fn mock() -> Self {
        Self {
            stats: data::dashboard_stats(),
            trend: data::participation_trend(),
            domains: domain_percentages(&data::domain_distribution()),
            hackathons: data::org_hackathons(),
        }
    }

    /// Tallest bar in the trend chart, for scaling
    pub fn trend_peak(&self) -> u32 {
        self.trend
            .iter()
            .map(|p| p.participants.max(p.teams))
            .max()
            .unwrap_or(0)
    }
}

/// Label and formatted value for a participant stat card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatCard {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDashboard {
    pub stats: ParticipantStats,
    pub registrations: Vec<Registration>,
    pub team_requests: Vec<TeamRequest>,
}

impl ParticipantDashboard {
    pub fn mock() -> Self {
        Self {
            stats: data::participant_stats(),
            registrations: data::my_registrations(),
            team_requests: data::team_requests(),
        }
    }

    pub fn stat_cards(&self) -> Vec<StatCard> {
        let card = |label: &str, value: u32| StatCard {
            label: label.to_string(),
            value: format_count(value),
        };
        vec![
            card("Hackathons Joined", self.stats.hackathons_joined),
            card("Submissions", self.stats.submissions),
            card("Wins", self.stats.wins),
            card("Team Requests", self.stats.team_requests),
        ]
    }

    /// Accept or decline a request by id. Returns whether anything changed.
    pub fn respond(&mut self, request_id: &str, accept: bool) -> bool {
        self.team_requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .map(|r| r.respond(accept))
            .unwrap_or(false)
    }

    pub fn pending_requests(&self) -> usize {
        self.team_requests.iter().filter(|r| r.is_pending()).count()
    }
}

/// "Welcome back, Vivek 👋"
pub fn greeting(user: Option<&User>) -> String {
    let name = user
        .map(|u| u.first_name())
        .filter(|n| !n.is_empty())
        .unwrap_or("Participant");
    format!("Welcome back, {name} 👋")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TeamRequestStatus, UserRole};

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(342), "342");
        assert_eq!(format_count(2450), "2,450");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_mock_percentages_sum_to_100() {
        let dash = OrganiserDashboard::mock();
        let sum: u32 = dash.domains.iter().map(|d| d.percent).sum();
        assert_eq!(sum, 100);
        assert_eq!(dash.domains[0].percent, 35);
    }

    #[test]
    fn test_uneven_percentages_sum_to_100() {
        let shares: Vec<DomainShare> = ["a", "b", "c"]
            .iter()
            .map(|n| DomainShare {
                name: n.to_string(),
                value: 1,
            })
            .collect();
        let slices = domain_percentages(&shares);
        let percents: Vec<u32> = slices.iter().map(|s| s.percent).collect();
        assert_eq!(percents, vec![34, 33, 33]);
    }

    #[test]
    fn test_zero_total() {
        let shares = vec![DomainShare {
            name: "x".to_string(),
            value: 0,
        }];
        assert_eq!(domain_percentages(&shares)[0].percent, 0);
        assert!(domain_percentages(&[]).is_empty());
    }

    #[test]
    fn test_trend_peak() {
        assert_eq!(OrganiserDashboard::mock().trend_peak(), 520);
    }

    #[test]
    fn test_greeting_fallback() {
        assert_eq!(greeting(None), "Welcome back, Participant 👋");
        let user = User::new("2", "Vivek Kumar", "participant@evnova").with_role(UserRole::Participant);
        assert_eq!(greeting(Some(&user)), "Welcome back, Vivek 👋");
    }

    #[test]
    fn test_respond_is_local() {
        let mut dash = ParticipantDashboard::mock();
        assert_eq!(dash.pending_requests(), 2);
        assert!(dash.respond("t1", true));
        assert!(!dash.respond("t1", false));
        assert!(!dash.respond("missing", true));
        assert_eq!(dash.team_requests[0].status, TeamRequestStatus::Accepted);
        assert_eq!(dash.pending_requests(), 1);

        // A fresh mock is unaffected
        assert_eq!(ParticipantDashboard::mock().pending_requests(), 2);
    }

    #[test]
    fn test_stat_cards() {
        let cards = ParticipantDashboard::mock().stat_cards();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].value, "5");
    }
}
