//! Mock Datasets
//!
//! Static records standing in for a backend. Every caller gets a fresh
//! copy, so local edits (team request answers, new signups) never leak
//! between pages.

use chrono::NaiveDate;

use crate::model::{
    DashboardStat, DomainShare, Hackathon, HackathonMode, HackathonStatus, OrgHackathon,
    OrgHackathonStatus, ParticipantStats, PlatformStats, Registration, RegistrationStatus,
    StatIcon, TeamRequest, TeamRequestStatus, TrendPoint, UserRole,
};

/// A seeded account in the mock user directory
#[derive(Debug, Clone)]
pub struct SeedUser {
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub role: Option<UserRole>,
}

pub const SEED_USERS: &[SeedUser] = &[
    SeedUser {
        name: "Jayesh",
        email: "organiser@evnova",
        password: "password",
        role: Some(UserRole::Organiser),
    },
    SeedUser {
        name: "Vivek",
        email: "participant@evnova",
        password: "password",
        role: Some(UserRole::Participant),
    },
];

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The public hackathon catalogue
pub fn mock_hackathons() -> Vec<Hackathon> {
    vec![
        Hackathon {
            id: "1".to_string(),
            title: "AI Innovation Challenge".to_string(),
            description: "Build cutting-edge AI solutions that solve real-world problems.".to_string(),
            mode: HackathonMode::Online,
            start_date: date(2026, 3, 15),
            end_date: date(2026, 3, 17),
            registration_deadline: date(2026, 3, 10),
            venue: None,
            prize_pool: "$10,000".to_string(),
            max_team_size: 4,
            themes: strings(&["AI/ML", "Healthcare", "Education"]),
            status: HackathonStatus::Open,
            participants: 342,
            teams: 86,
            organiser: "TechCorp".to_string(),
            banner_gradient: "from-primary to-evnova-blue-glow".to_string(),
        },
        Hackathon {
            id: "2".to_string(),
            title: "Green Tech Hackathon".to_string(),
            description: "Sustainable technology solutions for a greener future.".to_string(),
            mode: HackathonMode::Offline,
            start_date: date(2026, 4, 1),
            end_date: date(2026, 4, 3),
            registration_deadline: date(2026, 3, 25),
            venue: Some("San Francisco Convention Center".to_string()),
            prize_pool: "$25,000".to_string(),
            max_team_size: 5,
            themes: strings(&["Sustainability", "CleanTech", "IoT"]),
            status: HackathonStatus::Upcoming,
            participants: 128,
            teams: 32,
            organiser: "GreenFuture Inc.".to_string(),
            banner_gradient: "from-accent to-evnova-blue-glow".to_string(),
        },
        Hackathon {
            id: "3".to_string(),
            title: "Web3 Builder Sprint".to_string(),
            description: "Decentralized apps and blockchain innovations.".to_string(),
            mode: HackathonMode::Online,
            start_date: date(2026, 2, 20),
            end_date: date(2026, 2, 22),
            registration_deadline: date(2026, 2, 18),
            venue: None,
            prize_pool: "$15,000".to_string(),
            max_team_size: 4,
            themes: strings(&["Blockchain", "DeFi", "NFT"]),
            status: HackathonStatus::Ongoing,
            participants: 560,
            teams: 140,
            organiser: "ChainLabs".to_string(),
            banner_gradient: "from-evnova-orange to-primary".to_string(),
        },
        Hackathon {
            id: "4".to_string(),
            title: "HealthTech Innovators".to_string(),
            description: "Revolutionize healthcare with technology.".to_string(),
            mode: HackathonMode::Offline,
            start_date: date(2026, 5, 10),
            end_date: date(2026, 5, 12),
            registration_deadline: date(2026, 5, 1),
            venue: Some("MIT Campus, Boston".to_string()),
            prize_pool: "$20,000".to_string(),
            max_team_size: 5,
            themes: strings(&["Healthcare", "Biotech", "AI"]),
            status: HackathonStatus::Open,
            participants: 210,
            teams: 52,
            organiser: "MedTech Labs".to_string(),
            banner_gradient: "from-secondary to-accent".to_string(),
        },
    ]
}

pub fn platform_stats() -> PlatformStats {
    PlatformStats {
        hackathons_hosted: 150,
        total_participants: 12_500,
        teams_formed: 3_200,
        prizes_awarded: "$500K+".to_string(),
    }
}

// ============================================
// ORGANISER DASHBOARD
// ============================================

pub fn dashboard_stats() -> Vec<DashboardStat> {
    let stat = |label: &str, value: u32, change: &str, icon: StatIcon| DashboardStat {
        label: label.to_string(),
        value,
        change: change.to_string(),
        icon,
    };

    vec![
        stat("Total Hackathons", 12, "+3 this month", StatIcon::Trophy),
        stat("Active Now", 3, "2 ending soon", StatIcon::Zap),
        stat("Total Participants", 2450, "+180 this week", StatIcon::Users),
        stat("Submissions", 342, "+28 today", StatIcon::FileText),
    ]
}

pub fn participation_trend() -> Vec<TrendPoint> {
    [
        ("Aug", 180, 45),
        ("Sep", 320, 80),
        ("Oct", 250, 62),
        ("Nov", 410, 103),
        ("Dec", 380, 95),
        ("Jan", 520, 130),
        ("Feb", 490, 122),
    ]
    .into_iter()
    .map(|(month, participants, teams)| TrendPoint {
        month: month.to_string(),
        participants,
        teams,
    })
    .collect()
}

pub fn domain_distribution() -> Vec<DomainShare> {
    [
        ("AI/ML", 35),
        ("Web3", 20),
        ("HealthTech", 18),
        ("FinTech", 15),
        ("IoT", 12),
    ]
    .into_iter()
    .map(|(name, value)| DomainShare {
        name: name.to_string(),
        value,
    })
    .collect()
}

pub fn org_hackathons() -> Vec<OrgHackathon> {
    let row = |id: &str,
               title: &str,
               status: OrgHackathonStatus,
               participants: u32,
               teams: u32,
               start: NaiveDate,
               end: NaiveDate| OrgHackathon {
        id: id.to_string(),
        title: title.to_string(),
        status,
        participants,
        teams,
        start_date: start,
        end_date: end,
    };

    vec![
        row("1", "AI Innovation Challenge", OrgHackathonStatus::Open, 342, 86, date(2026, 3, 15), date(2026, 3, 17)),
        row("2", "Web3 Builder Sprint", OrgHackathonStatus::Ongoing, 560, 140, date(2026, 2, 20), date(2026, 2, 22)),
        row("3", "HealthTech Innovators", OrgHackathonStatus::Draft, 0, 0, date(2026, 5, 10), date(2026, 5, 12)),
        row("4", "FinTech Disrupt 2025", OrgHackathonStatus::Completed, 890, 223, date(2025, 12, 1), date(2025, 12, 3)),
    ]
}

// ============================================
// PARTICIPANT DASHBOARD
// ============================================

pub fn my_registrations() -> Vec<Registration> {
    vec![
        Registration {
            id: "r1".to_string(),
            hackathon_id: "1".to_string(),
            hackathon_title: "AI Innovation Challenge".to_string(),
            team_name: "Neural Ninjas".to_string(),
            members: strings(&["Vivek", "Jayesh", "Sarvesh"]),
            college: "MIT".to_string(),
            skills: strings(&["Python", "TensorFlow", "React"]),
            github_repo: "https://github.com/atsarvesh/evnova".to_string(),
            status: RegistrationStatus::Registered,
            submitted_at: None,
        },
        Registration {
            id: "r2".to_string(),
            hackathon_id: "3".to_string(),
            hackathon_title: "Web3 Builder Sprint".to_string(),
            team_name: "Chain Breakers".to_string(),
            members: strings(&["Vicky", "Jay"]),
            college: "Stanford".to_string(),
            skills: strings(&["Solidity", "React", "Node.js"]),
            github_repo: "https://github.com/atsarvesh/evnova".to_string(),
            status: RegistrationStatus::Submitted,
            submitted_at: Some(date(2026, 2, 21)),
        },
    ]
}

pub fn team_requests() -> Vec<TeamRequest> {
    vec![
        TeamRequest {
            id: "t1".to_string(),
            from: "Sarvesh".to_string(),
            avatar: "S".to_string(),
            skills: strings(&["UI/UX", "Figma", "React"]),
            message: "Looking for a frontend teammate for HealthTech Innovators!".to_string(),
            status: TeamRequestStatus::Pending,
        },
        TeamRequest {
            id: "t2".to_string(),
            from: "Vipin".to_string(),
            avatar: "V".to_string(),
            skills: strings(&["Python", "ML", "Data Science"]),
            message: "Need an ML expert for AI Innovation Challenge".to_string(),
            status: TeamRequestStatus::Pending,
        },
    ]
}

pub fn participant_stats() -> ParticipantStats {
    ParticipantStats {
        hackathons_joined: 5,
        submissions: 3,
        wins: 1,
        team_requests: 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_hackathon_ids_unique() {
        let hackathons = mock_hackathons();
        let ids: HashSet<_> = hackathons.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids.len(), hackathons.len());
    }

    #[test]
    fn test_offline_hackathons_have_venue() {
        for h in mock_hackathons() {
            assert_eq!(h.venue.is_some(), h.mode == HackathonMode::Offline, "{}", h.title);
            assert!(h.registration_deadline <= h.start_date);
            assert!(h.start_date <= h.end_date);
        }
    }

    #[test]
    fn test_seed_emails_unique() {
        let emails: HashSet<_> = SEED_USERS.iter().map(|u| u.email).collect();
        assert_eq!(emails.len(), SEED_USERS.len());
    }

    #[test]
    fn test_registrations_point_at_catalogue() {
        let hackathons = mock_hackathons();
        for reg in my_registrations() {
            let h = hackathons.iter().find(|h| h.id == reg.hackathon_id).unwrap();
            assert_eq!(h.title, reg.hackathon_title);
        }
    }
}
