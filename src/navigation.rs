//! Route paths and redirect rules shared by the UI and its tests

use crate::model::{User, UserRole};

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const SIGNUP: &str = "/signup";
pub const FORGOT_PASSWORD: &str = "/forgot-password";
pub const SELECT_ROLE: &str = "/select-role";
pub const HACKATHONS: &str = "/hackathons";
pub const ORGANISER_DASHBOARD: &str = "/organiser/dashboard";
pub const CREATE_HACKATHON: &str = "/organiser/create-hackathon";
pub const PARTICIPANT_DASHBOARD: &str = "/participant/dashboard";
pub const COMMUNITY: &str = "/community";
pub const ABOUT: &str = "/about";

pub fn hackathon_path(id: &str) -> String {
    format!("{HACKATHONS}/{id}")
}

pub fn register_path(id: &str) -> String {
    format!("{HACKATHONS}/{id}/register")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
}

impl NavLink {
    fn new(label: &'static str, href: impl Into<String>) -> Self {
        Self {
            label,
            href: href.into(),
        }
    }
}

/// Navbar links; organisers get Dashboard right after Hackathons
pub fn nav_links(user: Option<&User>) -> Vec<NavLink> {
    let mut links = vec![NavLink::new("Hackathons", HACKATHONS)];
    if user.and_then(|u| u.role) == Some(UserRole::Organiser) {
        links.push(NavLink::new("Dashboard", ORGANISER_DASHBOARD));
    }
    links.push(NavLink::new("Community", COMMUNITY));
    links.push(NavLink::new("About", ABOUT));
    links
}

/// Where the navbar user chip leads: the user's dashboard once a role is set
pub fn user_chip_target(user: Option<&User>) -> Option<&'static str> {
    user.and_then(|u| u.role).map(|r| r.dashboard_path())
}

pub fn after_login() -> &'static str {
    HOME
}

pub fn after_signup() -> &'static str {
    SELECT_ROLE
}

pub fn after_role_selected(_role: UserRole) -> &'static str {
    HOME
}

pub fn after_logout() -> &'static str {
    HOME
}

/// Where `/select-role` bounces to, if anywhere
pub fn select_role_redirect(user: Option<&User>) -> Option<&'static str> {
    match user {
        None => Some(LOGIN),
        Some(u) if u.has_role() => Some(HOME),
        Some(_) => None,
    }
}

/// Where the Register button sends a visitor: the form, or login first
pub fn register_target(user: Option<&User>, hackathon_id: &str) -> String {
    match user {
        Some(_) => register_path(hackathon_id),
        None => LOGIN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Option<UserRole>) -> User {
        let u = User::new("1", "Jayesh", "organiser@evnova");
        match role {
            Some(r) => u.with_role(r),
            None => u,
        }
    }

    #[test]
    fn test_nav_links_by_role() {
        assert_eq!(nav_links(None).len(), 3);
        assert_eq!(nav_links(Some(&user(None))).len(), 3);

        let org = nav_links(Some(&user(Some(UserRole::Organiser))));
        assert_eq!(org[1].label, "Dashboard");
        assert_eq!(org[1].href, ORGANISER_DASHBOARD);

        let part = nav_links(Some(&user(Some(UserRole::Participant))));
        assert_eq!(part.len(), 3);
        assert!(part.iter().all(|l| l.label != "Dashboard"));
    }

    #[test]
    fn test_user_chip_reaches_either_dashboard() {
        assert_eq!(user_chip_target(None), None);
        assert_eq!(user_chip_target(Some(&user(None))), None);
        assert_eq!(
            user_chip_target(Some(&user(Some(UserRole::Participant)))),
            Some(PARTICIPANT_DASHBOARD)
        );
        assert_eq!(
            user_chip_target(Some(&user(Some(UserRole::Organiser)))),
            Some(ORGANISER_DASHBOARD)
        );
    }

    #[test]
    fn test_select_role_redirect() {
        assert_eq!(select_role_redirect(None), Some(LOGIN));
        assert_eq!(select_role_redirect(Some(&user(None))), None);
        assert_eq!(
            select_role_redirect(Some(&user(Some(UserRole::Participant)))),
            Some(HOME)
        );
    }

    #[test]
    fn test_register_target() {
        assert_eq!(register_target(None, "2"), LOGIN);
        assert_eq!(register_target(Some(&user(None)), "2"), "/hackathons/2/register");
    }

    #[test]
    fn test_redirects() {
        assert_eq!(after_login(), "/");
        assert_eq!(after_signup(), "/select-role");
        assert_eq!(after_role_selected(UserRole::Organiser), "/");
        assert_eq!(after_logout(), "/");
    }
}
