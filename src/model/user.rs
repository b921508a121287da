//! User account types
//!
//! A `User` is the record held by the auth context and mirrored to the
//! session store. Role is optional: a freshly signed-up user has none until
//! they pick one on the role selection page.

use serde::{Deserialize, Serialize};

/// The two mutually exclusive roles a user can pick after signup
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Creates hackathons, manages submissions and participants
    Organiser,
    /// Browses hackathons, forms teams and submits projects
    Participant,
}

impl UserRole {
    /// Get all roles for iteration
    pub fn all() -> &'static [UserRole] {
        &[UserRole::Organiser, UserRole::Participant]
    }

    /// Display title used on role cards
    pub fn title(&self) -> &'static str {
        match self {
            UserRole::Organiser => "Organiser",
            UserRole::Participant => "Participant",
        }
    }

    /// Short pitch shown under the role title
    pub fn description(&self) -> &'static str {
        match self {
            UserRole::Organiser => {
                "Create hackathons, manage submissions, track participants, and declare winners."
            }
            UserRole::Participant => {
                "Browse hackathons, form teams, submit projects, and build your portfolio."
            }
        }
    }

    /// Route of the role's dashboard
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            UserRole::Organiser => "/organiser/dashboard",
            UserRole::Participant => "/participant/dashboard",
        }
    }

    /// Confirmation shown after picking this role ("You're now an organiser!")
    pub fn confirmation(&self) -> String {
        let article = match self {
            UserRole::Organiser => "an",
            UserRole::Participant => "a",
        };
        format!("You're now {} {}!", article, self)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Organiser => write!(f, "organiser"),
            UserRole::Participant => write!(f, "participant"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "organiser" | "organizer" => Ok(UserRole::Organiser),
            "participant" => Ok(UserRole::Participant),
            _ => Err(format!(
                "Invalid role: {}. Use organiser or participant",
                s
            )),
        }
    }
}

/// The authenticated user record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// `None` until the user picks a role
    #[serde(default)]
    pub role: Option<UserRole>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: None,
        }
    }

    /// Builder method: set role
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    /// First word of the display name
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }

    /// Avatar initial, `'U'` when the name is empty
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('U')
    }

    pub fn has_role(&self) -> bool {
        self.role.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let user = User::new("1", "Jayesh", "organiser@evnova").with_role(UserRole::Organiser);
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(
            json,
            r#"{"id":"1","name":"Jayesh","email":"organiser@evnova","role":"organiser"}"#
        );
    }

    #[test]
    fn test_missing_role_is_none() {
        let user: User =
            serde_json::from_str(r#"{"id":"3","name":"Ada","email":"ada@x","role":null}"#).unwrap();
        assert_eq!(user.role, None);

        let user: User = serde_json::from_str(r#"{"id":"3","name":"Ada","email":"ada@x"}"#).unwrap();
        assert!(!user.has_role());
    }

    #[test]
    fn test_first_name_and_initial() {
        let user = User::new("3", "Ada Lovelace", "ada@x");
        assert_eq!(user.first_name(), "Ada");
        assert_eq!(user.initial(), 'A');

        let nameless = User::new("4", "", "anon@x");
        assert_eq!(nameless.first_name(), "");
        assert_eq!(nameless.initial(), 'U');
    }

    #[test]
    fn test_role_confirmation_article() {
        assert_eq!(UserRole::Organiser.confirmation(), "You're now an organiser!");
        assert_eq!(UserRole::Participant.confirmation(), "You're now a participant!");
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("Organiser".parse::<UserRole>(), Ok(UserRole::Organiser));
        assert_eq!("participant".parse::<UserRole>(), Ok(UserRole::Participant));
        assert!("judge".parse::<UserRole>().is_err());
    }
}
