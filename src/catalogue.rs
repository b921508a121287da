//! Hackathon Catalogue
//!
//! Read-only lookup and filtering over the mock hackathon list. This backs
//! the browse page, the detail page and the landing page's featured row.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data;
use crate::model::{Hackathon, HackathonMode, HackathonStatus};

/// Domain chips offered on the browse page, in display order
pub const DOMAIN_FILTERS: &[&str] = &[
    "AI/ML",
    "Blockchain",
    "Healthcare",
    "Sustainability",
    "IoT",
    "DeFi",
    "Education",
    "Biotech",
    "NFT",
    "CleanTech",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("Hackathon not found: {0}")]
    NotFound(String),
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;

/// Browse page filter state. `None` means "All".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HackathonFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub mode: Option<HackathonMode>,
    #[serde(default)]
    pub status: Option<HackathonStatus>,
    #[serde(default)]
    pub domain: Option<String>,
}

impl HackathonFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set search text
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Builder method: restrict to online or offline
    pub fn mode(mut self, mode: HackathonMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Builder method: restrict to a status
    pub fn status(mut self, status: HackathonStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Builder method: restrict to a theme
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Reset to "All" everywhere
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.mode.is_none() && self.status.is_none() && self.domain.is_none()
    }

    /// All set criteria must hold
    pub fn matches(&self, h: &Hackathon) -> bool {
        if !h.matches_search(&self.search) {
            return false;
        }
        if self.mode.is_some_and(|m| h.mode != m) {
            return false;
        }
        if self.status.is_some_and(|s| h.status != s) {
            return false;
        }
        if let Some(ref domain) = self.domain {
            if !h.has_theme(domain) {
                return false;
            }
        }
        true
    }
}

/// The hackathon list with lookup and filtering
#[derive(Debug, Clone)]
pub struct Catalogue {
    hackathons: Vec<Hackathon>,
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::mock()
    }
}

impl Catalogue {
    pub fn new(hackathons: Vec<Hackathon>) -> Self {
        Self { hackathons }
    }

    /// Catalogue over the built-in mock data
    pub fn mock() -> Self {
        Self::new(data::mock_hackathons())
    }

    pub fn all(&self) -> &[Hackathon] {
        &self.hackathons
    }

    pub fn len(&self) -> usize {
        self.hackathons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hackathons.is_empty()
    }

    pub fn get(&self, id: &str) -> CatalogueResult<&Hackathon> {
        self.hackathons
            .iter()
            .find(|h| h.id == id)
            .ok_or_else(|| CatalogueError::NotFound(id.to_string()))
    }

    /// Matching hackathons in catalogue order
    pub fn filter(&self, filter: &HackathonFilter) -> Vec<&Hackathon> {
        let results: Vec<&Hackathon> = self
            .hackathons
            .iter()
            .filter(|h| filter.matches(h))
            .collect();

        tracing::debug!(
            search = %filter.search,
            mode = ?filter.mode,
            status = ?filter.status,
            domain = ?filter.domain,
            matched = results.len(),
            "Filtered catalogue"
        );

        results
    }

    /// First `n` hackathons for the landing page
    pub fn featured(&self, n: usize) -> &[Hackathon] {
        &self.hackathons[..n.min(self.hackathons.len())]
    }
}

/// "1 hackathon found" / "3 hackathons found"
pub fn results_label(count: usize) -> String {
    format!(
        "{} hackathon{} found",
        count,
        if count == 1 { "" } else { "s" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(results: &[&Hackathon]) -> Vec<String> {
        results.iter().map(|h| h.id.clone()).collect()
    }

    #[test]
    fn test_empty_filter_returns_all() {
        let catalogue = Catalogue::mock();
        let filter = HackathonFilter::new();
        assert!(filter.is_empty());
        assert_eq!(catalogue.filter(&filter).len(), 4);
    }

    #[test]
    fn test_search_title_and_description() {
        let catalogue = Catalogue::mock();
        assert_eq!(ids(&catalogue.filter(&HackathonFilter::new().search("web3"))), ["3"]);
        // "greener" only appears in a description
        assert_eq!(ids(&catalogue.filter(&HackathonFilter::new().search("GREENER"))), ["2"]);
        assert!(catalogue.filter(&HackathonFilter::new().search("quantum")).is_empty());
    }

    #[test]
    fn test_mode_and_status() {
        let catalogue = Catalogue::mock();
        let online = catalogue.filter(&HackathonFilter::new().mode(HackathonMode::Online));
        assert_eq!(ids(&online), ["1", "3"]);

        let open_offline = catalogue.filter(
            &HackathonFilter::new()
                .mode(HackathonMode::Offline)
                .status(HackathonStatus::Open),
        );
        assert_eq!(ids(&open_offline), ["4"]);
    }

    #[test]
    fn test_domain_is_exact_theme_match() {
        let catalogue = Catalogue::mock();
        assert_eq!(ids(&catalogue.filter(&HackathonFilter::new().domain("Healthcare"))), ["1", "4"]);
        // "AI" theme on #4 is not "AI/ML"
        assert_eq!(ids(&catalogue.filter(&HackathonFilter::new().domain("AI/ML"))), ["1"]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let catalogue = Catalogue::mock();
        let filter = HackathonFilter::new()
            .domain("Healthcare")
            .status(HackathonStatus::Open)
            .search("revolutionize");
        assert_eq!(ids(&catalogue.filter(&filter)), ["4"]);
    }

    #[test]
    fn test_clear() {
        let mut filter = HackathonFilter::new().search("x").domain("IoT");
        filter.clear();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_get_unknown_id() {
        let catalogue = Catalogue::mock();
        assert_eq!(catalogue.get("2").unwrap().title, "Green Tech Hackathon");
        assert_eq!(
            catalogue.get("99").unwrap_err(),
            CatalogueError::NotFound("99".to_string())
        );
    }

    #[test]
    fn test_featured_caps_at_len() {
        let catalogue = Catalogue::mock();
        assert_eq!(catalogue.featured(3).len(), 3);
        assert_eq!(catalogue.featured(10).len(), 4);
    }

    #[test]
    fn test_results_label() {
        assert_eq!(results_label(0), "0 hackathons found");
        assert_eq!(results_label(1), "1 hackathon found");
        assert_eq!(results_label(4), "4 hackathons found");
    }
}
