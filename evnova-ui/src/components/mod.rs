//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod badge;
pub mod footer;
pub mod hackathon_card;
pub mod nav;
pub mod stat_card;
pub mod toast;

pub use badge::{StatusBadge, ThemeBadge};
pub use footer::Footer;
pub use hackathon_card::HackathonCard;
pub use nav::Nav;
pub use stat_card::StatCard;
pub use toast::Toast;
