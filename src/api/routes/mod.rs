//! API Routes
//!
//! Route handlers organized by functionality.

pub mod auth;
pub mod dashboard;
pub mod hackathons;
pub mod health;
