//! Dashboard Routes
//!
//! - GET /api/v1/stats - Landing page headline numbers
//! - GET /api/v1/dashboard/organiser
//! - GET /api/v1/dashboard/participant

use axum::Json;

use crate::dashboard::{OrganiserDashboard, ParticipantDashboard};
use crate::data;
use crate::model::PlatformStats;

/// GET /api/v1/stats
pub async fn platform_stats() -> Json<PlatformStats> {
    Json(data::platform_stats())
}

/// GET /api/v1/dashboard/organiser
pub async fn organiser() -> Json<OrganiserDashboard> {
    Json(OrganiserDashboard::mock())
}

/// GET /api/v1/dashboard/participant
pub async fn participant() -> Json<ParticipantDashboard> {
    Json(ParticipantDashboard::mock())
}
