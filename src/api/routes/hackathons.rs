//! Hackathon Routes
//!
//! - GET /api/v1/hackathons - Filtered catalogue
//! - GET /api/v1/hackathons/:id - One hackathon
//! - POST /api/v1/hackathons/drafts - Validate and build a wizard draft
//! - POST /api/v1/hackathons/:id/registrations - Register a team
//!
//! Drafts and registrations are validated and echoed back, never stored.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{DraftRequest, HackathonListResponse, HackathonQuery, RegistrationRequest};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::catalogue::results_label;
use crate::model::{Hackathon, Registration};
use crate::registration::{RegistrationError, TeamRegistrationForm};

/// GET /api/v1/hackathons
pub async fn list_hackathons(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HackathonQuery>,
) -> ApiResult<Json<HackathonListResponse>> {
    let filter = query.to_filter().map_err(ApiError::Validation)?;

    let hackathons: Vec<Hackathon> = state
        .catalogue
        .filter(&filter)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(HackathonListResponse {
        total: hackathons.len(),
        label: results_label(hackathons.len()),
        hackathons,
    }))
}

/// GET /api/v1/hackathons/:id
pub async fn get_hackathon(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Hackathon>> {
    let hackathon = state.catalogue.get(&id)?;
    Ok(Json(hackathon.clone()))
}

/// POST /api/v1/hackathons/drafts
pub async fn create_draft(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DraftRequest>,
) -> ApiResult<(StatusCode, Json<Hackathon>)> {
    let id = (state.catalogue.len() + 1).to_string();
    let organiser = req.organiser.unwrap_or_else(|| "EVNOVA".to_string());

    let hackathon = req.draft.build(id, organiser)?;
    tracing::info!(title = %hackathon.title, "Draft validated");

    Ok((StatusCode::CREATED, Json(hackathon)))
}

/// POST /api/v1/hackathons/:id/registrations
///
/// Replays the form's add-member and add-skill rules over the request.
pub async fn register_team(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<RegistrationRequest>,
) -> ApiResult<(StatusCode, Json<Registration>)> {
    let hackathon = state.catalogue.get(&id)?;
    if !hackathon.accepts_registrations() {
        return Err(RegistrationError::RegistrationClosed.into());
    }

    let mut form = TeamRegistrationForm {
        team_name: req.team_name,
        college: req.college,
        github_repo: req.github_repo,
        ..Default::default()
    };
    for member in &req.members {
        form.add_member(hackathon, member)?;
    }
    for skill in &req.skills {
        form.add_skill(skill)?;
    }

    let receipt = form.submit(hackathon)?;
    Ok((StatusCode::CREATED, Json(receipt)))
}
