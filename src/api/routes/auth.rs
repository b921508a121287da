//! Auth Routes
//!
//! - POST /api/v1/auth/login - Check credentials against the mock directory
//! - POST /api/v1/auth/signup - Add a user to the mock directory
//! - PUT /api/v1/auth/role - Record a user's role

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{RoleRequest, SignupRequest};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::auth::{LoginForm, SignupForm};
use crate::model::User;

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginForm>,
) -> ApiResult<Json<User>> {
    let user = state
        .directory
        .read()
        .await
        .authenticate(&req.email, &req.password)?;

    tracing::info!(user_id = %user.id, "User logged in");
    Ok(Json(user))
}

/// POST /api/v1/auth/signup
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let mut form = SignupForm::new(req.name, req.email, req.password);
    if let Some(confirm) = req.confirm_password {
        form = form.confirm(confirm);
    }

    let user = state.directory.write().await.register(&form)?;

    tracing::info!(user_id = %user.id, "User signed up");
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/v1/auth/role
pub async fn set_role(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RoleRequest>,
) -> ApiResult<Json<User>> {
    let user = state
        .directory
        .write()
        .await
        .assign_role(&req.email, req.role)?;

    tracing::info!(user_id = %user.id, role = %req.role, "Role assigned");
    Ok(Json(user))
}
