//! EVNOVA mock REST API
//!
//! Serves the mock dataset over HTTP for local development and the CLI.
//! Nothing is persisted: signups and role changes are lost at restart.
//!
//! # Endpoints
//!
//! ## Hackathons
//! - `GET /api/v1/hackathons` - Filtered catalogue (`search`, `mode`, `status`, `domain`)
//! - `GET /api/v1/hackathons/:id` - One hackathon
//! - `POST /api/v1/hackathons/drafts` - Validate a create-hackathon draft
//! - `POST /api/v1/hackathons/:id/registrations` - Register a team
//!
//! ## Auth
//! - `POST /api/v1/auth/login`
//! - `POST /api/v1/auth/signup`
//! - `PUT /api/v1/auth/role`
//!
//! ## Dashboards
//! - `GET /api/v1/stats`
//! - `GET /api/v1/dashboard/organiser`
//! - `GET /api/v1/dashboard/participant`
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use evnova::api::{serve, AppState};
//! use evnova::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let state = AppState::new(config.api.clone());
//!     serve(state, &config.api).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let api_routes = Router::new()
        // Hackathon routes
        .route("/hackathons", get(routes::hackathons::list_hackathons))
        .route("/hackathons/drafts", post(routes::hackathons::create_draft))
        .route("/hackathons/:id", get(routes::hackathons::get_hackathon))
        .route(
            "/hackathons/:id/registrations",
            post(routes::hackathons::register_team),
        )
        // Auth routes
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/signup", post(routes::auth::signup))
        .route("/auth/role", put(routes::auth::set_role))
        // Dashboard routes
        .route("/stats", get(routes::dashboard::platform_stats))
        .route("/dashboard/organiser", get(routes::dashboard::organiser))
        .route("/dashboard/participant", get(routes::dashboard::participant));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Allow the configured origins, or anything when none are configured
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::permissive().allow_origin(origins)
    }
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("EVNOVA API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("EVNOVA API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        build_router(AppState::new(ApiConfig::default()))
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn send_json(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        for uri in ["/health/live", "/health/ready", "/health"] {
            let response = create_test_app().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }

        let response = create_test_app().oneshot(get("/health")).await.unwrap();
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["users"], 2);
    }

    #[tokio::test]
    async fn test_list_hackathons() {
        let app = create_test_app();
        let response = app.oneshot(get("/api/v1/hackathons")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["total"], 4);
        assert_eq!(body["label"], "4 hackathons found");
    }

    #[tokio::test]
    async fn test_list_hackathons_filtered() {
        let app = create_test_app();
        let response = app
            .oneshot(get("/api/v1/hackathons?mode=offline&status=&domain=Healthcare"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        for h in body["hackathons"].as_array().unwrap() {
            assert_eq!(h["type"], "offline");
        }
    }

    #[tokio::test]
    async fn test_list_hackathons_bad_mode() {
        let app = create_test_app();
        let response = app
            .oneshot(get("/api/v1/hackathons?mode=hybrid"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_hackathon() {
        let response = create_test_app()
            .oneshot(get("/api/v1/hackathons/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["id"], "1");

        let response = create_test_app()
            .oneshot(get("/api/v1/hackathons/999"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_create_draft() {
        let draft = r#"{
            "title": "Rust Rally",
            "description": "Build fast things",
            "type": "online",
            "startDate": "2026-06-01",
            "endDate": "2026-06-02",
            "registrationDeadline": "2026-05-20",
            "prizePool": "$5,000",
            "themes": ["IoT"]
        }"#;
        let response = create_test_app()
            .oneshot(send_json("POST", "/api/v1/hackathons/drafts", draft))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = json_body(response).await;
        assert_eq!(body["status"], "upcoming");
        assert_eq!(body["maxTeamSize"], 4);
    }

    #[tokio::test]
    async fn test_create_draft_clamps_team_size() {
        for (size, expected) in [(0, 1), (50, 10)] {
            let draft = format!(
                r#"{{"title": "T", "description": "D", "startDate": "2026-06-01",
                "endDate": "2026-06-02", "registrationDeadline": "2026-05-20",
                "prizePool": "$1", "themes": ["IoT"], "maxTeamSize": {size}}}"#
            );
            let response = create_test_app()
                .oneshot(send_json("POST", "/api/v1/hackathons/drafts", &draft))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
            assert_eq!(json_body(response).await["maxTeamSize"], expected, "size {size}");
        }
    }

    #[tokio::test]
    async fn test_create_draft_missing_themes() {
        let draft = r#"{"title": "T", "description": "D", "startDate": "2026-06-01",
            "endDate": "2026-06-02", "registrationDeadline": "2026-05-20", "prizePool": "$1"}"#;
        let response = create_test_app()
            .oneshot(send_json("POST", "/api/v1/hackathons/drafts", draft))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_register_team() {
        let body = r#"{"teamName": "Byte Club", "members": ["a@x.io"], "skills": ["Rust"]}"#;
        let response = create_test_app()
            .oneshot(send_json("POST", "/api/v1/hackathons/1/registrations", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let receipt = json_body(response).await;
        assert_eq!(receipt["status"], "registered");
        assert_eq!(receipt["teamName"], "Byte Club");
    }

    #[tokio::test]
    async fn test_register_team_duplicate_skill() {
        let body = r#"{"teamName": "Byte Club", "skills": ["Rust", "Rust"]}"#;
        let response = create_test_app()
            .oneshot(send_json("POST", "/api/v1/hackathons/1/registrations", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_register_team_unknown_hackathon() {
        let body = r#"{"teamName": "Byte Club"}"#;
        let response = create_test_app()
            .oneshot(send_json("POST", "/api/v1/hackathons/999/registrations", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_register_team_closed_hackathon() {
        // "3" is ongoing; members are not looked at once registration is closed
        let body = r#"{"teamName": "Byte Club", "members": ["a", "b", "c", "d", "e"]}"#;
        let response = create_test_app()
            .oneshot(send_json("POST", "/api/v1/hackathons/3/registrations", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Registration is closed for this hackathon");
    }

    #[tokio::test]
    async fn test_register_team_member_cap() {
        // Hackathon "1" allows 4 per team: the registrant plus 3 invitees
        let full = r#"{"teamName": "Byte Club", "members": ["a", "b", "c"]}"#;
        let response = create_test_app()
            .oneshot(send_json("POST", "/api/v1/hackathons/1/registrations", full))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(json_body(response).await["members"].as_array().unwrap().len(), 3);

        let over = r#"{"teamName": "Byte Club", "members": ["a", "b", "c", "d"]}"#;
        let response = create_test_app()
            .oneshot(send_json("POST", "/api/v1/hackathons/1/registrations", over))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Team is full (4 members max)");
    }

    #[tokio::test]
    async fn test_login() {
        let ok = r#"{"email": "organiser@evnova", "password": "password"}"#;
        let response = create_test_app()
            .oneshot(send_json("POST", "/api/v1/auth/login", ok))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["role"], "organiser");

        let bad = r#"{"email": "organiser@evnova", "password": "nope"}"#;
        let response = create_test_app()
            .oneshot(send_json("POST", "/api/v1/auth/login", bad))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
        assert_eq!(body["error"]["message"], "Invalid email or password");
    }

    #[tokio::test]
    async fn test_signup_then_role() {
        let app = create_test_app();

        let signup = r#"{"name": "Asha Rao", "email": "asha@evnova", "password": "secret1"}"#;
        let response = app
            .clone()
            .oneshot(send_json("POST", "/api/v1/auth/signup", signup))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let user = json_body(response).await;
        assert_eq!(user["id"], "3");
        assert!(user["role"].is_null());

        let response = app
            .clone()
            .oneshot(send_json("POST", "/api/v1/auth/signup", signup))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let role = r#"{"email": "asha@evnova", "role": "participant"}"#;
        let response = app
            .oneshot(send_json("PUT", "/api/v1/auth/role", role))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["role"], "participant");
    }

    #[tokio::test]
    async fn test_signup_validation() {
        let short = r#"{"name": "A", "email": "a@b", "password": "123"}"#;
        let response = create_test_app()
            .oneshot(send_json("POST", "/api/v1/auth/signup", short))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let mismatch =
            r#"{"name": "A", "email": "a@b", "password": "123456", "confirmPassword": "654321"}"#;
        let response = create_test_app()
            .oneshot(send_json("POST", "/api/v1/auth/signup", mismatch))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["error"]["message"], "Passwords don't match");
    }

    #[tokio::test]
    async fn test_role_unknown_user() {
        let role = r#"{"email": "ghost@evnova", "role": "organiser"}"#;
        let response = create_test_app()
            .oneshot(send_json("PUT", "/api/v1/auth/role", role))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_dashboards() {
        let response = create_test_app().oneshot(get("/api/v1/stats")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = create_test_app()
            .oneshot(get("/api/v1/dashboard/organiser"))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["stats"].as_array().unwrap().len(), 4);

        let response = create_test_app()
            .oneshot(get("/api/v1/dashboard/participant"))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["teamRequests"].as_array().unwrap().len(), 2);
    }
}
