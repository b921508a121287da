//! EVNOVA mock API server
//!
//! Run with: cargo run --bin evnova-api
//!
//! # Configuration
//!
//! Reads `config.toml` from the usual locations (see `evnova config`), then:
//! - `EVNOVA_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `EVNOVA_API_PORT`: Port to listen on (default: 8083)
//! - `EVNOVA_LOG_LEVEL`: Log level when `RUST_LOG` is unset (default: info)
//! - `EVNOVA_LOG_FORMAT`: `pretty` or `json` (default: pretty)
//! - `RUST_LOG`: Full tracing filter, overrides the log level

use evnova::api::{serve, AppState};
use evnova::config::{Config, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config warnings go to stderr until the configured subscriber is up
    let config = Config::load_default_logged();
    init_tracing(&config.logging);

    tracing::info!("Starting EVNOVA API server v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config.api.clone());
    tracing::info!(
        hackathons = state.catalogue.len(),
        users = state.user_count().await,
        "Mock data loaded"
    );

    serve(state, &config.api).await?;

    tracing::info!("EVNOVA API server stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("evnova={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
