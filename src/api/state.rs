//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::auth::UserDirectory;
use crate::catalogue::Catalogue;
use crate::config::ApiConfig;

/// Shared application state for all handlers
pub struct AppState {
    /// Read-only hackathon list
    pub catalogue: Catalogue,
    /// Mock users; signups and role changes live here until restart
    pub directory: RwLock<UserDirectory>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// State over the built-in mock data
    pub fn new(config: ApiConfig) -> Self {
        Self::with_data(Catalogue::mock(), UserDirectory::seeded(), config)
    }

    pub fn with_data(catalogue: Catalogue, directory: UserDirectory, config: ApiConfig) -> Self {
        Self {
            catalogue,
            directory: RwLock::new(directory),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub async fn user_count(&self) -> usize {
        self.directory.read().await.len()
    }
}
