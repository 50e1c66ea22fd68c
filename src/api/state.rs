//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::auth::SessionProvider;
use crate::config::ApiConfig;
use crate::directory::UserDirectory;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// User directory behind its trait
    pub directory: Arc<dyn UserDirectory>,
    /// Session lookup
    pub sessions: Arc<dyn SessionProvider>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        sessions: Arc<dyn SessionProvider>,
        config: ApiConfig,
    ) -> Self {
        Self {
            directory,
            sessions,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
