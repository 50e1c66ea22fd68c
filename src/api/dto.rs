//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::auth::Session;
use crate::directory::User;

/// Query string for `GET /api/v1/users`
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    /// Id to leave out of the result, usually the caller's own
    #[serde(default)]
    pub exclude: Option<String>,
}

/// User list response
#[derive(Debug, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub total: usize,
}

/// Current session response; `session` is null when signed out
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session: Option<Session>,
}

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub directory: String,
    pub uptime_seconds: u64,
    pub version: String,
}
