//! User Directory Routes
//!
//! Read-only endpoints over the user directory.
//!
//! - GET /api/v1/users?exclude=:id - List users, optionally leaving one out
//! - GET /api/v1/users/:id - Get a user
//! - GET /api/v1/users/:id/stats - Get a user's aggregate stats

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ListUsersQuery, UserListResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::directory::{User, UserStats};

/// GET /api/v1/users
///
/// List all users except `exclude`, sorted by name.
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListUsersQuery>,
) -> ApiResult<Json<UserListResponse>> {
    let excluded = query.exclude.as_deref().filter(|id| !id.is_empty());

    let users = state.directory.list_users(excluded).await?;

    tracing::debug!(excluded = ?excluded, count = users.len(), "Listed users");

    Ok(Json(UserListResponse {
        total: users.len(),
        users,
    }))
}

/// GET /api/v1/users/:id
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    validate_user_id(&id)?;
    Ok(Json(state.directory.get_user(&id).await?))
}

/// GET /api/v1/users/:id/stats
pub async fn get_user_stats(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserStats>> {
    validate_user_id(&id)?;
    let stats = state.directory.get_user_stats(&id).await?;

    tracing::debug!(user_id = %id, "Fetched user stats");

    Ok(Json(stats))
}

/// Validate a user id path segment
fn validate_user_id(id: &str) -> ApiResult<()> {
    if id.trim().is_empty() {
        return Err(ApiError::Validation("User id cannot be empty".to_string()));
    }

    if id.len() > 128 {
        return Err(ApiError::Validation(
            "User id exceeds maximum length of 128 characters".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_user_id() {
        assert!(validate_user_id("1").is_ok());
        assert!(validate_user_id("  ").is_err());
        assert!(validate_user_id(&"x".repeat(129)).is_err());
    }
}
