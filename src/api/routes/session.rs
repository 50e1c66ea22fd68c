//! Session Route
//!
//! - GET /api/v1/session - Current session, or null when signed out
//!
//! The token is read from `Authorization: Bearer <token>`, falling back to
//! `X-Session-Token`.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use std::sync::Arc;

use crate::api::dto::SessionResponse;
use crate::api::state::AppState;

pub const SESSION_HEADER: &str = "x-session-token";

/// GET /api/v1/session
pub async fn current_session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<SessionResponse> {
    let token = session_token(&headers);
    let session = state.sessions.current_session(token).await;

    tracing::debug!(
        has_token = token.is_some(),
        authenticated = session.is_some(),
        "Resolved session"
    );

    Json(SessionResponse { session })
}

/// Extract the session token from request headers
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());

    bearer.or_else(|| {
        headers
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_session_token_sources() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_token(&headers), None);

        headers.insert(SESSION_HEADER, HeaderValue::from_static("fallback"));
        assert_eq!(session_token(&headers), Some("fallback"));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer demo"));
        assert_eq!(session_token(&headers), Some("demo"));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(session_token(&headers), Some("fallback"));
    }
}
