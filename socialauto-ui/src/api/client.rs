//! HTTP API Client
//!
//! Functions for communicating with the SocialAuto REST API. Every request is
//! aborted after [`REQUEST_TIMEOUT_MS`].

use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::state::models::{Session, User, UserStats};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8082/api/v1";

/// Deadline for a single API request
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

const API_URL_KEY: &str = "socialauto_api_url";
const SESSION_TOKEN_KEY: &str = "socialauto_session_token";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = read_storage(API_URL_KEY).unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    write_storage(API_URL_KEY, Some(url));
}

/// Session token remembered from the last sign-in
pub fn stored_session_token() -> Option<String> {
    read_storage(SESSION_TOKEN_KEY).filter(|t| !t.trim().is_empty())
}

/// Persist (or remove) the session token
pub fn store_session_token(token: Option<&str>) {
    write_storage(SESSION_TOKEN_KEY, token);
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read_storage(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

fn write_storage(key: &str, value: Option<&str>) {
    if let Some(storage) = local_storage() {
        let _ = match value {
            Some(v) => storage.set_item(key, v),
            None => storage.remove_item(key),
        };
    }
}

// ============ Errors ============

/// Why an API call produced no data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network failure, timeout, server error or unreadable response
    #[error("{0}")]
    Unavailable(String),

    /// The API answered 404
    #[error("Not found")]
    NotFound,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorDetail {
    message: String,
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
}

#[derive(Debug, serde::Deserialize)]
pub struct SessionResponse {
    pub session: Option<Session>,
}

// ============ API Functions ============

/// Fetch every user except `exclude`
pub async fn fetch_users(exclude: Option<&str>) -> Result<Vec<User>, FetchError> {
    let mut request = Request::get(&format!("{}/users", get_api_base()));
    if let Some(id) = exclude {
        request = request.query([("exclude", id)]);
    }

    let result: UserListResponse = send_json(request).await?;
    Ok(result.users)
}

/// Fetch a user's stats; unknown users get placeholder stats
pub async fn fetch_user_stats(user_id: &str) -> Result<UserStats, FetchError> {
    let request = Request::get(&stats_url(&get_api_base(), user_id));
    stats_or_placeholder(send_json(request).await)
}

/// Resolve the current session. Any failure counts as signed out.
pub async fn fetch_session(token: Option<String>) -> Option<Session> {
    let token = token.filter(|t| !t.trim().is_empty())?;

    let request = Request::get(&format!("{}/session", get_api_base()))
        .header("Authorization", &format!("Bearer {}", token));

    match send_json::<SessionResponse>(request).await {
        Ok(response) => response.session,
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to fetch session: {}", e).into());
            None
        }
    }
}

/// Stats endpoint for a user; the id is percent-encoded as one path segment
pub fn stats_url(api_base: &str, user_id: &str) -> String {
    format!("{}/users/{}/stats", api_base, urlencoding::encode(user_id))
}

/// Map a missing-stats answer to zeroed placeholder stats
pub fn stats_or_placeholder(
    result: Result<UserStats, FetchError>,
) -> Result<UserStats, FetchError> {
    match result {
        Err(FetchError::NotFound) => Ok(UserStats::placeholder()),
        other => other,
    }
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, FetchError> {
    // Aborts the request when the deadline passes; dropping it cancels the timer
    let controller = web_sys::AbortController::new().ok();
    let _deadline = controller
        .clone()
        .map(|c| Timeout::new(REQUEST_TIMEOUT_MS, move || c.abort()));
    let signal = controller.as_ref().map(|c| c.signal());

    let response = request
        .abort_signal(signal.as_ref())
        .send()
        .await
        .map_err(|e| FetchError::Unavailable(format!("Network error: {}", e)))?;

    if response.status() == 404 {
        return Err(FetchError::NotFound);
    }

    if !response.ok() {
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.error.message,
            Err(_) => format!("Request failed with status {}", response.status()),
        };
        return Err(FetchError::Unavailable(message));
    }

    response
        .json()
        .await
        .map_err(|e| FetchError::Unavailable(format!("Parse error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_stats_become_placeholder() {
        assert_eq!(
            stats_or_placeholder(Err(FetchError::NotFound)),
            Ok(UserStats::placeholder())
        );

        let unavailable = Err(FetchError::Unavailable("timeout".to_string()));
        assert_eq!(stats_or_placeholder(unavailable.clone()), unavailable);
    }

    #[test]
    fn test_stats_url_encodes_user_id() {
        assert_eq!(stats_url(DEFAULT_API_BASE, "3"), "http://localhost:8082/api/v1/users/3/stats");
        assert_eq!(
            stats_url(DEFAULT_API_BASE, "a/b?c#d"),
            "http://localhost:8082/api/v1/users/a%2Fb%3Fc%23d/stats"
        );
    }

    #[test]
    fn test_error_body_parses() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"error":{"code":"SERVICE_UNAVAILABLE","message":"Service unavailable: offline"},"request_id":"x"}"#,
        )
        .unwrap();
        assert_eq!(body.error.message, "Service unavailable: offline");
    }
}
