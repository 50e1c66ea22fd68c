//! SocialAuto REST API
//!
//! HTTP API layer for SocialAuto, built with Axum.
//!
//! # Endpoints
//!
//! ## Users
//! - `GET /api/v1/users?exclude=:id` - List users except one
//! - `GET /api/v1/users/:id` - Get a user
//! - `GET /api/v1/users/:id/stats` - Get a user's stats
//!
//! ## Session
//! - `GET /api/v1/session` - Current session (or null)
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use socialauto::api::{serve, AppState};
//! use socialauto::auth::StaticSessionProvider;
//! use socialauto::config::Config;
//! use socialauto::directory::MockDirectory;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let directory = Arc::new(MockDirectory::new());
//!     let sessions = Arc::new(StaticSessionProvider::new(&config.auth.sessions, directory.clone()));
//!
//!     let state = AppState::new(directory, sessions, config.api.clone());
//!     serve(state, &config.api).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // User directory routes
        .route("/users", get(routes::users::list_users))
        .route("/users/:id", get(routes::users::get_user))
        .route("/users/:id/stats", get(routes::users::get_user_stats))
        // Session route
        .route("/session", get(routes::session::current_session));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);
    let timeout = TimeoutLayer::new(state.config.request_timeout());

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(timeout)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS for the configured origins; any origin when none are configured
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("SocialAuto API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("SocialAuto API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
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
    use crate::auth::StaticSessionProvider;
    use crate::config::AuthConfig;
    use crate::directory::MockDirectory;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, Arc<MockDirectory>) {
        let directory = Arc::new(MockDirectory::new());
        let sessions = Arc::new(StaticSessionProvider::new(
            &AuthConfig::default().sessions,
            directory.clone(),
        ));

        let state = AppState::new(directory.clone(), sessions, ApiConfig::default());
        (build_router(state), directory)
    }

    async fn get(app: Router, uri: &str, token: Option<&str>) -> (StatusCode, serde_json::Value) {
        let mut request = Request::builder().uri(uri);
        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = app
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let (app, _) = create_test_app();

        let (status, _) = get(app.clone(), "/health/live", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = get(app.clone(), "/health/ready", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = get(app, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_fails_when_directory_offline() {
        let (app, directory) = create_test_app();
        directory.set_available(false);

        let (status, _) = get(app.clone(), "/health/ready", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (_, body) = get(app, "/health", None).await;
        assert_eq!(body["directory"], "error");
    }

    #[tokio::test]
    async fn test_list_users_excludes_requested_id() {
        let (app, _) = create_test_app();

        let (status, body) = get(app, "/api/v1/users?exclude=1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);

        let ids: Vec<&str> = body["users"]
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[tokio::test]
    async fn test_exclude_matches_ids_verbatim() {
        let (app, _) = create_test_app();

        let (_, body) = get(app.clone(), "/api/v1/users?exclude=", None).await;
        assert_eq!(body["total"], 3);

        // " 1" is a different opaque id from "1"
        let (_, body) = get(app, "/api/v1/users?exclude=%201", None).await;
        assert_eq!(body["total"], 3);
    }

    #[tokio::test]
    async fn test_list_users_unavailable() {
        let (app, directory) = create_test_app();
        directory.set_available(false);

        let (status, body) = get(app, "/api/v1/users", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_user_stats() {
        let (app, _) = create_test_app();

        let (status, body) = get(app.clone(), "/api/v1/users/3/stats", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_contacts"], 123);

        let (status, body) = get(app, "/api/v1/users/404/stats", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_get_user() {
        let (app, _) = create_test_app();

        let (status, body) = get(app, "/api/v1/users/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Alex Morgan");
        assert!(body.get("image").is_none());
    }

    #[tokio::test]
    async fn test_session_with_and_without_token() {
        let (app, _) = create_test_app();

        let (status, body) = get(app.clone(), "/api/v1/session", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["session"].is_null());

        let (status, body) = get(app.clone(), "/api/v1/session", Some("demo")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["session"]["user"]["id"], "1");

        let (_, body) = get(app, "/api/v1/session", Some("stolen")).await;
        assert!(body["session"].is_null());
    }

    #[test]
    fn test_cors_layer_accepts_empty_and_invalid_origins() {
        let mut config = ApiConfig::default();
        config.cors_origins.clear();
        let _ = cors_layer(&config);

        config.cors_origins.push("not a header\n".to_string());
        let _ = cors_layer(&config);
    }
}
