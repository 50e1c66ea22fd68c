//! # SocialAuto
//!
//! Backend for the SocialAuto social media scheduling dashboard: the user
//! directory and session lookups the Leptos frontend (`socialauto-ui`) renders.
//!
//! ## Modules
//!
//! - [`directory`]: User directory trait with mock, SQLite and timeout implementations
//! - [`auth`]: Session lookup from request tokens
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//! - [`logging`]: Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use socialauto::directory::{MockDirectory, UserDirectory};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let directory = MockDirectory::new();
//!
//!     // Everyone Jane can chat with
//!     for user in directory.list_users(Some("1")).await? {
//!         println!("{} <{}>", user.name.unwrap_or_default(), user.email.unwrap_or_default());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod directory;
pub mod logging;

pub use api::{build_router, serve, ApiError, AppState};

pub use auth::{Session, SessionProvider, StaticSessionProvider};

pub use config::{
    ApiConfig, AuthConfig, Config, ConfigError, DirectoryBackend, DirectoryConfig, LoggingConfig,
    SessionEntry,
};

pub use directory::{
    DirectoryError, DirectoryResult, MockDirectory, SqliteDirectory, TimeoutDirectory, User,
    UserDirectory, UserStats,
};
