//! User Directory
//!
//! The only data-fetching boundary of SocialAuto: the list of known users and
//! their aggregate statistics.
//!
//! - **types**: `User`, `UserStats` and the deterministic ordering
//! - **mock**: three fixed records, used by default
//! - **sqlite**: SQLite-backed implementation
//! - **timeout**: decorator bounding every call with a deadline
//! - **error**: error types
//!
//! Consumers hold an `Arc<dyn UserDirectory>` and never name a concrete
//! implementation.
//!
//! # Example
//!
//! ```rust,no_run
//! use socialauto::directory::{MockDirectory, UserDirectory};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let directory = MockDirectory::new();
//!
//!     let others = directory.list_users(Some("1")).await?;
//!     let stats = directory.get_user_stats("2").await?;
//!
//!     println!("{} contacts, {} messages", others.len(), stats.total_messages);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod mock;
pub mod sqlite;
pub mod timeout;
pub mod types;

pub use error::{DirectoryError, DirectoryResult};
pub use mock::MockDirectory;
pub use sqlite::SqliteDirectory;
pub use timeout::TimeoutDirectory;
pub use types::{sort_users, User, UserStats};

use async_trait::async_trait;

/// Read-only access to the user directory
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// All known users except `excluding_user_id`, sorted by name then id
    async fn list_users(&self, excluding_user_id: Option<&str>) -> DirectoryResult<Vec<User>>;

    /// A single user by id
    async fn get_user(&self, user_id: &str) -> DirectoryResult<User>;

    /// Aggregate counters for a user
    async fn get_user_stats(&self, user_id: &str) -> DirectoryResult<UserStats>;

    /// Verify the backing store is reachable
    async fn health_check(&self) -> DirectoryResult<()> {
        self.list_users(None).await.map(|_| ())
    }
}
