//! Deadline decorator for directory calls
//!
//! Wraps any [`UserDirectory`] and fails calls that exceed the deadline with
//! [`DirectoryError::DataUnavailable`]. The inner future is dropped on expiry,
//! which cancels the call.

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

use super::error::{DirectoryError, DirectoryResult};
use super::types::{User, UserStats};
use super::UserDirectory;

/// Directory wrapper enforcing a per-call timeout
pub struct TimeoutDirectory<D> {
    inner: D,
    timeout: Duration,
}

impl<D: UserDirectory> TimeoutDirectory<D> {
    pub fn new(inner: D, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = DirectoryResult<T>> + Send,
    ) -> DirectoryResult<T> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    operation,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Directory call timed out"
                );
                Err(DirectoryError::unavailable(format!(
                    "{} timed out after {}ms",
                    operation,
                    self.timeout.as_millis()
                )))
            }
        }
    }
}

#[async_trait]
impl<D: UserDirectory> UserDirectory for TimeoutDirectory<D> {
    async fn list_users(&self, excluding_user_id: Option<&str>) -> DirectoryResult<Vec<User>> {
        self.bounded("list_users", self.inner.list_users(excluding_user_id))
            .await
    }

    async fn get_user(&self, user_id: &str) -> DirectoryResult<User> {
        self.bounded("get_user", self.inner.get_user(user_id)).await
    }

    async fn get_user_stats(&self, user_id: &str) -> DirectoryResult<UserStats> {
        self.bounded("get_user_stats", self.inner.get_user_stats(user_id))
            .await
    }

    async fn health_check(&self) -> DirectoryResult<()> {
        self.bounded("health_check", self.inner.health_check()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::MockDirectory;

    /// Directory whose calls never complete in time
    struct SlowDirectory;

    #[async_trait]
    impl UserDirectory for SlowDirectory {
        async fn list_users(&self, _excluding: Option<&str>) -> DirectoryResult<Vec<User>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Vec::new())
        }

        async fn get_user(&self, user_id: &str) -> DirectoryResult<User> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(User::new(user_id))
        }

        async fn get_user_stats(&self, _user_id: &str) -> DirectoryResult<UserStats> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(UserStats::placeholder())
        }
    }

    #[tokio::test]
    async fn test_passes_through_fast_calls() {
        let directory = TimeoutDirectory::new(MockDirectory::new(), Duration::from_secs(1));

        let users = directory.list_users(Some("1")).await.unwrap();
        assert_eq!(users.len(), 2);

        let err = directory.get_user_stats("missing").await.unwrap_err();
        assert_eq!(err, DirectoryError::not_found("missing"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_calls_become_unavailable() {
        let directory = TimeoutDirectory::new(SlowDirectory, Duration::from_millis(50));

        let err = directory.list_users(None).await.unwrap_err();
        assert!(matches!(err, DirectoryError::DataUnavailable(_)));

        let err = directory.get_user_stats("1").await.unwrap_err();
        assert!(matches!(err, DirectoryError::DataUnavailable(_)));
    }
}
