//! Application wiring
//!
//! Builds the directory, session provider and API state from a [`Config`].

use std::sync::Arc;

use crate::api::AppState;
use crate::auth::StaticSessionProvider;
use crate::config::{Config, DirectoryBackend, DirectoryConfig};
use crate::directory::{
    DirectoryResult, MockDirectory, SqliteDirectory, TimeoutDirectory, UserDirectory,
};

/// Construct the configured user directory, wrapped in its call timeout
pub async fn build_directory(config: &DirectoryConfig) -> DirectoryResult<Arc<dyn UserDirectory>> {
    let timeout = config.call_timeout();

    let directory: Arc<dyn UserDirectory> = match config.backend {
        DirectoryBackend::Mock => {
            tracing::info!("Using mock user directory");
            Arc::new(TimeoutDirectory::new(MockDirectory::new(), timeout))
        }
        DirectoryBackend::Sqlite => {
            tracing::info!(path = %config.database_path, "Opening SQLite user directory");
            let sqlite = SqliteDirectory::open(&config.database_path)?;
            if config.seed_if_empty {
                sqlite.seed_if_empty().await?;
            }
            Arc::new(TimeoutDirectory::new(sqlite, timeout))
        }
    };

    Ok(directory)
}

/// Build the full API state
pub async fn build_state(config: &Config) -> DirectoryResult<AppState> {
    let directory = build_directory(&config.directory).await?;

    let sessions = StaticSessionProvider::new(&config.auth.sessions, Arc::clone(&directory));
    tracing::info!(tokens = sessions.len(), "Session provider ready");

    Ok(AppState::new(directory, Arc::new(sessions), config.api.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_build_mock_directory() {
        let directory = build_directory(&DirectoryConfig::default()).await.unwrap();
        assert_eq!(directory.list_users(None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_build_sqlite_directory_seeds() {
        let dir = tempdir().unwrap();
        let config = DirectoryConfig {
            backend: DirectoryBackend::Sqlite,
            database_path: dir.path().join("dir.db").to_string_lossy().to_string(),
            ..Default::default()
        };

        let directory = build_directory(&config).await.unwrap();
        assert_eq!(directory.list_users(Some("2")).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_build_state_resolves_demo_session() {
        let state = build_state(&Config::default()).await.unwrap();

        let session = state.sessions.current_session(Some("demo")).await.unwrap();
        assert_eq!(session.user.id, "1");
    }
}
