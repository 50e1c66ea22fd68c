//! Session Lookup
//!
//! The auth collaborator: resolves an opaque session token to the current
//! session, or to nothing. A missing session is a normal outcome, never an
//! error; it is what keeps the dashboard hidden.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::SessionEntry;
use crate::directory::{DirectoryError, User, UserDirectory};

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The signed-in user
    pub user: User,
    /// When the session was resolved
    pub issued_at: DateTime<Utc>,
}

/// Resolves the current session from a request token
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn current_session(&self, token: Option<&str>) -> Option<Session>;
}

/// Sessions configured up front as token → user id pairs
pub struct StaticSessionProvider {
    tokens: HashMap<String, String>,
    directory: Arc<dyn UserDirectory>,
}

impl StaticSessionProvider {
    pub fn new(entries: &[SessionEntry], directory: Arc<dyn UserDirectory>) -> Self {
        let tokens = entries
            .iter()
            .map(|e| (e.token.clone(), e.user_id.clone()))
            .collect();
        Self { tokens, directory }
    }

    /// Number of configured tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl SessionProvider for StaticSessionProvider {
    async fn current_session(&self, token: Option<&str>) -> Option<Session> {
        let token = token.map(str::trim).filter(|t| !t.is_empty())?;
        let user_id = self.tokens.get(token)?;

        match self.directory.get_user(user_id).await {
            Ok(user) => Some(Session {
                user,
                issued_at: Utc::now(),
            }),
            Err(DirectoryError::NotFound(_)) => {
                tracing::warn!(user_id = %user_id, "Session token maps to an unknown user");
                None
            }
            Err(e) => {
                tracing::error!(user_id = %user_id, error = %e, "Session lookup failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::MockDirectory;

    fn provider(directory: Arc<MockDirectory>) -> StaticSessionProvider {
        let entries = vec![
            SessionEntry {
                token: "demo".to_string(),
                user_id: "1".to_string(),
            },
            SessionEntry {
                token: "ghost".to_string(),
                user_id: "99".to_string(),
            },
        ];
        StaticSessionProvider::new(&entries, directory)
    }

    #[tokio::test]
    async fn test_known_token_resolves_user() {
        let sessions = provider(Arc::new(MockDirectory::new()));

        let session = sessions.current_session(Some("demo")).await.unwrap();
        assert_eq!(session.user.id, "1");
        assert_eq!(session.user.name.as_deref(), Some("Jane Cooper"));
    }

    #[tokio::test]
    async fn test_missing_or_unknown_token_has_no_session() {
        let sessions = provider(Arc::new(MockDirectory::new()));

        assert!(sessions.current_session(None).await.is_none());
        assert!(sessions.current_session(Some("")).await.is_none());
        assert!(sessions.current_session(Some("nope")).await.is_none());
        assert!(sessions.current_session(Some("ghost")).await.is_none());
    }

    #[tokio::test]
    async fn test_unavailable_directory_has_no_session() {
        let directory = Arc::new(MockDirectory::new());
        let sessions = provider(Arc::clone(&directory));
        directory.set_available(false);

        assert!(sessions.current_session(Some("demo")).await.is_none());
    }
}
