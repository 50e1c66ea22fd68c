//! API Models
//!
//! Client-side mirrors of the SocialAuto API payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user from the directory
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[cfg(test)]
impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            email: None,
            image: None,
        }
    }

    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(id)
        }
    }
}

impl User {
    /// Name for display, falling back to the email, then the id
    pub fn label(&self) -> String {
        [self.name.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("User {}", self.id))
    }
}

/// Aggregate counters for a user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_messages: u64,
    pub total_contacts: u64,
    pub active_time: String,
    pub response_rate: String,
}

impl UserStats {
    /// Zeroed stats shown when the user has none on record
    pub fn placeholder() -> Self {
        Self {
            total_messages: 0,
            total_contacts: 0,
            active_time: "0m".to_string(),
            response_rate: "0%".to_string(),
        }
    }
}

/// The signed-in session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub issued_at: DateTime<Utc>,
}
