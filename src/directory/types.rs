//! Directory data types
//!
//! Users and per-user statistics as served by the user directory.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A known user of the product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque unique identifier
    pub id: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Avatar image URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl User {
    /// Create a user with only an id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            email: None,
            image: None,
        }
    }

    /// Set the display name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the contact address
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the avatar image URI
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Name used for display and sorting, if any
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

/// Aggregate counters for a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_messages: u64,
    pub total_contacts: u64,
    /// Human-readable duration, e.g. "12h 30m"
    pub active_time: String,
    /// Percentage string, e.g. "98%"
    pub response_rate: String,
}

impl UserStats {
    /// Zeroed stats shown when nothing is known about a user
    pub fn placeholder() -> Self {
        Self {
            total_messages: 0,
            total_contacts: 0,
            active_time: "0m".to_string(),
            response_rate: "0%".to_string(),
        }
    }
}

/// Sort users by name (case-insensitive, unnamed last), then by id.
pub fn sort_users(users: &mut [User]) {
    users.sort_by(|a, b| {
        let by_name = match (a.display_name(), b.display_name()) {
            (Some(x), Some(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_name.then_with(|| a.id.cmp(&b.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_users_by_name_then_id() {
        let mut users = vec![
            User::new("3").name("sarah"),
            User::new("9"),
            User::new("2").name("Alex"),
            User::new("1").name("Alex"),
            User::new("4").name("   "),
        ];
        sort_users(&mut users);

        let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "9"]);
    }

    #[test]
    fn test_user_json_omits_absent_fields() {
        let json = serde_json::to_value(User::new("7").name("Kim")).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "7", "name": "Kim" }));

        let parsed: User = serde_json::from_str(r#"{"id":"8","image":null}"#).unwrap();
        assert_eq!(parsed, User::new("8"));
    }

    #[test]
    fn test_placeholder_stats_are_zeroed() {
        let stats = UserStats::placeholder();
        assert_eq!(stats.total_messages, 0);
        assert_eq!(stats.total_contacts, 0);
        assert_eq!(stats.response_rate, "0%");
    }
}
