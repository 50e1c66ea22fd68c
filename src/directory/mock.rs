//! In-memory mock directory
//!
//! Serves three fixed records by default. Records can be replaced or removed
//! at runtime, and the whole directory can be switched offline, which is how
//! tests simulate directory refreshes and an unreachable backend.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use super::error::{DirectoryError, DirectoryResult};
use super::types::{sort_users, User, UserStats};
use super::UserDirectory;

/// A user together with the stats served for them
#[derive(Debug, Clone)]
pub struct DirectoryRecord {
    pub user: User,
    pub stats: UserStats,
}

/// Mock user directory backed by a vector of records
pub struct MockDirectory {
    records: RwLock<Vec<DirectoryRecord>>,
    available: AtomicBool,
}

impl MockDirectory {
    /// Directory with the default three records
    pub fn new() -> Self {
        Self::with_records(default_records())
    }

    /// Directory with custom records. A repeated id replaces the earlier
    /// record, as [`MockDirectory::upsert`] does.
    pub fn with_records(records: Vec<DirectoryRecord>) -> Self {
        let mut unique = Vec::with_capacity(records.len());
        for record in records {
            upsert_record(&mut unique, record);
        }

        Self {
            records: RwLock::new(unique),
            available: AtomicBool::new(true),
        }
    }

    /// Remove a user; returns whether it was present
    pub async fn remove_user(&self, user_id: &str) -> bool {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.user.id != user_id);
        records.len() != before
    }

    /// Insert or replace a record by user id
    pub async fn upsert(&self, record: DirectoryRecord) {
        let mut records = self.records.write().await;
        upsert_record(&mut records, record);
    }

    /// Simulate the backing store going away (or coming back)
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> DirectoryResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DirectoryError::unavailable("mock directory is offline"))
        }
    }
}

fn upsert_record(records: &mut Vec<DirectoryRecord>, record: DirectoryRecord) {
    match records.iter_mut().find(|r| r.user.id == record.user.id) {
        Some(existing) => *existing = record,
        None => records.push(record),
    }
}

impl Default for MockDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for MockDirectory {
    async fn list_users(&self, excluding_user_id: Option<&str>) -> DirectoryResult<Vec<User>> {
        self.ensure_available()?;

        let records = self.records.read().await;
        let mut users: Vec<User> = records
            .iter()
            .filter(|r| Some(r.user.id.as_str()) != excluding_user_id)
            .map(|r| r.user.clone())
            .collect();
        sort_users(&mut users);

        Ok(users)
    }

    async fn get_user(&self, user_id: &str) -> DirectoryResult<User> {
        self.ensure_available()?;

        let records = self.records.read().await;
        records
            .iter()
            .find(|r| r.user.id == user_id)
            .map(|r| r.user.clone())
            .ok_or_else(|| DirectoryError::not_found(user_id))
    }

    async fn get_user_stats(&self, user_id: &str) -> DirectoryResult<UserStats> {
        self.ensure_available()?;

        let records = self.records.read().await;
        records
            .iter()
            .find(|r| r.user.id == user_id)
            .map(|r| r.stats.clone())
            .ok_or_else(|| DirectoryError::not_found(user_id))
    }
}

/// The three fixed records served by default
pub fn default_records() -> Vec<DirectoryRecord> {
    vec![
        DirectoryRecord {
            user: User::new("1")
                .name("Jane Cooper")
                .email("jane@socialauto.app")
                .image("https://i.pravatar.cc/150?u=jane"),
            stats: UserStats {
                total_messages: 1248,
                total_contacts: 86,
                active_time: "32h 15m".to_string(),
                response_rate: "96%".to_string(),
            },
        },
        DirectoryRecord {
            user: User::new("2").name("Alex Morgan").email("alex@socialauto.app"),
            stats: UserStats {
                total_messages: 732,
                total_contacts: 41,
                active_time: "18h 40m".to_string(),
                response_rate: "89%".to_string(),
            },
        },
        DirectoryRecord {
            user: User::new("3")
                .name("Sarah Lee")
                .email("sarah@socialauto.app")
                .image("https://i.pravatar.cc/150?u=sarah"),
            stats: UserStats {
                total_messages: 2051,
                total_contacts: 123,
                active_time: "45h 5m".to_string(),
                response_rate: "99%".to_string(),
            },
        },
    ]
}
