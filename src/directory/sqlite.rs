//! SQLite-backed user directory
//!
//! Schema:
//!
//! ```text
//! users(id TEXT PRIMARY KEY, name TEXT, email TEXT, image TEXT)
//! user_stats(user_id TEXT PRIMARY KEY REFERENCES users(id), total_messages INTEGER,
//!            total_contacts INTEGER, active_time TEXT, response_rate TEXT)
//! ```
//!
//! All queries run on the blocking thread pool.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};

use super::error::{DirectoryError, DirectoryResult};
use super::mock::{default_records, DirectoryRecord};
use super::types::{sort_users, User, UserStats};
use super::UserDirectory;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id    TEXT PRIMARY KEY,
    name  TEXT,
    email TEXT,
    image TEXT
);
CREATE TABLE IF NOT EXISTS user_stats (
    user_id        TEXT PRIMARY KEY REFERENCES users(id) ON DELETE CASCADE,
    total_messages INTEGER NOT NULL DEFAULT 0,
    total_contacts INTEGER NOT NULL DEFAULT 0,
    active_time    TEXT NOT NULL DEFAULT '0m',
    response_rate  TEXT NOT NULL DEFAULT '0%'
);
";

/// User directory stored in a SQLite database
#[derive(Clone)]
pub struct SqliteDirectory {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteDirectory {
    /// Open (or create) a database file and apply the schema
    pub fn open(path: impl AsRef<Path>) -> DirectoryResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DirectoryError::unavailable(format!("cannot create {:?}: {}", parent, e))
            })?;
        }

        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// In-memory database, mostly for tests
    pub fn open_in_memory() -> DirectoryResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> DirectoryResult<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Insert the default records if the users table is empty.
    /// Returns the number of records inserted.
    pub async fn seed_if_empty(&self) -> DirectoryResult<usize> {
        let count: i64 = self
            .with_conn(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM users", [], |r| r.get(0))?))
            .await?;
        if count > 0 {
            return Ok(0);
        }

        let records = default_records();
        let inserted = records.len();
        for record in records {
            self.upsert(record).await?;
        }

        tracing::info!(count = inserted, "Seeded user directory");
        Ok(inserted)
    }

    /// Insert or replace a user and their stats
    pub async fn upsert(&self, record: DirectoryRecord) -> DirectoryResult<()> {
        self.with_conn(move |conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT INTO users (id, name, email, image) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(id) DO UPDATE SET name = excluded.name,
                     email = excluded.email, image = excluded.image",
                params![record.user.id, record.user.name, record.user.email, record.user.image],
            )?;
            tx.execute(
                "INSERT INTO user_stats (user_id, total_messages, total_contacts, active_time, response_rate)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(user_id) DO UPDATE SET total_messages = excluded.total_messages,
                     total_contacts = excluded.total_contacts, active_time = excluded.active_time,
                     response_rate = excluded.response_rate",
                params![
                    record.user.id,
                    record.stats.total_messages as i64,
                    record.stats.total_contacts as i64,
                    record.stats.active_time,
                    record.stats.response_rate
                ],
            )?;
            tx.commit()?;
            Ok(())
        })
        .await
    }

    /// Delete a user; returns whether a row was removed
    pub async fn remove_user(&self, user_id: &str) -> DirectoryResult<bool> {
        let user_id = user_id.to_string();
        self.with_conn(move |conn| {
            let removed = conn.execute("DELETE FROM users WHERE id = ?1", params![user_id])?;
            Ok(removed > 0)
        })
        .await
    }

    async fn with_conn<T, F>(&self, f: F) -> DirectoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> DirectoryResult<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| DirectoryError::unavailable("directory connection poisoned"))?;
            f(&mut guard)
        })
        .await?
    }
}

fn row_to_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        image: row.get(3)?,
    })
}

#[async_trait]
impl UserDirectory for SqliteDirectory {
    async fn list_users(&self, excluding_user_id: Option<&str>) -> DirectoryResult<Vec<User>> {
        let excluded = excluding_user_id.map(str::to_string);
        let mut users = self
            .with_conn(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, name, email, image FROM users
                     WHERE ?1 IS NULL OR id != ?1",
                )?;
                let rows = stmt.query_map(params![excluded], row_to_user)?;
                let users = rows.collect::<Result<Vec<_>, _>>()?;
                Ok(users)
            })
            .await?;

        sort_users(&mut users);
        Ok(users)
    }

    async fn get_user(&self, user_id: &str) -> DirectoryResult<User> {
        let id = user_id.to_string();
        self.with_conn(move |conn| {
            let user = conn
                .query_row(
                    "SELECT id, name, email, image FROM users WHERE id = ?1",
                    params![id],
                    row_to_user,
                )
                .optional()?;
            user.ok_or_else(|| DirectoryError::not_found(id))
        })
        .await
    }

    async fn get_user_stats(&self, user_id: &str) -> DirectoryResult<UserStats> {
        let id = user_id.to_string();
        self.with_conn(move |conn| {
            let stats = conn.query_row(
                "SELECT total_messages, total_contacts, active_time, response_rate
                 FROM user_stats WHERE user_id = ?1",
                params![id],
                |row| {
                    Ok(UserStats {
                        total_messages: row.get::<_, i64>(0)?.max(0) as u64,
                        total_contacts: row.get::<_, i64>(1)?.max(0) as u64,
                        active_time: row.get(2)?,
                        response_rate: row.get(3)?,
                    })
                },
            )
            .optional()?;
            stats.ok_or_else(|| DirectoryError::not_found(id))
        })
        .await
    }

    async fn health_check(&self) -> DirectoryResult<()> {
        self.with_conn(|conn| {
            conn.query_row("SELECT 1", [], |_| Ok(()))?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn seeded() -> SqliteDirectory {
        let directory = SqliteDirectory::open_in_memory().unwrap();
        assert_eq!(directory.seed_if_empty().await.unwrap(), 3);
        directory
    }

    #[tokio::test]
    async fn test_seed_only_once() {
        let directory = seeded().await;
        assert_eq!(directory.seed_if_empty().await.unwrap(), 0);
        assert_eq!(directory.list_users(None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_list_users_excludes_caller() {
        let directory = seeded().await;

        for excluded in ["1", "2", "3"] {
            let users = directory.list_users(Some(excluded)).await.unwrap();
            assert_eq!(users.len(), 2);
            assert!(users.iter().all(|u| u.id != excluded));
        }
    }

    #[tokio::test]
    async fn test_optional_fields_round_trip_as_none() {
        let directory = SqliteDirectory::open_in_memory().unwrap();
        directory
            .upsert(DirectoryRecord {
                user: User::new("x"),
                stats: UserStats::placeholder(),
            })
            .await
            .unwrap();

        let user = directory.get_user("x").await.unwrap();
        assert_eq!(user, User::new("x"));
    }

    #[tokio::test]
    async fn test_stats_not_found_after_removal() {
        let directory = seeded().await;

        assert_eq!(directory.get_user_stats("3").await.unwrap().total_contacts, 123);
        assert!(directory.remove_user("3").await.unwrap());

        let err = directory.get_user_stats("3").await.unwrap_err();
        assert_eq!(err, DirectoryError::not_found("3"));
    }

    #[tokio::test]
    async fn test_persists_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("directory.db");

        {
            let directory = SqliteDirectory::open(&path).unwrap();
            directory.seed_if_empty().await.unwrap();
        }

        let reopened = SqliteDirectory::open(&path).unwrap();
        assert_eq!(reopened.seed_if_empty().await.unwrap(), 0);
        assert!(reopened.health_check().await.is_ok());
        let user = reopened.get_user("1").await.unwrap();
        assert_eq!(user.name.as_deref(), Some("Jane Cooper"));
    }
}
