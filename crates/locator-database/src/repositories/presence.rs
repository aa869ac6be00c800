//! Presence repository implementation.

use async_trait::async_trait;
use tracing::debug;

use locator_core::error::{AppError, ErrorKind};
use locator_core::result::AppResult;
use locator_entity::presence::{PresenceChange, UserPresenceRecord};

use crate::pool::PresencePool;
use crate::store::{ConditionalWrite, PresenceStore};

const SELECT_COLUMNS: &str =
    "username, full_name, is_in_office, room, room_history, last_present_date";

/// PostgreSQL-backed presence store.
#[derive(Debug, Clone)]
pub struct PgPresenceRepository {
    pool: PresencePool,
}

impl PgPresenceRepository {
    /// Create a new presence repository.
    pub fn new(pool: PresencePool) -> Self {
        Self { pool }
    }

    async fn exists(&self, username: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM presence_users WHERE username = $1)",
        )
        .bind(username)
        .fetch_one(self.pool.inner())
        .await
        .map_err(|e| store_error("Failed to check user existence", e))
    }
}

#[async_trait]
impl PresenceStore for PgPresenceRepository {
    async fn get(&self, username: &str) -> AppResult<Option<UserPresenceRecord>> {
        sqlx::query_as::<_, UserPresenceRecord>(&format!(
            "SELECT {SELECT_COLUMNS} FROM presence_users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(self.pool.inner())
        .await
        .map_err(|e| store_error("Failed to find user by username", e))
    }

    async fn put_new(&self, record: &UserPresenceRecord) -> AppResult<()> {
        let result = sqlx::query(
            "INSERT INTO presence_users \
             (username, full_name, is_in_office, room, room_history, last_present_date) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (username) DO NOTHING",
        )
        .bind(&record.username)
        .bind(&record.full_name)
        .bind(record.is_in_office)
        .bind(&record.room)
        .bind(&record.room_history)
        .bind(record.last_present_date)
        .execute(self.pool.inner())
        .await
        .map_err(|e| store_error("Failed to insert user", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::already_exists(format!(
                "User '{}' already exists",
                record.username
            )));
        }
        Ok(())
    }

    async fn update_if_room_differs(
        &self,
        username: &str,
        change: &PresenceChange,
    ) -> AppResult<ConditionalWrite> {
        // Guard, flag/room write and history append in one statement.
        let result = sqlx::query(
            "UPDATE presence_users SET \
                 is_in_office = $2, \
                 room = $3, \
                 room_history = CASE WHEN $4 THEN array_append(room_history, $3) \
                                     ELSE room_history END, \
                 last_present_date = COALESCE($5::date, last_present_date), \
                 updated_at = NOW() \
             WHERE username = $1 AND room <> $3",
        )
        .bind(username)
        .bind(change.is_in_office)
        .bind(&change.room)
        .bind(change.append_history)
        .bind(change.present_on)
        .execute(self.pool.inner())
        .await
        .map_err(|e| store_error("Failed to update presence", e))?;

        if result.rows_affected() > 0 {
            return Ok(ConditionalWrite::Applied);
        }

        if self.exists(username).await? {
            debug!(username, room = %change.room, "Room unchanged, write skipped");
            Ok(ConditionalWrite::PredicateFailed)
        } else {
            Err(AppError::not_found(format!("User '{username}' not found")))
        }
    }

    async fn scan_usernames(&self) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT username FROM presence_users")
            .fetch_all(self.pool.inner())
            .await
            .map_err(|e| store_error("Failed to scan usernames", e))
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.pool.ping().await
    }
}

fn store_error(context: &str, err: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::StoreUnavailable, format!("{context}: {err}"), err)
}
