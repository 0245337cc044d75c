use crate::Result as DbErrorResult;
use crate::UserRepository;
use crate::repositories::user_row::{USER_COLUMNS, UserRow};

use ident_core::{NewUser, UserChanges, UserId, UserRecord};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sqlx::SqlitePool;

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// Stored timestamps have second resolution.
fn now_truncated() -> DateTime<Utc> {
    let now = Utc::now().timestamp();
    DateTime::from_timestamp(now, 0).unwrap_or_default()
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_all(&self) -> DbErrorResult<Vec<UserRecord>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at ASC, rowid ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(UserRecord::try_from).collect()
    }

    async fn find_by_id(&self, id: UserId) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRecord::try_from).transpose()
    }

    async fn find_by_user_name(&self, user_name: &str) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_name = ?"
        ))
        .bind(user_name)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRecord::try_from).transpose()
    }

    async fn create(&self, user: NewUser) -> DbErrorResult<UserRecord> {
        let now = now_truncated();
        let record = UserRecord {
            id: UserId::new(),
            user_name: user.user_name,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
              INSERT INTO users (
                  id, user_name, email, password_hash, role, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(record.id.to_string())
        .bind(&record.user_name)
        .bind(&record.email)
        .bind(&record.password_hash)
        .bind(&record.role)
        .bind(record.created_at.timestamp())
        .bind(record.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        debug!("Created user {}", record.id);
        Ok(record)
    }

    async fn update_by_id(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> DbErrorResult<Option<UserRecord>> {
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }

        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
              UPDATE users
              SET user_name = COALESCE(?, user_name),
                  email = COALESCE(?, email),
                  password_hash = COALESCE(?, password_hash),
                  updated_at = ?
              WHERE id = ?
              RETURNING {USER_COLUMNS}
              "#
        ))
        .bind(changes.user_name)
        .bind(changes.email)
        .bind(changes.password_hash)
        .bind(now_truncated().timestamp())
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRecord::try_from).transpose()
    }

    async fn delete_by_id(&self, id: UserId) -> DbErrorResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "DELETE FROM users WHERE id = ? RETURNING {USER_COLUMNS}"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRecord::try_from).transpose()
    }
}
