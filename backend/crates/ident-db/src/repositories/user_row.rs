use crate::{DbError, Result as DbErrorResult};

use ident_core::{UserId, UserRecord};

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::FromRow;

pub(crate) const USER_COLUMNS: &str =
    "id, user_name, email, password_hash, role, created_at, updated_at";

#[derive(Debug, FromRow)]
pub(crate) struct UserRow {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: UserRow) -> DbErrorResult<Self> {
        let id = UserId::parse(&row.id).map_err(|e| DbError::Decode {
            table: "users",
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let created_at =
            DateTime::from_timestamp(row.created_at, 0).ok_or_else(|| DbError::Decode {
                table: "users",
                message: format!("created_at out of range: {}", row.created_at),
                location: ErrorLocation::from(Location::caller()),
            })?;
        let updated_at =
            DateTime::from_timestamp(row.updated_at, 0).ok_or_else(|| DbError::Decode {
                table: "users",
                message: format!("updated_at out of range: {}", row.updated_at),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(UserRecord {
            id,
            user_name: row.user_name,
            email: row.email,
            password_hash: row.password_hash,
            role: row.role,
            created_at,
            updated_at,
        })
    }
}
