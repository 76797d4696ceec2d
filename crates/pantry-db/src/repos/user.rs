//! User repository: registration and token lookup.

use pantry_core::entities::{Registration, User};
use pantry_core::ids::PREFIX_USER;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, now, parse_datetime};
use crate::service::PantryService;

const SELECT_COLS: &str = "id, username, created_at";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
    })
}

impl PantryService {
    /// Register a new user and issue its bearer token.
    ///
    /// Returns `None` when the username is already taken.
    pub async fn create_user(&self, username: &str) -> Result<Option<Registration>, DatabaseError> {
        let now = now();
        let id = self.db().generate_id(PREFIX_USER).await?;
        let token = self.db().generate_token().await?;

        let inserted = self
            .db()
            .conn()
            .execute(
                "INSERT INTO users (id, username, token, created_at) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(username) DO NOTHING",
                libsql::params![id.as_str(), username, token.as_str(), format_datetime(&now)],
            )
            .await?;

        if inserted == 0 {
            tracing::debug!(username, "username already registered");
            return Ok(None);
        }

        Ok(Some(Registration {
            user: User {
                id,
                username: username.to_string(),
                created_at: now,
            },
            token,
        }))
    }

    /// Fetch a user by id.
    pub async fn get_user(&self, id: &str) -> Result<User, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM users WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_user(&row)
    }

    /// Resolve a bearer token to its user.
    pub async fn get_user_by_token(&self, token: &str) -> Result<User, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM users WHERE token = ?1"),
                [token],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_user(&row)
    }

    pub async fn user_exists(&self, id: &str) -> Result<bool, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT 1 FROM users WHERE id = ?1", [id])
            .await?;
        Ok(rows.next().await?.is_some())
    }
}
