//! Like repository: insert-if-absent and delete-if-present on `(user, recipe)`.
//!
//! Both mutations report whether a row changed. The `UNIQUE (user_id,
//! recipe_id)` constraint makes that answer authoritative under concurrency.

use pantry_core::ids::PREFIX_LIKE;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, now};
use crate::service::PantryService;

impl PantryService {
    /// Returns `true` when a new like row was created.
    pub async fn insert_like(&self, user_id: &str, recipe_id: &str) -> Result<bool, DatabaseError> {
        let id = self.db().generate_id(PREFIX_LIKE).await?;
        let inserted = self
            .db()
            .conn()
            .execute(
                "INSERT INTO likes (id, user_id, recipe_id, created_at) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(user_id, recipe_id) DO NOTHING",
                libsql::params![id.as_str(), user_id, recipe_id, format_datetime(&now())],
            )
            .await?;
        Ok(inserted > 0)
    }

    /// Returns `true` when a like row existed and was removed.
    pub async fn delete_like(&self, user_id: &str, recipe_id: &str) -> Result<bool, DatabaseError> {
        let deleted = self
            .db()
            .conn()
            .execute(
                "DELETE FROM likes WHERE user_id = ?1 AND recipe_id = ?2",
                [user_id, recipe_id],
            )
            .await?;
        Ok(deleted > 0)
    }

    pub async fn has_like(&self, user_id: &str, recipe_id: &str) -> Result<bool, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT 1 FROM likes WHERE user_id = ?1 AND recipe_id = ?2",
                [user_id, recipe_id],
            )
            .await?;
        Ok(rows.next().await?.is_some())
    }

    pub async fn count_likes(&self, recipe_id: &str) -> Result<u64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM likes WHERE recipe_id = ?1", [recipe_id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count)
            .map_err(|_| DatabaseError::InvalidState(format!("negative like count {count}")))
    }
}
