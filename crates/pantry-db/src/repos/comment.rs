//! Comment repository.

use pantry_core::entities::Comment;
use pantry_core::ids::PREFIX_COMMENT;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, now, parse_datetime};
use crate::service::PantryService;

const SELECT_COLS: &str = "id, user_id, recipe_id, body, created_at";

fn row_to_comment(row: &libsql::Row) -> Result<Comment, DatabaseError> {
    Ok(Comment {
        id: row.get(0)?,
        user_id: row.get(1)?,
        recipe_id: row.get(2)?,
        body: row.get(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl PantryService {
    pub async fn create_comment(
        &self,
        user_id: &str,
        recipe_id: &str,
        body: &str,
    ) -> Result<Comment, DatabaseError> {
        let now = now();
        let id = self.db().generate_id(PREFIX_COMMENT).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO comments (id, user_id, recipe_id, body, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![id.as_str(), user_id, recipe_id, body, format_datetime(&now)],
            )
            .await?;

        Ok(Comment {
            id,
            user_id: user_id.to_string(),
            recipe_id: recipe_id.to_string(),
            body: body.to_string(),
            created_at: now,
        })
    }

    /// Comments on a recipe, oldest first.
    pub async fn list_comments(&self, recipe_id: &str) -> Result<Vec<Comment>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM comments WHERE recipe_id = ?1 ORDER BY created_at ASC, id ASC"
                ),
                [recipe_id],
            )
            .await?;

        let mut comments = Vec::new();
        while let Some(row) = rows.next().await? {
            comments.push(row_to_comment(&row)?);
        }
        Ok(comments)
    }
}
